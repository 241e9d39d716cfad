// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! In-process stand-in for a driver.

use std::{
	cell::RefCell,
	collections::{HashMap, HashSet},
	ffi::{c_void, CString},
	ptr,
};

use gl::types::{GLenum, GLint, GLubyte, GLuint};

use crate::{
	feature::Requirement,
	source::{ContextVersion, SymbolSource},
};

#[derive(Default)]
struct DriverStrings {
	extensions: Vec<CString>,
	extension_list: CString,
	version: CString,
}

thread_local! {
	static STRINGS: RefCell<DriverStrings> = RefCell::new(DriverStrings::default());
}

extern "system" fn get_string(name: GLenum) -> *const GLubyte {
	STRINGS.with(|strings| {
		let strings = strings.borrow();
		match name {
			gl::EXTENSIONS => strings.extension_list.as_ptr() as *const GLubyte,
			gl::VERSION => strings.version.as_ptr() as *const GLubyte,
			_ => ptr::null(),
		}
	})
}

extern "system" fn get_integerv(name: GLenum, data: *mut GLint) {
	if name == gl::NUM_EXTENSIONS {
		let count = STRINGS.with(|strings| strings.borrow().extensions.len());
		unsafe { *data = count as GLint };
	}
}

extern "system" fn get_string_i(name: GLenum, index: GLuint) -> *const GLubyte {
	STRINGS.with(|strings| match name {
		gl::EXTENSIONS => strings
			.borrow()
			.extensions
			.get(index as usize)
			.map_or(ptr::null(), |name| name.as_ptr() as *const GLubyte),
		_ => ptr::null(),
	})
}

/// A driver that exports every entry point it is asked for, unless told otherwise.
///
/// Entry points get distinct fake addresses that must never be called. The
/// extension and version queries are real functions reading thread local state,
/// so one `MockSource` should be alive per test.
pub struct MockSource {
	version: ContextVersion,
	export_all: bool,
	advertised: Vec<String>,
	exported: HashMap<String, *const c_void>,
	withheld: HashSet<String>,
	lookups: Vec<String>,
	next_address: usize,
}

impl MockSource {
	/// Driver exporting every name except withheld ones, advertising nothing.
	pub fn new(major: u32, minor: u32) -> Self {
		let mut source = Self {
			version: ContextVersion::new(major, minor),
			export_all: true,
			advertised: Vec::new(),
			exported: HashMap::new(),
			withheld: HashSet::new(),
			lookups: Vec::new(),
			next_address: 0x1000,
		};

		source.exported.insert("glGetString".into(), get_string as *const c_void);
		source.exported.insert("glGetIntegerv".into(), get_integerv as *const c_void);
		source.exported.insert("glGetStringi".into(), get_string_i as *const c_void);
		source.sync_strings();
		source.set_version_string(&format!("{major}.{minor}.0 Mock"));
		source
	}

	/// Driver exporting the extension queries and explicitly exported names only.
	pub fn sparse(major: u32, minor: u32) -> Self {
		Self { export_all: false, ..Self::new(major, minor) }
	}

	/// Driver whose lookup function always returns null.
	pub fn null(major: u32, minor: u32) -> Self {
		let mut source = Self::sparse(major, minor);
		source.exported.clear();
		source
	}

	pub fn advertise(&mut self, names: &[&str]) -> &mut Self {
		for name in names {
			if !self.advertised.iter().any(|x| x == name) {
				self.advertised.push(name.to_string());
			}
		}
		self.sync_strings();
		self
	}

	pub fn export(&mut self, name: &str) -> *const c_void {
		self.withheld.remove(name);
		self.assign(name)
	}

	pub fn withhold(&mut self, names: &[&str]) -> &mut Self {
		for name in names {
			self.exported.remove(*name);
			self.withheld.insert(name.to_string());
		}
		self
	}

	/// Advertise and export whatever `requirement` asks for, taking the first
	/// option of every alternative.
	pub fn satisfy(&mut self, requirement: &Requirement) -> &mut Self {
		match *requirement {
			Requirement::Extension(name) => {
				self.advertise(&[name]);
			},
			Requirement::Symbol(name) => {
				self.export(name);
			},
			Requirement::AnyOf(list) =>
				if let Some(first) = list.first() {
					self.satisfy(first);
				},
			Requirement::AllOf(list) =>
				for requirement in list {
					self.satisfy(requirement);
				},
		}
		self
	}

	pub fn satisfy_all(&mut self, requirements: &[Requirement]) -> &mut Self {
		for requirement in requirements {
			self.satisfy(requirement);
		}
		self
	}

	/// Address handed out for `name`, assigning one if needed.
	pub fn address_of(&mut self, name: &str) -> *const c_void {
		self.assign(name)
	}

	pub fn set_version_string(&mut self, version: &str) {
		let version = CString::new(version).unwrap();
		STRINGS.with(|strings| strings.borrow_mut().version = version);
	}

	/// Replace the legacy `GL_EXTENSIONS` string with raw driver bytes.
	pub fn set_extension_string(&mut self, list: &[u8]) {
		let list = CString::new(list).unwrap();
		STRINGS.with(|strings| strings.borrow_mut().extension_list = list);
	}

	/// How often `name` was looked up.
	pub fn lookups_of(&self, name: &str) -> usize {
		self.lookups.iter().filter(|x| *x == name).count()
	}

	pub fn total_lookups(&self) -> usize {
		self.lookups.len()
	}

	fn assign(&mut self, name: &str) -> *const c_void {
		if let Some(address) = self.exported.get(name) {
			return *address
		}

		let address = self.next_address as *const c_void;
		self.next_address += 0x10;
		self.exported.insert(name.to_owned(), address);
		address
	}

	fn sync_strings(&self) {
		let extensions = self
			.advertised
			.iter()
			.map(|name| CString::new(name.as_str()).unwrap())
			.collect::<Vec<_>>();
		let extension_list = CString::new(self.advertised.join(" ")).unwrap();

		STRINGS.with(|strings| {
			let mut strings = strings.borrow_mut();
			strings.extensions = extensions;
			strings.extension_list = extension_list;
		});
	}
}

impl SymbolSource for MockSource {
	fn get_proc_address(&mut self, name: &str) -> *const c_void {
		self.lookups.push(name.to_owned());

		if self.withheld.contains(name) {
			return ptr::null()
		}

		match self.exported.get(name) {
			Some(address) => *address,
			None if self.export_all => self.assign(name),
			None => ptr::null(),
		}
	}

	fn version(&self) -> ContextVersion {
		self.version
	}
}
