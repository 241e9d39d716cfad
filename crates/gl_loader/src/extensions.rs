// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{
	collections::HashSet,
	ffi::{c_char, CStr},
};

use gl::types::{GLenum, GLint, GLubyte, GLuint};

use crate::{
	loader::{load_new, SymbolTable},
	source::SymbolSource,
};

#[cfg(test)]
mod test;

#[derive(Default, SymbolTable)]
#[allow(non_snake_case)]
struct QueryFunctions {
	glGetString: Option<unsafe extern "system" fn(GLenum) -> *const GLubyte>,
	glGetIntegerv: Option<unsafe extern "system" fn(GLenum, *mut GLint)>,
	glGetStringi: Option<unsafe extern "system" fn(GLenum, GLuint) -> *const GLubyte>,
}

/// Extension names advertised by a context. Matching is exact and case sensitive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
	names: HashSet<String>,
}

impl ExtensionSet {
	/// Ask the driver for its extension list.
	///
	/// Contexts reporting 3.0 or later are queried one name at a time through
	/// `glGetStringi`, older ones through the space separated `glGetString`
	/// list. If the chosen query is not exported, the set is empty.
	///
	/// # SAFETY
	/// * must be called from GL thread, with the context of `source` current
	pub unsafe fn query<S: SymbolSource + ?Sized>(source: &mut S) -> Self {
		let (functions, _) = load_new::<_, QueryFunctions>(source);

		let names = match source.version().at_least(3, 0) {
			true => query_indexed(&functions),
			false => query_legacy(&functions),
		};

		names.unwrap_or_else(|| {
			log::warn!("could not query extensions, treating every extension as absent");
			Self::default()
		})
	}

	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.names.contains(name)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Names in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}
}

impl<S: Into<String>> FromIterator<S> for ExtensionSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self {
			names: iter.into_iter().map(Into::into).filter(|name: &String| !name.is_empty()).collect(),
		}
	}
}

unsafe fn query_indexed(functions: &QueryFunctions) -> Option<ExtensionSet> {
	let get_integer = functions.glGetIntegerv?;
	let get_string_i = functions.glGetStringi?;

	let mut count = 0 as GLint;
	get_integer(gl::NUM_EXTENSIONS, &mut count);

	Some(
		(0..count.max(0) as GLuint)
			.filter_map(|index| {
				let name = get_string_i(gl::EXTENSIONS, index);
				match name.is_null() {
					true => None,
					false => utf8_name(CStr::from_ptr(name as *const c_char).to_bytes()),
				}
			})
			.collect(),
	)
}

unsafe fn query_legacy(functions: &QueryFunctions) -> Option<ExtensionSet> {
	let get_string = functions.glGetString?;

	let list = get_string(gl::EXTENSIONS);
	if list.is_null() {
		return None
	}

	Some(
		CStr::from_ptr(list as *const c_char)
			.to_bytes()
			.split(|&b| b == b' ')
			.filter(|name| !name.is_empty())
			.filter_map(utf8_name)
			.collect(),
	)
}

fn utf8_name(name: &[u8]) -> Option<&str> {
	match std::str::from_utf8(name) {
		Ok(name) => Some(name),
		Err(_) => {
			log::warn!("skipping extension name that is not valid utf8: {name:?}");
			None
		},
	}
}
