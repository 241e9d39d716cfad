// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{
	ffi::{c_char, c_void, CStr},
	fmt,
	mem,
	str::FromStr,
};

use gl::types::{GLenum, GLubyte};
use thiserror::Error;

#[cfg(test)]
mod test;

/// Procedure address lookup for one live context, provided by the windowing layer.
pub trait SymbolSource {
	/// Address of the entry point named `name`, or null if the driver does not export it.
	fn get_proc_address(&mut self, name: &str) -> *const c_void;
	/// Core version reported by the context.
	fn version(&self) -> ContextVersion;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextVersion {
	pub major: u32,
	pub minor: u32,
}

impl ContextVersion {
	pub const fn new(major: u32, minor: u32) -> Self {
		Self { major, minor }
	}

	#[inline]
	pub fn at_least(self, major: u32, minor: u32) -> bool {
		self >= Self::new(major, minor)
	}
}

impl fmt::Display for ContextVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.major, self.minor)
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
	#[error("version string is empty")]
	Empty,
	#[error("no minor version in {0:?}")]
	MissingMinor(String),
	#[error("invalid version number in {0:?}")]
	InvalidNumber(String),
	#[error("{0:?} is an OpenGL ES version, desktop tiers cannot be derived from it")]
	Embedded(String),
}

impl FromStr for ContextVersion {
	type Err = VersionParseError;

	/// Parse a desktop `GL_VERSION` string.
	///
	/// Accepts `"4.6.0 NVIDIA 535.54"`, `"3.3 (Core Profile) Mesa 23.1.4"` and
	/// plain `"2.1"`. Anything after the minor version is ignored. OpenGL ES
	/// version strings are rejected.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let version = s.trim();
		if version.starts_with("OpenGL ES") {
			return Err(VersionParseError::Embedded(version.to_owned()))
		}

		let number = version.split_whitespace().next().ok_or(VersionParseError::Empty)?;
		let mut parts = number.split('.');

		let major = parts.next().unwrap_or_default();
		let minor = parts.next().ok_or_else(|| VersionParseError::MissingMinor(version.to_owned()))?;

		let parse = |part: &str| {
			part.parse::<u32>().map_err(|_| VersionParseError::InvalidNumber(version.to_owned()))
		};

		Ok(Self::new(parse(major)?, parse(minor)?))
	}
}

#[derive(Debug, Error)]
pub enum DetectVersionError {
	#[error("glGetString could not be resolved")]
	MissingGetString,
	#[error("glGetString(GL_VERSION) returned null (is the context current?)")]
	NoVersionString,
	#[error("could not parse GL_VERSION: {0}")]
	Parse(#[from] VersionParseError),
}

/// [`SymbolSource`] over a procedure address closure, such as
/// `|name| window.get_proc_address(name)`.
pub struct ProcSource<F> {
	loadfn: F,
	version: ContextVersion,
}

impl<F: FnMut(&str) -> *const c_void> ProcSource<F> {
	pub fn new(version: ContextVersion, loadfn: F) -> Self {
		Self { loadfn, version }
	}

	/// Build a source for a context whose version the windowing layer does not report,
	/// by reading `GL_VERSION` from the driver.
	///
	/// # SAFETY
	/// * must be called from GL thread, with the context current
	/// * `loadfn` must return entry points of that context
	pub unsafe fn detect(mut loadfn: F) -> Result<Self, DetectVersionError> {
		let get_string = loadfn("glGetString");
		if get_string.is_null() {
			return Err(DetectVersionError::MissingGetString)
		}

		let get_string =
			mem::transmute::<*const c_void, unsafe extern "system" fn(GLenum) -> *const GLubyte>(
				get_string,
			);

		let version = get_string(gl::VERSION);
		if version.is_null() {
			return Err(DetectVersionError::NoVersionString)
		}

		let version = CStr::from_ptr(version as *const c_char).to_string_lossy().parse()?;

		Ok(Self { loadfn, version })
	}
}

impl<F: FnMut(&str) -> *const c_void> SymbolSource for ProcSource<F> {
	#[inline]
	fn get_proc_address(&mut self, name: &str) -> *const c_void {
		(self.loadfn)(name)
	}

	fn version(&self) -> ContextVersion {
		self.version
	}
}
