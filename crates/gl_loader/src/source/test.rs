// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{ffi::c_void, ptr};

use super::{ContextVersion, DetectVersionError, ProcSource, SymbolSource, VersionParseError};
use crate::testing::MockSource;

fn parse(s: &str) -> Result<ContextVersion, VersionParseError> {
	s.parse()
}

#[test]
fn test_parse_vendor_strings() {
	assert_eq!(parse("4.6.0 NVIDIA 535.54.03"), Ok(ContextVersion::new(4, 6)));
	assert_eq!(parse("3.3 (Core Profile) Mesa 23.1.4"), Ok(ContextVersion::new(3, 3)));
	assert_eq!(parse("4.6 (Compatibility Profile) Mesa 23.1.4"), Ok(ContextVersion::new(4, 6)));
	assert_eq!(parse("2.1"), Ok(ContextVersion::new(2, 1)));
	assert_eq!(parse("  1.4.0 - Build 8.14.10.1930\n"), Ok(ContextVersion::new(1, 4)));
}

#[test]
fn test_parse_rejects_es_versions() {
	assert_eq!(
		parse("OpenGL ES 3.2 v1.r32p1"),
		Err(VersionParseError::Embedded("OpenGL ES 3.2 v1.r32p1".into())),
	);
	assert_eq!(parse(" OpenGL ES-CM 1.1\n"), Err(VersionParseError::Embedded("OpenGL ES-CM 1.1".into())));
}

#[test]
fn test_parse_errors() {
	assert_eq!(parse(""), Err(VersionParseError::Empty));
	assert_eq!(parse("   "), Err(VersionParseError::Empty));
	assert_eq!(parse("4 NVIDIA"), Err(VersionParseError::MissingMinor("4 NVIDIA".into())));
	assert_eq!(parse("four.six"), Err(VersionParseError::InvalidNumber("four.six".into())));
	assert_eq!(parse("4."), Err(VersionParseError::InvalidNumber("4.".into())));
}

#[test]
fn test_ordering() {
	let v33 = ContextVersion::new(3, 3);

	assert!(v33.at_least(3, 3));
	assert!(v33.at_least(2, 1));
	assert!(v33.at_least(3, 0));
	assert!(!v33.at_least(4, 0));
	assert!(!v33.at_least(3, 4));
	assert!(ContextVersion::new(4, 0) > ContextVersion::new(3, 9));
	assert!(ContextVersion::new(1, 10) > ContextVersion::new(1, 5));
	assert_eq!(v33.to_string(), "3.3");
}

#[test]
fn test_proc_source_forwards_lookups() {
	let mut asked = Vec::new();
	let mut source = ProcSource::new(ContextVersion::new(4, 1), |name: &str| -> *const c_void {
		asked.push(name.to_owned());
		match name {
			"glClear" => 0x40 as *const c_void,
			_ => ptr::null(),
		}
	});

	assert_eq!(source.version(), ContextVersion::new(4, 1));
	assert_eq!(source.get_proc_address("glClear"), 0x40 as *const c_void);
	assert!(source.get_proc_address("glBogus").is_null());
	drop(source);

	assert_eq!(asked, ["glClear", "glBogus"]);
}

#[test]
fn test_detect_reads_version_string() {
	let mut mock = MockSource::sparse(1, 1);
	mock.set_version_string("4.5.0 NVIDIA 470.199.02");

	let source = unsafe { ProcSource::detect(|name: &str| mock.get_proc_address(name)) }.unwrap();
	assert_eq!(source.version(), ContextVersion::new(4, 5));
}

#[test]
fn test_detect_without_get_string() {
	let result = unsafe { ProcSource::detect(|_: &str| -> *const c_void { ptr::null() }) };
	assert!(matches!(result, Err(DetectVersionError::MissingGetString)));
}

#[test]
fn test_detect_bad_version_string() {
	let mut mock = MockSource::sparse(1, 1);
	mock.set_version_string("garbage");

	let result = unsafe { ProcSource::detect(|name: &str| mock.get_proc_address(name)) };
	assert!(matches!(result, Err(DetectVersionError::Parse(VersionParseError::MissingMinor(_)))));
}

#[test]
fn test_detect_rejects_es_context() {
	let mut mock = MockSource::sparse(1, 1);
	mock.set_version_string("OpenGL ES 3.2 v1.r32p1");

	let result = unsafe { ProcSource::detect(|name: &str| mock.get_proc_address(name)) };
	assert!(matches!(result, Err(DetectVersionError::Parse(VersionParseError::Embedded(_)))));
}
