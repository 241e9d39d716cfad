// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use super::ExtensionSet;
use crate::testing::MockSource;

const ADVERTISED: &[&str] = &["GL_ARB_sync", "GL_EXT_copy_buffer", "GL_KHR_debug"];

#[test]
fn test_indexed_query() {
	let mut source = MockSource::sparse(3, 0);
	source.advertise(ADVERTISED);

	let set = unsafe { ExtensionSet::query(&mut source) };

	assert_eq!(set.len(), 3);
	assert!(ADVERTISED.iter().all(|name| set.contains(name)));
	assert!(!set.contains("GL_ARB_copy_buffer"));
}

#[test]
fn test_legacy_query() {
	let mut source = MockSource::sparse(2, 1);
	source.advertise(ADVERTISED);
	source.withhold(&["glGetStringi"]);

	let set = unsafe { ExtensionSet::query(&mut source) };

	assert_eq!(set, ExtensionSet::from_iter(ADVERTISED.iter().copied()));
}

#[test]
fn test_matching_is_exact() {
	let set = ExtensionSet::from_iter(["GL_ARB_sync"]);

	assert!(set.contains("GL_ARB_sync"));
	assert!(!set.contains("gl_arb_sync"));
	assert!(!set.contains("GL_ARB_sync "));
	assert!(!set.contains("GL_ARB"));
}

#[test]
fn test_indexed_query_needs_get_string_i() {
	let mut source = MockSource::sparse(3, 3);
	source.advertise(ADVERTISED);
	source.withhold(&["glGetStringi"]);

	let set = unsafe { ExtensionSet::query(&mut source) };

	assert!(set.is_empty());
}

#[test]
fn test_null_source_is_empty() {
	let mut source = MockSource::null(4, 6);
	source.advertise(ADVERTISED);

	assert!(unsafe { ExtensionSet::query(&mut source) }.is_empty());
	assert!(unsafe { ExtensionSet::query(&mut MockSource::null(2, 0)) }.is_empty());
}

#[test]
fn test_from_iter_skips_empty_names() {
	let set = ["GL_ARB_sync", "", "GL_ARB_sync", "GL_KHR_debug"].into_iter().collect::<ExtensionSet>();

	assert_eq!(set.len(), 2);

	let mut names = set.iter().collect::<Vec<_>>();
	names.sort_unstable();
	assert_eq!(names, ["GL_ARB_sync", "GL_KHR_debug"]);
}

#[test]
fn test_legacy_list_split_on_spaces() {
	let mut source = MockSource::sparse(2, 1);
	source.set_extension_string(b" GL_ARB_sync  GL_KHR_debug ");

	let set = unsafe { ExtensionSet::query(&mut source) };

	assert_eq!(set.len(), 2);
	assert!(set.contains("GL_ARB_sync"));
	assert!(set.contains("GL_KHR_debug"));
}

#[test]
fn test_legacy_list_skips_invalid_utf8() {
	let mut source = MockSource::sparse(2, 1);
	source.set_extension_string(b"GL_ARB_sync GL_\xFFbroken GL_KHR_debug");

	let set = unsafe { ExtensionSet::query(&mut source) };

	assert_eq!(set, ExtensionSet::from_iter(["GL_ARB_sync", "GL_KHR_debug"]));
}
