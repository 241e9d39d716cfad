// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use super::{load, load_new, loaded, resolve, sizei, LoadStats, SlotDescriptor, SymbolTable};
use crate::{feature::NoFunctions, testing::MockSource};

#[derive(Default, SymbolTable)]
struct CopyFunctions {
	#[alias("glCopyBufferSubDataARB", "glCopyBufferSubDataEXT")]
	glCopyBufferSubData: Option<unsafe extern "system" fn()>,
	glFinish: Option<unsafe extern "system" fn()>,
}

const COPY: SlotDescriptor = SlotDescriptor {
	name: "glCopyBufferSubData",
	aliases: &["glCopyBufferSubDataARB", "glCopyBufferSubDataEXT"],
};

#[test]
fn test_derived_slots() {
	assert_eq!(CopyFunctions::SLOTS, &[COPY, SlotDescriptor { name: "glFinish", aliases: &[] }]);
	assert!(NoFunctions::SLOTS.is_empty());
	assert_eq!(
		COPY.names().collect::<Vec<_>>(),
		["glCopyBufferSubData", "glCopyBufferSubDataARB", "glCopyBufferSubDataEXT"],
	);
}

#[test]
fn test_canonical_name_wins() {
	let mut source = MockSource::new(3, 3);
	let canonical = source.address_of("glCopyBufferSubData");

	assert_eq!(resolve(&mut source, &COPY), canonical);
	assert_eq!(source.lookups_of("glCopyBufferSubDataARB"), 0);
}

#[test]
fn test_first_resolvable_alias_wins() {
	let mut source = MockSource::sparse(3, 0);
	let arb = source.export("glCopyBufferSubDataARB");
	source.export("glCopyBufferSubDataEXT");

	assert_eq!(resolve(&mut source, &COPY), arb);
	assert_eq!(source.lookups_of("glCopyBufferSubDataEXT"), 0);

	let mut source = MockSource::sparse(3, 0);
	let ext = source.export("glCopyBufferSubDataEXT");

	assert_eq!(resolve(&mut source, &COPY), ext);
	assert_eq!(source.lookups_of("glCopyBufferSubData"), 1);
	assert_eq!(source.lookups_of("glCopyBufferSubDataARB"), 1);
}

#[test]
fn test_unresolved_slot_stays_empty() {
	let mut source = MockSource::sparse(3, 0);
	let finish = source.export("glFinish");

	let (table, stats) = load_new::<_, CopyFunctions>(&mut source);

	assert_eq!(stats, LoadStats { resolved: 1, missing: 1 });
	assert!(table.glCopyBufferSubData.is_none());
	assert_eq!(table.slot_address(1), finish);
	assert_eq!(table.resolved(), 1);
	assert_eq!(table.address_of("glFinish"), Some(finish));
	assert_eq!(table.address_of("glCopyBufferSubData"), Some(std::ptr::null()));
	assert_eq!(table.address_of("glCopyBufferSubDataARB"), None);
}

#[test]
fn test_load_is_idempotent() {
	let mut source = MockSource::sparse(3, 0);
	source.export("glCopyBufferSubDataEXT");

	let (first, first_stats) = load_new::<_, CopyFunctions>(&mut source);
	let (second, second_stats) = load_new::<_, CopyFunctions>(&mut source);

	assert_eq!(first_stats, second_stats);
	for index in 0..CopyFunctions::SLOTS.len() {
		assert_eq!(first.slot_address(index), second.slot_address(index));
	}
}

#[test]
fn test_reload_clears_vanished_slots() {
	let mut source = MockSource::new(3, 0);
	let mut table = CopyFunctions::default();

	assert_eq!(load(&mut source, &mut table), LoadStats { resolved: 2, missing: 0 });

	source.withhold(&["glFinish"]);
	assert_eq!(load(&mut source, &mut table), LoadStats { resolved: 1, missing: 1 });
	assert!(table.glFinish.is_none());
	assert!(table.glCopyBufferSubData.is_some());
}

#[test]
fn test_loaded_passes_bound_slot() {
	extern "system" fn answer() -> u32 {
		42
	}

	let slot: Option<extern "system" fn() -> u32> = Some(answer);
	assert_eq!(loaded(slot, "answer")(), 42);
}

#[test]
#[should_panic(expected = "glFinish was not loaded")]
fn test_loaded_panics_on_empty_slot() {
	let table = CopyFunctions::default();
	let _ = loaded(table.glFinish, "glFinish");
}

#[test]
fn test_sizei_in_range() {
	assert_eq!(sizei(0, "list"), 0);
	assert_eq!(sizei(i32::MAX as usize, "list"), i32::MAX);
}

#[test]
#[should_panic(expected = "message is too long for GL")]
fn test_sizei_overflow_panics() {
	sizei(i32::MAX as usize + 1, "message");
}
