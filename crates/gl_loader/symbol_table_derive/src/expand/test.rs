// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use syn::{parse_quote, DeriveInput};

use super::{expand, slots};

#[test]
fn test_slots_keep_declaration_order() {
	let input: DeriveInput = parse_quote! {
		struct Functions {
			#[alias("glBindBufferRangeARB", "glBindBufferRangeEXT")]
			glBindBufferRange: Option<unsafe extern "system" fn()>,
			glFinish: Option<unsafe extern "system" fn()>,
			#[alias("glBindBufferOffsetARB")]
			#[alias("glBindBufferOffsetEXT", "glBindBufferOffsetNV")]
			glBindBufferOffset: Option<unsafe extern "system" fn()>,
		}
	};

	let slots = slots(&input).unwrap();

	let names = slots.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
	assert_eq!(names, ["glBindBufferRange", "glFinish", "glBindBufferOffset"]);

	let aliases = slots
		.iter()
		.map(|s| s.aliases.iter().map(|a| a.value()).collect::<Vec<_>>())
		.collect::<Vec<_>>();
	assert_eq!(aliases, [
		vec!["glBindBufferRangeARB", "glBindBufferRangeEXT"],
		vec![],
		vec!["glBindBufferOffsetARB", "glBindBufferOffsetEXT", "glBindBufferOffsetNV"],
	]);
}

#[test]
fn test_unit_struct_has_no_slots() {
	let input: DeriveInput = parse_quote! {
		struct NoFunctions;
	};

	assert!(slots(&input).unwrap().is_empty());
	assert!(expand(&input).is_ok());
}

#[test]
fn test_rejects_tuple_structs_and_enums() {
	let tuple: DeriveInput = parse_quote! {
		struct Functions(Option<unsafe extern "system" fn()>);
	};
	let enumeration: DeriveInput = parse_quote! {
		enum Functions { A }
	};

	assert!(slots(&tuple).is_err());
	assert!(slots(&enumeration).is_err());
}

#[test]
fn test_rejects_bad_aliases() {
	let canonical: DeriveInput = parse_quote! {
		struct Functions {
			#[alias("glFinish")]
			glFinish: Option<unsafe extern "system" fn()>,
		}
	};
	let duplicate: DeriveInput = parse_quote! {
		struct Functions {
			#[alias("glFinishARB", "glFinishARB")]
			glFinish: Option<unsafe extern "system" fn()>,
		}
	};
	let empty: DeriveInput = parse_quote! {
		struct Functions {
			#[alias("")]
			glFinish: Option<unsafe extern "system" fn()>,
		}
	};

	for input in [canonical, duplicate, empty] {
		assert!(slots(&input).is_err());
	}
}

#[test]
fn test_expansion_declares_descriptors() {
	let input: DeriveInput = parse_quote! {
		struct Functions {
			#[alias("glTextureBarrierNV")]
			glTextureBarrier: Option<unsafe extern "system" fn()>,
		}
	};

	let expanded = expand(&input).unwrap().to_string();

	assert!(expanded.contains("\"glTextureBarrier\""));
	assert!(expanded.contains("\"glTextureBarrierNV\""));
	assert!(expanded.contains("SymbolTable for Functions"));
}
