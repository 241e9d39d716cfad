// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::rc::Rc;

use super::Gl;
use crate::{
	config::{LoaderConfig, ProbePolicy},
	feature::{Availability, Extension, Requirement},
	loader::SymbolTable,
	source::ContextVersion,
	testing::MockSource,
	tier::*,
};

fn load(source: &mut MockSource) -> Gl {
	unsafe { Gl::load_with_config(source, LoaderConfig::default()) }
}

fn assert_monotonic(gl: &Gl) {
	for pair in gl.tiers().windows(2) {
		let ((lower, lower_available), (higher, higher_available)) = (pair[0], pair[1]);
		assert!(!higher_available || lower_available, "{higher} available without {lower}");
	}
}

/// Extension names checked by a requirement when the driver advertises nothing.
fn probes_when_absent(requirement: &Requirement) -> usize {
	match requirement {
		Requirement::Extension(_) => 1,
		Requirement::Symbol(_) => 0,
		Requirement::AnyOf(list) => list.iter().map(probes_when_absent).sum(),
		Requirement::AllOf(list) => list.first().map_or(0, probes_when_absent),
	}
}

#[test]
fn test_version_implies_lower_tiers() {
	let mut source = MockSource::new(4, 0);
	let gl = load(&mut source);

	assert_monotonic(&gl);
	for (version, available) in gl.tiers() {
		assert_eq!(available, version <= ContextVersion::new(4, 0), "{version}");
	}

	let implied = [
		Gl30Features::NAMES,
		Gl31Features::NAMES,
		Gl32Features::NAMES,
		Gl33Features::NAMES,
		Gl40Features::NAMES,
	]
	.iter()
	.map(|names| names.len())
	.sum::<usize>();

	assert!(gl.report()[..implied].iter().all(|status| status.availability == Availability::Implied));
	assert!(gl.report()[implied..].iter().all(|status| status.availability == Availability::Unavailable));

	// only the tiers above 4.0 and the common extensions looked at the extension set
	let probed = [
		Gl41Features::REQUIREMENTS,
		Gl42Features::REQUIREMENTS,
		Gl43Features::REQUIREMENTS,
		Gl44Features::REQUIREMENTS,
		Gl45Features::REQUIREMENTS,
		Gl46Features::REQUIREMENTS,
		CommonFeatures::REQUIREMENTS,
	]
	.iter()
	.flat_map(|requirements| requirements.iter())
	.map(probes_when_absent)
	.sum::<usize>();

	assert_eq!(gl.stats().extension_probes, probed);
	assert_eq!(gl.effective_version(), ContextVersion::new(4, 0));
}

#[test]
fn test_core_46_without_extension_strings() {
	let mut source = MockSource::new(4, 6);
	let gl = load(&mut source);

	assert!(gl.extensions().is_empty());
	assert!(gl.tiers().iter().all(|&(_, available)| available));
	assert_eq!(gl.effective_version(), ContextVersion::new(4, 6));

	// the common extensions are never implied
	assert_eq!(gl.stats().extension_probes, CommonFeatures::NAMES.len());
	assert!(gl.common().arb_bindless_texture.is_none());
	assert_eq!(gl.availability("GL_ARB_bindless_texture"), Some(Availability::Unavailable));
	assert_eq!(gl.availability("GL_ARB_gl_spirv"), Some(Availability::Implied));
	assert_eq!(gl.availability("GL_ARB_made_up"), None);
}

#[test]
fn test_features_are_shared_between_tiers() {
	let mut source = MockSource::new(4, 6);
	let gl = load(&mut source);

	let storage = gl.features().gl44.arb_buffer_storage.as_ref().unwrap();
	let gl44 = gl.gl44().unwrap();
	let gl46 = gl.gl46().unwrap();

	assert!(Rc::ptr_eq(storage, &gl44.arb_buffer_storage));
	assert!(Rc::ptr_eq(storage, &gl46.arb_buffer_storage));
	assert!(Rc::ptr_eq(gl46.previous().previous(), gl44));
	assert!(Rc::ptr_eq(&gl46.khr_debug, gl.features().gl43.khr_debug.as_ref().unwrap()));

	assert_eq!(source.lookups_of("glBufferStorage"), 1);
	assert_eq!(source.lookups_of("glClear"), 1);
	assert_eq!(
		storage.functions().address_of("glBufferStorage"),
		Some(source.address_of("glBufferStorage")),
	);
}

#[test]
fn test_alias_group_bound_through_ext_name() {
	let mut source = MockSource::new(3, 0);
	source.satisfy_all(
		&Gl31Features::REQUIREMENTS
			.iter()
			.copied()
			.filter(|requirement| *requirement != ArbCopyBuffer::REQUIREMENT)
			.collect::<Vec<_>>(),
	);
	source.advertise(&["GL_EXT_copy_buffer"]);
	source.withhold(&["glCopyBufferSubData", "glCopyBufferSubDataARB"]);

	let gl = load(&mut source);

	assert_eq!(gl.availability(ArbCopyBuffer::NAME), Some(Availability::Probed));
	assert!(gl.gl31().is_some());
	assert!(gl.gl32().is_none());
	assert_monotonic(&gl);

	let copy = &gl.gl31().unwrap().arb_copy_buffer;
	assert_eq!(
		copy.functions().address_of("glCopyBufferSubData"),
		Some(source.address_of("glCopyBufferSubDataEXT")),
	);
}

#[test]
fn test_framebuffer_object_from_ext_extensions() {
	const EXT: [&str; 5] = [
		"GL_EXT_framebuffer_object",
		"GL_EXT_framebuffer_blit",
		"GL_EXT_framebuffer_multisample",
		"GL_EXT_packed_depth_stencil",
		"GL_EXT_texture_array",
	];

	let others = Gl30Features::REQUIREMENTS
		.iter()
		.copied()
		.filter(|requirement| *requirement != ArbFramebufferObject::REQUIREMENT)
		.collect::<Vec<_>>();

	let mut source = MockSource::new(2, 1);
	source.satisfy_all(&others).advertise(&EXT[..4]);
	let gl = load(&mut source);

	assert_eq!(gl.availability(ArbFramebufferObject::NAME), Some(Availability::Unavailable));
	assert!(gl.gl30().is_none());
	assert!(gl.gl21().is_some());

	let mut source = MockSource::new(2, 1);
	source.satisfy_all(&others).advertise(&EXT);
	let gl = load(&mut source);

	assert_eq!(gl.availability(ArbFramebufferObject::NAME), Some(Availability::Probed));
	assert!(gl.gl30().is_some());
	assert_eq!(gl.effective_version(), ContextVersion::new(3, 0));
}

#[test]
fn test_symbol_probe_overrides_extension_string() {
	let mut source = MockSource::new(3, 3);
	source.satisfy_all(Gl40Features::REQUIREMENTS);
	let gl = load(&mut source);

	assert_eq!(gl.availability(ArbShaderSubroutine::NAME), Some(Availability::Probed));
	assert!(gl.gl40().is_some());

	let mut source = MockSource::new(3, 3);
	source.satisfy_all(Gl40Features::REQUIREMENTS);
	source.withhold(&["glGetSubroutineUniformLocation"]);
	let gl = load(&mut source);

	assert_eq!(gl.availability(ArbShaderSubroutine::NAME), Some(Availability::Unavailable));
	assert!(gl.features().gl40.arb_shader_subroutine.is_none());
	assert!(gl.gl40().is_none());
	assert_eq!(gl.effective_version(), ContextVersion::new(3, 3));

	// same outcome as a driver that never advertised it
	let mut source = MockSource::new(3, 3);
	source.satisfy_all(
		&Gl40Features::REQUIREMENTS
			.iter()
			.copied()
			.filter(|requirement| *requirement != ArbShaderSubroutine::REQUIREMENT)
			.collect::<Vec<_>>(),
	);
	let gl = load(&mut source);

	assert_eq!(gl.availability(ArbShaderSubroutine::NAME), Some(Availability::Unavailable));
	assert!(gl.gl40().is_none());
}

#[test]
fn test_unavailable_feature_loads_nothing() {
	let mut source = MockSource::new(3, 3);
	let gl = load(&mut source);

	assert!(gl.gl40().is_none());
	assert_eq!(source.lookups_of("glGetSubroutineIndex"), 0);
	assert_eq!(source.lookups_of("glBufferStorage"), 0);
	assert_eq!(source.lookups_of("glDepthBoundsEXT"), 0);
}

#[test]
fn test_gl32_needs_probe_symbol() {
	let mut source = MockSource::new(3, 1);
	source.satisfy_all(Gl32Features::REQUIREMENTS);
	let gl = load(&mut source);

	assert!(gl.gl32().is_some());
	assert_eq!(gl.stats().symbol_probes, 1);

	let mut source = MockSource::new(3, 1);
	source.satisfy_all(Gl32Features::REQUIREMENTS);
	source.withhold(&[GL32_PROBE_SYMBOL]);
	let gl = load(&mut source);

	assert!(gl.features().gl32.complete());
	assert!(gl.gl32().is_none());
	assert!(gl.gl31().is_some());
	assert_monotonic(&gl);
}

#[test]
fn test_gl32_probe_skipped_when_implied() {
	let mut source = MockSource::new(3, 2);
	source.withhold(&[GL32_PROBE_SYMBOL]);
	let gl = load(&mut source);

	assert!(gl.gl32().is_some());
	assert_eq!(gl.stats().symbol_probes, 0);
}

#[test]
fn test_tiers_need_predecessor() {
	let mut source = MockSource::new(4, 1);
	source
		.satisfy_all(Gl43Features::REQUIREMENTS)
		.satisfy_all(Gl44Features::REQUIREMENTS)
		.satisfy_all(Gl45Features::REQUIREMENTS);
	let gl = load(&mut source);

	assert!(gl.features().gl43.complete());
	assert!(gl.features().gl44.complete());
	assert!(gl.features().gl45.complete());
	assert!(gl.features().gl43.khr_debug.is_some());

	assert!(gl.gl41().is_some());
	assert!(gl.gl42().is_none());
	assert!(gl.gl43().is_none());
	assert!(gl.gl44().is_none());
	assert!(gl.gl45().is_none());
	assert_monotonic(&gl);
}

#[test]
fn test_effective_version_from_extensions() {
	let mut source = MockSource::new(3, 3);
	source
		.satisfy_all(Gl40Features::REQUIREMENTS)
		.satisfy_all(Gl41Features::REQUIREMENTS);
	let gl = load(&mut source);

	assert_eq!(gl.version(), ContextVersion::new(3, 3));
	assert_eq!(gl.effective_version(), ContextVersion::new(4, 1));
	assert!(gl.gl41().is_some());
	assert!(gl.gl42().is_none());
	assert_eq!(gl.availability(ArbViewportArray::NAME), Some(Availability::Probed));
}

#[test]
fn test_null_source() {
	let mut source = MockSource::null(3, 3);
	let gl = load(&mut source);

	assert!(gl.extensions().is_empty());
	assert_monotonic(&gl);
	assert_eq!(gl.effective_version(), ContextVersion::new(3, 3));
	assert!(gl.gl40().is_none());
	assert!(gl.gl11().functions().glClear.is_none());

	let probed = gl.report().iter().filter(|status| status.availability != Availability::Implied);
	assert!(probed.clone().count() > 0);
	assert!(probed.map(|status| status.availability).all(|x| x == Availability::Unavailable));
}

#[test]
fn test_legacy_context() {
	let mut source = MockSource::new(2, 1);
	source.advertise(&["GL_EXT_texture_filter_anisotropic", "GL_ARB_sync"]);
	let gl = load(&mut source);

	assert_eq!(gl.extensions().len(), 2);
	assert_eq!(gl.effective_version(), ContextVersion::new(2, 1));
	assert!(gl.common().ext_texture_filter_anisotropic.is_some());
	assert!(gl.features().gl32.arb_sync.is_some());
	assert!(gl.gl30().is_none());
}

#[test]
fn test_verify_entry_points() {
	let first = KhrDebugFunctions::SLOTS[0].names().collect::<Vec<_>>();

	let mut source = MockSource::new(4, 2);
	source.advertise(&[KhrDebug::NAME, ArbArraysOfArrays::NAME]);
	source.withhold(&first);
	let gl = load(&mut source);

	assert_eq!(gl.availability(KhrDebug::NAME), Some(Availability::Probed));

	let mut source = MockSource::new(4, 2);
	source.advertise(&[KhrDebug::NAME, ArbArraysOfArrays::NAME]);
	source.withhold(&first);
	let config = LoaderConfig { probe_policy: ProbePolicy::VerifyEntryPoints };
	let gl = unsafe { Gl::load_with_config(&mut source, config) };

	assert_eq!(gl.availability(KhrDebug::NAME), Some(Availability::Unavailable));
	assert_eq!(gl.availability(ArbArraysOfArrays::NAME), Some(Availability::Probed));
	assert!(gl.features().gl43.khr_debug.is_none());
}

#[test]
fn test_contexts_are_independent() {
	let mut source = MockSource::new(3, 3);
	source.advertise(&[ArbBindlessTexture::NAME]);
	let bindless = load(&mut source);

	let mut source = MockSource::new(3, 3);
	let plain = load(&mut source);

	assert!(bindless.common().arb_bindless_texture.is_some());
	assert!(plain.common().arb_bindless_texture.is_none());
	assert_eq!(bindless.stats().tables_loaded, plain.stats().tables_loaded + 1);
}
