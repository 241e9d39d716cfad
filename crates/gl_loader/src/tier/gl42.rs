// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl41;
use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct ArbShaderAtomicCountersFunctions {
	pub glGetActiveAtomicCounterBufferiv:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLenum, *mut GLint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTextureStorageFunctions {
	#[alias("glTexStorage1DEXT")]
	pub glTexStorage1D: Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei)>,
	#[alias("glTexStorage2DEXT")]
	pub glTexStorage2D: Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei, GLsizei)>,
	#[alias("glTexStorage3DEXT")]
	pub glTexStorage3D:
		Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei, GLsizei, GLsizei)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTransformFeedbackInstancedFunctions {
	pub glDrawTransformFeedbackInstanced: Option<unsafe extern "system" fn(GLenum, GLuint, GLsizei)>,
	pub glDrawTransformFeedbackStreamInstanced:
		Option<unsafe extern "system" fn(GLenum, GLuint, GLuint, GLsizei)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbBaseInstanceFunctions {
	#[alias("glDrawArraysInstancedBaseInstanceEXT")]
	pub glDrawArraysInstancedBaseInstance:
		Option<unsafe extern "system" fn(GLenum, GLint, GLsizei, GLsizei, GLuint)>,
	#[alias("glDrawElementsInstancedBaseInstanceEXT")]
	pub glDrawElementsInstancedBaseInstance:
		Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, *const c_void, GLsizei, GLuint)>,
	#[alias("glDrawElementsInstancedBaseVertexBaseInstanceEXT")]
	pub glDrawElementsInstancedBaseVertexBaseInstance: Option<
		unsafe extern "system" fn(GLenum, GLsizei, GLenum, *const c_void, GLsizei, GLint, GLuint),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbShaderImageLoadStoreFunctions {
	#[alias("glBindImageTextureEXT")]
	pub glBindImageTexture:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLint, GLboolean, GLint, GLenum, GLenum)>,
	#[alias("glMemoryBarrierEXT")]
	pub glMemoryBarrier: Option<unsafe extern "system" fn(GLbitfield)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbInternalformatQueryFunctions {
	pub glGetInternalformativ:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLsizei, *mut GLint)>,
}

extensions! {
	ArbTextureCompressionBptc = "GL_ARB_texture_compression_bptc";
	ArbCompressedTexturePixelStorage = "GL_ARB_compressed_texture_pixel_storage";
	ArbShaderAtomicCounters(ArbShaderAtomicCountersFunctions) = "GL_ARB_shader_atomic_counters";
	ArbTextureStorage(ArbTextureStorageFunctions) = "GL_ARB_texture_storage";
	ArbTransformFeedbackInstanced(ArbTransformFeedbackInstancedFunctions) =
		"GL_ARB_transform_feedback_instanced";
	ArbBaseInstance(ArbBaseInstanceFunctions) = "GL_ARB_base_instance";
	ArbShaderImageLoadStore(ArbShaderImageLoadStoreFunctions) = "GL_ARB_shader_image_load_store";
	ArbConservativeDepth = "GL_ARB_conservative_depth";
	ArbShadingLanguage420Pack = "GL_ARB_shading_language_420pack";
	ArbInternalformatQuery(ArbInternalformatQueryFunctions) = "GL_ARB_internalformat_query";
	ArbMapBufferAlignment = "GL_ARB_map_buffer_alignment";
	ArbShadingLanguagePacking = "GL_ARB_shading_language_packing";
}

tier! {
	Gl42(Gl41) {
		arb_texture_compression_bptc: ArbTextureCompressionBptc,
		arb_compressed_texture_pixel_storage: ArbCompressedTexturePixelStorage,
		arb_shader_atomic_counters: ArbShaderAtomicCounters,
		arb_texture_storage: ArbTextureStorage,
		arb_transform_feedback_instanced: ArbTransformFeedbackInstanced,
		arb_base_instance: ArbBaseInstance,
		arb_shader_image_load_store: ArbShaderImageLoadStore,
		arb_conservative_depth: ArbConservativeDepth,
		arb_shading_language_420pack: ArbShadingLanguage420Pack,
		arb_internalformat_query: ArbInternalformatQuery,
		arb_map_buffer_alignment: ArbMapBufferAlignment,
		arb_shading_language_packing: ArbShadingLanguagePacking,
	}
}
