// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use gl::types::*;

use super::Gl32;
use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct ArbBlendFuncExtendedFunctions {
	pub glBindFragDataLocationIndexed:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLuint, *const GLchar)>,
	pub glGetFragDataIndex: Option<unsafe extern "system" fn(GLuint, *const GLchar) -> GLint>,
}

#[derive(Default, SymbolTable)]
pub struct ArbSamplerObjectsFunctions {
	pub glGenSamplers: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	pub glDeleteSamplers: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	pub glIsSampler: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	pub glBindSampler: Option<unsafe extern "system" fn(GLuint, GLuint)>,
	pub glSamplerParameteri: Option<unsafe extern "system" fn(GLuint, GLenum, GLint)>,
	pub glSamplerParameteriv: Option<unsafe extern "system" fn(GLuint, GLenum, *const GLint)>,
	pub glSamplerParameterf: Option<unsafe extern "system" fn(GLuint, GLenum, GLfloat)>,
	pub glSamplerParameterfv: Option<unsafe extern "system" fn(GLuint, GLenum, *const GLfloat)>,
	pub glSamplerParameterIiv: Option<unsafe extern "system" fn(GLuint, GLenum, *const GLint)>,
	pub glSamplerParameterIuiv: Option<unsafe extern "system" fn(GLuint, GLenum, *const GLuint)>,
	pub glGetSamplerParameteriv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint)>,
	pub glGetSamplerParameterfv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLfloat)>,
	pub glGetSamplerParameterIiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint)>,
	pub glGetSamplerParameterIuiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLuint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTimerQueryFunctions {
	pub glQueryCounter: Option<unsafe extern "system" fn(GLuint, GLenum)>,
	#[alias("glGetQueryObjecti64vEXT")]
	pub glGetQueryObjecti64v: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint64)>,
	#[alias("glGetQueryObjectui64vEXT")]
	pub glGetQueryObjectui64v: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLuint64)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbInstancedArraysFunctions {
	#[alias("glVertexAttribDivisorARB")]
	pub glVertexAttribDivisor: Option<unsafe extern "system" fn(GLuint, GLuint)>,
}

extensions! {
	ArbShaderBitEncoding = "GL_ARB_shader_bit_encoding";
	ArbBlendFuncExtended(ArbBlendFuncExtendedFunctions) = "GL_ARB_blend_func_extended";
	ArbExplicitAttribLocation = "GL_ARB_explicit_attrib_location";
	ArbOcclusionQuery2 = "GL_ARB_occlusion_query2";
	ArbSamplerObjects(ArbSamplerObjectsFunctions) = "GL_ARB_sampler_objects";
	ArbTextureRgb10A2ui = "GL_ARB_texture_rgb10_a2ui";
	ArbTextureSwizzle = "GL_ARB_texture_swizzle";
	ArbTimerQuery(ArbTimerQueryFunctions) = "GL_ARB_timer_query";
	ArbInstancedArrays(ArbInstancedArraysFunctions) = "GL_ARB_instanced_arrays";
	ArbVertexType2_10_10_10Rev = "GL_ARB_vertex_type_2_10_10_10_rev";
}

tier! {
	Gl33(Gl32) {
		arb_shader_bit_encoding: ArbShaderBitEncoding,
		arb_blend_func_extended: ArbBlendFuncExtended,
		arb_explicit_attrib_location: ArbExplicitAttribLocation,
		arb_occlusion_query2: ArbOcclusionQuery2,
		arb_sampler_objects: ArbSamplerObjects,
		arb_texture_rgb10_a2ui: ArbTextureRgb10A2ui,
		arb_texture_swizzle: ArbTextureSwizzle,
		arb_timer_query: ArbTimerQuery,
		arb_instanced_arrays: ArbInstancedArrays,
		arb_vertex_type_2_10_10_10_rev: ArbVertexType2_10_10_10Rev,
	}
}
