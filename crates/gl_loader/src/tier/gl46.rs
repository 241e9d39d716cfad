// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl45;
use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct ArbGlSpirvFunctions {
	#[alias("glSpecializeShaderARB")]
	pub glSpecializeShader: Option<
		unsafe extern "system" fn(GLuint, *const GLchar, GLuint, *const GLuint, *const GLuint),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbIndirectParametersFunctions {
	#[alias("glMultiDrawArraysIndirectCountARB")]
	pub glMultiDrawArraysIndirectCount:
		Option<unsafe extern "system" fn(GLenum, *const c_void, GLintptr, GLsizei, GLsizei)>,
	#[alias("glMultiDrawElementsIndirectCountARB")]
	pub glMultiDrawElementsIndirectCount: Option<
		unsafe extern "system" fn(GLenum, GLenum, *const c_void, GLintptr, GLsizei, GLsizei),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbPolygonOffsetClampFunctions {
	#[alias("glPolygonOffsetClampEXT")]
	pub glPolygonOffsetClamp: Option<unsafe extern "system" fn(GLfloat, GLfloat, GLfloat)>,
}

extensions! {
	ArbGlSpirv(ArbGlSpirvFunctions) = "GL_ARB_gl_spirv";
	ArbSpirvExtensions = "GL_ARB_spirv_extensions";
	ArbShaderDrawParameters = "GL_ARB_shader_draw_parameters";
	ArbIndirectParameters(ArbIndirectParametersFunctions) = "GL_ARB_indirect_parameters";
	ArbPipelineStatisticsQuery = "GL_ARB_pipeline_statistics_query";
	ArbTransformFeedbackOverflowQuery = "GL_ARB_transform_feedback_overflow_query";
	ArbTextureFilterAnisotropic = "GL_ARB_texture_filter_anisotropic";
	ArbPolygonOffsetClamp(ArbPolygonOffsetClampFunctions) = "GL_ARB_polygon_offset_clamp";
	KhrNoError = "GL_KHR_no_error";
	ArbShaderAtomicCounterOps = "GL_ARB_shader_atomic_counter_ops";
	ArbShaderGroupVote = "GL_ARB_shader_group_vote";
}

tier! {
	Gl46(Gl45) {
		arb_gl_spirv: ArbGlSpirv,
		arb_spirv_extensions: ArbSpirvExtensions,
		arb_shader_draw_parameters: ArbShaderDrawParameters,
		arb_indirect_parameters: ArbIndirectParameters,
		arb_pipeline_statistics_query: ArbPipelineStatisticsQuery,
		arb_transform_feedback_overflow_query: ArbTransformFeedbackOverflowQuery,
		arb_texture_filter_anisotropic: ArbTextureFilterAnisotropic,
		arb_polygon_offset_clamp: ArbPolygonOffsetClamp,
		khr_no_error: KhrNoError,
		arb_shader_atomic_counter_ops: ArbShaderAtomicCounterOps,
		arb_shader_group_vote: ArbShaderGroupVote,
	}
}
