// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl33;
use crate::{
	feature::Requirement::{self, AllOf},
	loader::SymbolTable,
};

#[derive(Default, SymbolTable)]
pub struct ArbDrawBuffersBlendFunctions {
	#[alias("glBlendEquationiARB", "glBlendEquationIndexedAMD")]
	pub glBlendEquationi: Option<unsafe extern "system" fn(GLuint, GLenum)>,
	#[alias("glBlendEquationSeparateiARB", "glBlendEquationSeparateIndexedAMD")]
	pub glBlendEquationSeparatei: Option<unsafe extern "system" fn(GLuint, GLenum, GLenum)>,
	#[alias("glBlendFunciARB", "glBlendFuncIndexedAMD")]
	pub glBlendFunci: Option<unsafe extern "system" fn(GLuint, GLenum, GLenum)>,
	#[alias("glBlendFuncSeparateiARB", "glBlendFuncSeparateIndexedAMD")]
	pub glBlendFuncSeparatei: Option<unsafe extern "system" fn(GLuint, GLenum, GLenum, GLenum, GLenum)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbDrawIndirectFunctions {
	pub glDrawArraysIndirect: Option<unsafe extern "system" fn(GLenum, *const c_void)>,
	pub glDrawElementsIndirect: Option<unsafe extern "system" fn(GLenum, GLenum, *const c_void)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbSampleShadingFunctions {
	#[alias("glMinSampleShadingARB")]
	pub glMinSampleShading: Option<unsafe extern "system" fn(GLfloat)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbShaderSubroutineFunctions {
	pub glGetSubroutineUniformLocation:
		Option<unsafe extern "system" fn(GLuint, GLenum, *const GLchar) -> GLint>,
	pub glGetSubroutineIndex: Option<unsafe extern "system" fn(GLuint, GLenum, *const GLchar) -> GLuint>,
	pub glGetActiveSubroutineUniformiv:
		Option<unsafe extern "system" fn(GLuint, GLenum, GLuint, GLenum, *mut GLint)>,
	pub glGetActiveSubroutineUniformName:
		Option<unsafe extern "system" fn(GLuint, GLenum, GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	pub glGetActiveSubroutineName:
		Option<unsafe extern "system" fn(GLuint, GLenum, GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	pub glUniformSubroutinesuiv: Option<unsafe extern "system" fn(GLenum, GLsizei, *const GLuint)>,
	pub glGetUniformSubroutineuiv: Option<unsafe extern "system" fn(GLenum, GLint, *mut GLuint)>,
	pub glGetProgramStageiv: Option<unsafe extern "system" fn(GLuint, GLenum, GLenum, *mut GLint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTessellationShaderFunctions {
	pub glPatchParameteri: Option<unsafe extern "system" fn(GLenum, GLint)>,
	pub glPatchParameterfv: Option<unsafe extern "system" fn(GLenum, *const GLfloat)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTransformFeedback2Functions {
	#[alias("glBindTransformFeedbackNV")]
	pub glBindTransformFeedback: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	#[alias("glDeleteTransformFeedbacksNV")]
	pub glDeleteTransformFeedbacks: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	#[alias("glGenTransformFeedbacksNV")]
	pub glGenTransformFeedbacks: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	#[alias("glIsTransformFeedbackNV")]
	pub glIsTransformFeedback: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	#[alias("glPauseTransformFeedbackNV")]
	pub glPauseTransformFeedback: Option<unsafe extern "system" fn()>,
	#[alias("glResumeTransformFeedbackNV")]
	pub glResumeTransformFeedback: Option<unsafe extern "system" fn()>,
	#[alias("glDrawTransformFeedbackNV")]
	pub glDrawTransformFeedback: Option<unsafe extern "system" fn(GLenum, GLuint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTransformFeedback3Functions {
	pub glDrawTransformFeedbackStream: Option<unsafe extern "system" fn(GLenum, GLuint, GLuint)>,
	pub glBeginQueryIndexed: Option<unsafe extern "system" fn(GLenum, GLuint, GLuint)>,
	pub glEndQueryIndexed: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	pub glGetQueryIndexediv: Option<unsafe extern "system" fn(GLenum, GLuint, GLenum, *mut GLint)>,
}

extensions! {
	ArbTextureQueryLod = "GL_ARB_texture_query_lod";
	ArbDrawBuffersBlend(ArbDrawBuffersBlendFunctions) = "GL_ARB_draw_buffers_blend";
	ArbDrawIndirect(ArbDrawIndirectFunctions) = "GL_ARB_draw_indirect";
	ArbGpuShader5 = "GL_ARB_gpu_shader5";
	ArbGpuShaderFp64 = "GL_ARB_gpu_shader_fp64";
	ArbSampleShading(ArbSampleShadingFunctions) = "GL_ARB_sample_shading";
	/// Some forward compatible drivers advertise this extension without
	/// exporting any of its entry points.
	ArbShaderSubroutine(ArbShaderSubroutineFunctions) = "GL_ARB_shader_subroutine"
		where AllOf(&[
			Requirement::Extension("GL_ARB_shader_subroutine"),
			Requirement::Symbol("glGetSubroutineUniformLocation"),
		]);
	ArbTessellationShader(ArbTessellationShaderFunctions) = "GL_ARB_tessellation_shader";
	ArbTextureBufferObjectRgb32 = "GL_ARB_texture_buffer_object_rgb32";
	ArbTextureCubeMapArray = "GL_ARB_texture_cube_map_array";
	ArbTextureGather = "GL_ARB_texture_gather";
	ArbTransformFeedback2(ArbTransformFeedback2Functions) = "GL_ARB_transform_feedback2";
	ArbTransformFeedback3(ArbTransformFeedback3Functions) = "GL_ARB_transform_feedback3";
}

tier! {
	Gl40(Gl33) {
		arb_texture_query_lod: ArbTextureQueryLod,
		arb_draw_buffers_blend: ArbDrawBuffersBlend,
		arb_draw_indirect: ArbDrawIndirect,
		arb_gpu_shader5: ArbGpuShader5,
		arb_gpu_shader_fp64: ArbGpuShaderFp64,
		arb_sample_shading: ArbSampleShading,
		arb_shader_subroutine: ArbShaderSubroutine,
		arb_tessellation_shader: ArbTessellationShader,
		arb_texture_buffer_object_rgb32: ArbTextureBufferObjectRgb32,
		arb_texture_cube_map_array: ArbTextureCubeMapArray,
		arb_texture_gather: ArbTextureGather,
		arb_transform_feedback2: ArbTransformFeedback2,
		arb_transform_feedback3: ArbTransformFeedback3,
	}
}
