// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl40;
use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct ArbEs2CompatibilityFunctions {
	pub glReleaseShaderCompiler: Option<unsafe extern "system" fn()>,
	pub glShaderBinary:
		Option<unsafe extern "system" fn(GLsizei, *const GLuint, GLenum, *const c_void, GLsizei)>,
	pub glGetShaderPrecisionFormat:
		Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLint, *mut GLint)>,
	#[alias("glDepthRangefOES")]
	pub glDepthRangef: Option<unsafe extern "system" fn(GLfloat, GLfloat)>,
	#[alias("glClearDepthfOES")]
	pub glClearDepthf: Option<unsafe extern "system" fn(GLfloat)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbGetProgramBinaryFunctions {
	#[alias("glGetProgramBinaryOES")]
	pub glGetProgramBinary:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *mut GLsizei, *mut GLenum, *mut c_void)>,
	#[alias("glProgramBinaryOES")]
	pub glProgramBinary: Option<unsafe extern "system" fn(GLuint, GLenum, *const c_void, GLsizei)>,
	#[alias("glProgramParameteriARB", "glProgramParameteriEXT")]
	pub glProgramParameteri: Option<unsafe extern "system" fn(GLuint, GLenum, GLint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbSeparateShaderObjectsFunctions {
	#[alias("glUseProgramStagesEXT")]
	pub glUseProgramStages: Option<unsafe extern "system" fn(GLuint, GLbitfield, GLuint)>,
	#[alias("glActiveShaderProgramEXT")]
	pub glActiveShaderProgram: Option<unsafe extern "system" fn(GLuint, GLuint)>,
	#[alias("glCreateShaderProgramvEXT")]
	pub glCreateShaderProgramv:
		Option<unsafe extern "system" fn(GLenum, GLsizei, *const *const GLchar) -> GLuint>,
	#[alias("glBindProgramPipelineEXT")]
	pub glBindProgramPipeline: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glDeleteProgramPipelinesEXT")]
	pub glDeleteProgramPipelines: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	#[alias("glGenProgramPipelinesEXT")]
	pub glGenProgramPipelines: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	#[alias("glIsProgramPipelineEXT")]
	pub glIsProgramPipeline: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	#[alias("glGetProgramPipelineivEXT")]
	pub glGetProgramPipelineiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint)>,
	#[alias("glProgramUniform1iEXT")]
	pub glProgramUniform1i: Option<unsafe extern "system" fn(GLuint, GLint, GLint)>,
	#[alias("glProgramUniform1fEXT")]
	pub glProgramUniform1f: Option<unsafe extern "system" fn(GLuint, GLint, GLfloat)>,
	#[alias("glProgramUniform4fvEXT")]
	pub glProgramUniform4fv: Option<unsafe extern "system" fn(GLuint, GLint, GLsizei, *const GLfloat)>,
	#[alias("glProgramUniformMatrix4fvEXT")]
	pub glProgramUniformMatrix4fv:
		Option<unsafe extern "system" fn(GLuint, GLint, GLsizei, GLboolean, *const GLfloat)>,
	#[alias("glValidateProgramPipelineEXT")]
	pub glValidateProgramPipeline: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glGetProgramPipelineInfoLogEXT")]
	pub glGetProgramPipelineInfoLog:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbVertexAttrib64BitFunctions {
	#[alias("glVertexAttribL1dEXT")]
	pub glVertexAttribL1d: Option<unsafe extern "system" fn(GLuint, GLdouble)>,
	#[alias("glVertexAttribL4dvEXT")]
	pub glVertexAttribL4dv: Option<unsafe extern "system" fn(GLuint, *const GLdouble)>,
	#[alias("glVertexAttribLPointerEXT")]
	pub glVertexAttribLPointer:
		Option<unsafe extern "system" fn(GLuint, GLint, GLenum, GLsizei, *const c_void)>,
	#[alias("glGetVertexAttribLdvEXT")]
	pub glGetVertexAttribLdv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLdouble)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbViewportArrayFunctions {
	#[alias("glViewportArrayvNV")]
	pub glViewportArrayv: Option<unsafe extern "system" fn(GLuint, GLsizei, *const GLfloat)>,
	#[alias("glViewportIndexedfNV")]
	pub glViewportIndexedf: Option<unsafe extern "system" fn(GLuint, GLfloat, GLfloat, GLfloat, GLfloat)>,
	#[alias("glViewportIndexedfvNV")]
	pub glViewportIndexedfv: Option<unsafe extern "system" fn(GLuint, *const GLfloat)>,
	#[alias("glScissorArrayvNV")]
	pub glScissorArrayv: Option<unsafe extern "system" fn(GLuint, GLsizei, *const GLint)>,
	#[alias("glScissorIndexedNV")]
	pub glScissorIndexed: Option<unsafe extern "system" fn(GLuint, GLint, GLint, GLsizei, GLsizei)>,
	#[alias("glScissorIndexedvNV")]
	pub glScissorIndexedv: Option<unsafe extern "system" fn(GLuint, *const GLint)>,
	pub glDepthRangeArrayv: Option<unsafe extern "system" fn(GLuint, GLsizei, *const GLdouble)>,
	pub glDepthRangeIndexed: Option<unsafe extern "system" fn(GLuint, GLdouble, GLdouble)>,
	#[alias("glGetFloati_vNV")]
	pub glGetFloati_v: Option<unsafe extern "system" fn(GLenum, GLuint, *mut GLfloat)>,
	pub glGetDoublei_v: Option<unsafe extern "system" fn(GLenum, GLuint, *mut GLdouble)>,
}

extensions! {
	ArbEs2Compatibility(ArbEs2CompatibilityFunctions) = "GL_ARB_ES2_compatibility";
	ArbGetProgramBinary(ArbGetProgramBinaryFunctions) = "GL_ARB_get_program_binary";
	ArbSeparateShaderObjects(ArbSeparateShaderObjectsFunctions) = "GL_ARB_separate_shader_objects";
	ArbShaderPrecision = "GL_ARB_shader_precision";
	ArbVertexAttrib64Bit(ArbVertexAttrib64BitFunctions) = "GL_ARB_vertex_attrib_64bit";
	ArbViewportArray(ArbViewportArrayFunctions) = "GL_ARB_viewport_array";
}

tier! {
	Gl41(Gl40) {
		arb_es2_compatibility: ArbEs2Compatibility,
		arb_get_program_binary: ArbGetProgramBinary,
		arb_separate_shader_objects: ArbSeparateShaderObjects,
		arb_shader_precision: ArbShaderPrecision,
		arb_vertex_attrib_64bit: ArbVertexAttrib64Bit,
		arb_viewport_array: ArbViewportArray,
	}
}
