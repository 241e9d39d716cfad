// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl15;
use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct Gl20Functions {
	#[alias("glAttachObjectARB")]
	pub glAttachShader: Option<unsafe extern "system" fn(GLuint, GLuint)>,
	#[alias("glBindAttribLocationARB")]
	pub glBindAttribLocation: Option<unsafe extern "system" fn(GLuint, GLuint, *const GLchar)>,
	#[alias("glBlendEquationSeparateEXT")]
	pub glBlendEquationSeparate: Option<unsafe extern "system" fn(GLenum, GLenum)>,
	#[alias("glCompileShaderARB")]
	pub glCompileShader: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glCreateProgramObjectARB")]
	pub glCreateProgram: Option<unsafe extern "system" fn() -> GLuint>,
	#[alias("glCreateShaderObjectARB")]
	pub glCreateShader: Option<unsafe extern "system" fn(GLenum) -> GLuint>,
	pub glDeleteProgram: Option<unsafe extern "system" fn(GLuint)>,
	pub glDeleteShader: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glDetachObjectARB")]
	pub glDetachShader: Option<unsafe extern "system" fn(GLuint, GLuint)>,
	#[alias("glDisableVertexAttribArrayARB")]
	pub glDisableVertexAttribArray: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glDrawBuffersARB", "glDrawBuffersATI")]
	pub glDrawBuffers: Option<unsafe extern "system" fn(GLsizei, *const GLenum)>,
	#[alias("glEnableVertexAttribArrayARB")]
	pub glEnableVertexAttribArray: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glGetActiveAttribARB")]
	pub glGetActiveAttrib: Option<
		unsafe extern "system" fn(
			GLuint,
			GLuint,
			GLsizei,
			*mut GLsizei,
			*mut GLint,
			*mut GLenum,
			*mut GLchar,
		),
	>,
	#[alias("glGetActiveUniformARB")]
	pub glGetActiveUniform: Option<
		unsafe extern "system" fn(
			GLuint,
			GLuint,
			GLsizei,
			*mut GLsizei,
			*mut GLint,
			*mut GLenum,
			*mut GLchar,
		),
	>,
	#[alias("glGetAttribLocationARB")]
	pub glGetAttribLocation: Option<unsafe extern "system" fn(GLuint, *const GLchar) -> GLint>,
	pub glGetProgramInfoLog:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	pub glGetProgramiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint)>,
	pub glGetShaderInfoLog:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	#[alias("glGetShaderSourceARB")]
	pub glGetShaderSource:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	pub glGetShaderiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint)>,
	#[alias("glGetUniformLocationARB")]
	pub glGetUniformLocation: Option<unsafe extern "system" fn(GLuint, *const GLchar) -> GLint>,
	#[alias("glGetUniformfvARB")]
	pub glGetUniformfv: Option<unsafe extern "system" fn(GLuint, GLint, *mut GLfloat)>,
	#[alias("glGetUniformivARB")]
	pub glGetUniformiv: Option<unsafe extern "system" fn(GLuint, GLint, *mut GLint)>,
	#[alias("glGetVertexAttribPointervARB")]
	pub glGetVertexAttribPointerv:
		Option<unsafe extern "system" fn(GLuint, GLenum, *mut *mut c_void)>,
	#[alias("glGetVertexAttribivARB")]
	pub glGetVertexAttribiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint)>,
	pub glIsProgram: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	pub glIsShader: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	#[alias("glLinkProgramARB")]
	pub glLinkProgram: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glShaderSourceARB")]
	pub glShaderSource:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *const *const GLchar, *const GLint)>,
	#[alias("glStencilFuncSeparateATI")]
	pub glStencilFuncSeparate: Option<unsafe extern "system" fn(GLenum, GLenum, GLint, GLuint)>,
	pub glStencilMaskSeparate: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	#[alias("glStencilOpSeparateATI")]
	pub glStencilOpSeparate: Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLenum)>,
	#[alias("glUniform1fARB")]
	pub glUniform1f: Option<unsafe extern "system" fn(GLint, GLfloat)>,
	#[alias("glUniform1iARB")]
	pub glUniform1i: Option<unsafe extern "system" fn(GLint, GLint)>,
	#[alias("glUniform2fvARB")]
	pub glUniform2fv: Option<unsafe extern "system" fn(GLint, GLsizei, *const GLfloat)>,
	#[alias("glUniform3fvARB")]
	pub glUniform3fv: Option<unsafe extern "system" fn(GLint, GLsizei, *const GLfloat)>,
	#[alias("glUniform4fvARB")]
	pub glUniform4fv: Option<unsafe extern "system" fn(GLint, GLsizei, *const GLfloat)>,
	#[alias("glUniformMatrix4fvARB")]
	pub glUniformMatrix4fv:
		Option<unsafe extern "system" fn(GLint, GLsizei, GLboolean, *const GLfloat)>,
	#[alias("glUseProgramObjectARB")]
	pub glUseProgram: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glValidateProgramARB")]
	pub glValidateProgram: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glVertexAttribPointerARB")]
	pub glVertexAttribPointer: Option<
		unsafe extern "system" fn(GLuint, GLint, GLenum, GLboolean, GLsizei, *const c_void),
	>,
}

#[derive(Default, SymbolTable)]
pub struct Gl21Functions {
	pub glUniformMatrix2x3fv:
		Option<unsafe extern "system" fn(GLint, GLsizei, GLboolean, *const GLfloat)>,
	pub glUniformMatrix2x4fv:
		Option<unsafe extern "system" fn(GLint, GLsizei, GLboolean, *const GLfloat)>,
	pub glUniformMatrix3x2fv:
		Option<unsafe extern "system" fn(GLint, GLsizei, GLboolean, *const GLfloat)>,
	pub glUniformMatrix3x4fv:
		Option<unsafe extern "system" fn(GLint, GLsizei, GLboolean, *const GLfloat)>,
	pub glUniformMatrix4x2fv:
		Option<unsafe extern "system" fn(GLint, GLsizei, GLboolean, *const GLfloat)>,
	pub glUniformMatrix4x3fv:
		Option<unsafe extern "system" fn(GLint, GLsizei, GLboolean, *const GLfloat)>,
}

tier! {
	Gl20(Gl15) + Gl20Functions;
}

tier! {
	Gl21(Gl20) + Gl21Functions;
}
