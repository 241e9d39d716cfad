// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl30;
use crate::{
	feature::Requirement::{self, AnyOf},
	loader::SymbolTable,
};

#[derive(Default, SymbolTable)]
pub struct ArbDrawInstancedFunctions {
	#[alias("glDrawArraysInstancedARB", "glDrawArraysInstancedEXT")]
	pub glDrawArraysInstanced: Option<unsafe extern "system" fn(GLenum, GLint, GLsizei, GLsizei)>,
	#[alias("glDrawElementsInstancedARB", "glDrawElementsInstancedEXT")]
	pub glDrawElementsInstanced:
		Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, *const c_void, GLsizei)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbCopyBufferFunctions {
	#[alias("glCopyBufferSubDataARB", "glCopyBufferSubDataEXT")]
	pub glCopyBufferSubData:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLintptr, GLintptr, GLsizeiptr)>,
}

#[derive(Default, SymbolTable)]
pub struct NvPrimitiveRestartFunctions {
	#[alias("glPrimitiveRestartIndexNV")]
	pub glPrimitiveRestartIndex: Option<unsafe extern "system" fn(GLuint)>,
	pub glPrimitiveRestartNV: Option<unsafe extern "system" fn()>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTextureBufferObjectFunctions {
	#[alias("glTexBufferARB", "glTexBufferEXT")]
	pub glTexBuffer: Option<unsafe extern "system" fn(GLenum, GLenum, GLuint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbUniformBufferObjectFunctions {
	#[alias("glGetUniformIndicesARB")]
	pub glGetUniformIndices:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *const *const GLchar, *mut GLuint)>,
	#[alias("glGetActiveUniformsivARB")]
	pub glGetActiveUniformsiv:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *const GLuint, GLenum, *mut GLint)>,
	#[alias("glGetActiveUniformNameARB")]
	pub glGetActiveUniformName:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	#[alias("glGetUniformBlockIndexARB")]
	pub glGetUniformBlockIndex: Option<unsafe extern "system" fn(GLuint, *const GLchar) -> GLuint>,
	#[alias("glGetActiveUniformBlockivARB")]
	pub glGetActiveUniformBlockiv:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLenum, *mut GLint)>,
	#[alias("glGetActiveUniformBlockNameARB")]
	pub glGetActiveUniformBlockName:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	#[alias("glBindBufferRangeARB")]
	pub glBindBufferRange:
		Option<unsafe extern "system" fn(GLenum, GLuint, GLuint, GLintptr, GLsizeiptr)>,
	#[alias("glBindBufferBaseARB")]
	pub glBindBufferBase: Option<unsafe extern "system" fn(GLenum, GLuint, GLuint)>,
	#[alias("glGetIntegeri_vARB")]
	pub glGetIntegeri_v: Option<unsafe extern "system" fn(GLenum, GLuint, *mut GLint)>,
	#[alias("glUniformBlockBindingARB")]
	pub glUniformBlockBinding: Option<unsafe extern "system" fn(GLuint, GLuint, GLuint)>,
}

extensions! {
	ArbDrawInstanced(ArbDrawInstancedFunctions) = "GL_ARB_draw_instanced";
	/// The ARB and EXT variants define the same entry point.
	ArbCopyBuffer(ArbCopyBufferFunctions) = "GL_ARB_copy_buffer"
		where AnyOf(&[
			Requirement::Extension("GL_ARB_copy_buffer"),
			Requirement::Extension("GL_EXT_copy_buffer"),
		]);
	NvPrimitiveRestart(NvPrimitiveRestartFunctions) = "GL_NV_primitive_restart";
	ArbTextureBufferObject(ArbTextureBufferObjectFunctions) = "GL_ARB_texture_buffer_object";
	ArbTextureRectangle = "GL_ARB_texture_rectangle";
	ArbUniformBufferObject(ArbUniformBufferObjectFunctions) = "GL_ARB_uniform_buffer_object";
}

tier! {
	Gl31(Gl30) {
		arb_draw_instanced: ArbDrawInstanced,
		arb_copy_buffer: ArbCopyBuffer,
		nv_primitive_restart: NvPrimitiveRestart,
		arb_texture_buffer_object: ArbTextureBufferObject,
		arb_texture_rectangle: ArbTextureRectangle,
		arb_uniform_buffer_object: ArbUniformBufferObject,
	}
}
