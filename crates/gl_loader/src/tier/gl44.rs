// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl43;
use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct ArbBufferStorageFunctions {
	#[alias("glBufferStorageEXT")]
	pub glBufferStorage:
		Option<unsafe extern "system" fn(GLenum, GLsizeiptr, *const c_void, GLbitfield)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbClearTextureFunctions {
	#[alias("glClearTexImageEXT")]
	pub glClearTexImage: Option<unsafe extern "system" fn(GLuint, GLint, GLenum, GLenum, *const c_void)>,
	#[alias("glClearTexSubImageEXT")]
	pub glClearTexSubImage: Option<
		unsafe extern "system" fn(
			GLuint,
			GLint,
			GLint,
			GLint,
			GLint,
			GLsizei,
			GLsizei,
			GLsizei,
			GLenum,
			GLenum,
			*const c_void,
		),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbMultiBindFunctions {
	pub glBindBuffersBase: Option<unsafe extern "system" fn(GLenum, GLuint, GLsizei, *const GLuint)>,
	pub glBindBuffersRange: Option<
		unsafe extern "system" fn(
			GLenum,
			GLuint,
			GLsizei,
			*const GLuint,
			*const GLintptr,
			*const GLsizeiptr,
		),
	>,
	pub glBindTextures: Option<unsafe extern "system" fn(GLuint, GLsizei, *const GLuint)>,
	pub glBindSamplers: Option<unsafe extern "system" fn(GLuint, GLsizei, *const GLuint)>,
	pub glBindImageTextures: Option<unsafe extern "system" fn(GLuint, GLsizei, *const GLuint)>,
	pub glBindVertexBuffers: Option<
		unsafe extern "system" fn(GLuint, GLsizei, *const GLuint, *const GLintptr, *const GLsizei),
	>,
}

extensions! {
	ArbBufferStorage(ArbBufferStorageFunctions) = "GL_ARB_buffer_storage";
	ArbClearTexture(ArbClearTextureFunctions) = "GL_ARB_clear_texture";
	ArbEnhancedLayouts = "GL_ARB_enhanced_layouts";
	ArbMultiBind(ArbMultiBindFunctions) = "GL_ARB_multi_bind";
	ArbQueryBufferObject = "GL_ARB_query_buffer_object";
	ArbTextureMirrorClampToEdge = "GL_ARB_texture_mirror_clamp_to_edge";
	ArbTextureStencil8 = "GL_ARB_texture_stencil8";
	ArbVertexType10f11f11fRev = "GL_ARB_vertex_type_10f_11f_11f_rev";
}

impl ArbBufferStorage {
	/// Allocate immutable storage for the buffer bound to `target`.
	///
	/// # SAFETY
	/// * must be called from GL thread
	/// * `data` must be null or point to at least `size` readable bytes
	pub unsafe fn buffer_storage(
		&self,
		target: GLenum,
		size: GLsizeiptr,
		data: *const c_void,
		flags: GLbitfield,
	) {
		call!(self.functions, glBufferStorage(target, size, data, flags))
	}
}

tier! {
	Gl44(Gl43) {
		arb_buffer_storage: ArbBufferStorage,
		arb_clear_texture: ArbClearTexture,
		arb_enhanced_layouts: ArbEnhancedLayouts,
		arb_multi_bind: ArbMultiBind,
		arb_query_buffer_object: ArbQueryBufferObject,
		arb_texture_mirror_clamp_to_edge: ArbTextureMirrorClampToEdge,
		arb_texture_stencil8: ArbTextureStencil8,
		arb_vertex_type_10f_11f_11f_rev: ArbVertexType10f11f11fRev,
	}
}
