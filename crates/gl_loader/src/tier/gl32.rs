// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl31;
use crate::loader::SymbolTable;

/// Entry point that must resolve for 3.2 to be assembled from extensions.
pub const GL32_PROBE_SYMBOL: &str = "glGetBufferParameteri64v";

#[derive(Default, SymbolTable)]
pub struct Gl32Functions {
	#[alias("glFramebufferTextureARB", "glFramebufferTextureEXT")]
	pub glFramebufferTexture: Option<unsafe extern "system" fn(GLenum, GLenum, GLuint, GLint)>,
	pub glGetBufferParameteri64v: Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLint64)>,
	pub glGetInteger64i_v: Option<unsafe extern "system" fn(GLenum, GLuint, *mut GLint64)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbDrawElementsBaseVertexFunctions {
	pub glDrawElementsBaseVertex:
		Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, *const c_void, GLint)>,
	pub glDrawRangeElementsBaseVertex: Option<
		unsafe extern "system" fn(GLenum, GLuint, GLuint, GLsizei, GLenum, *const c_void, GLint),
	>,
	pub glDrawElementsInstancedBaseVertex:
		Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, *const c_void, GLsizei, GLint)>,
	#[alias("glMultiDrawElementsBaseVertexEXT")]
	pub glMultiDrawElementsBaseVertex: Option<
		unsafe extern "system" fn(
			GLenum,
			*const GLsizei,
			GLenum,
			*const *const c_void,
			GLsizei,
			*const GLint,
		),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbProvokingVertexFunctions {
	#[alias("glProvokingVertexEXT")]
	pub glProvokingVertex: Option<unsafe extern "system" fn(GLenum)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTextureMultisampleFunctions {
	pub glTexImage2DMultisample:
		Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei, GLsizei, GLboolean)>,
	pub glTexImage3DMultisample: Option<
		unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei, GLsizei, GLsizei, GLboolean),
	>,
	pub glGetMultisamplefv: Option<unsafe extern "system" fn(GLenum, GLuint, *mut GLfloat)>,
	pub glSampleMaski: Option<unsafe extern "system" fn(GLuint, GLbitfield)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbSyncFunctions {
	#[alias("glFenceSyncAPPLE")]
	pub glFenceSync: Option<unsafe extern "system" fn(GLenum, GLbitfield) -> GLsync>,
	#[alias("glIsSyncAPPLE")]
	pub glIsSync: Option<unsafe extern "system" fn(GLsync) -> GLboolean>,
	#[alias("glDeleteSyncAPPLE")]
	pub glDeleteSync: Option<unsafe extern "system" fn(GLsync)>,
	#[alias("glClientWaitSyncAPPLE")]
	pub glClientWaitSync: Option<unsafe extern "system" fn(GLsync, GLbitfield, GLuint64) -> GLenum>,
	#[alias("glWaitSyncAPPLE")]
	pub glWaitSync: Option<unsafe extern "system" fn(GLsync, GLbitfield, GLuint64)>,
	#[alias("glGetInteger64vAPPLE")]
	pub glGetInteger64v: Option<unsafe extern "system" fn(GLenum, *mut GLint64)>,
	#[alias("glGetSyncivAPPLE")]
	pub glGetSynciv:
		Option<unsafe extern "system" fn(GLsync, GLenum, GLsizei, *mut GLsizei, *mut GLint)>,
}

extensions! {
	ArbCompatibility = "GL_ARB_compatibility";
	ArbVertexArrayBgra = "GL_ARB_vertex_array_bgra";
	ArbDrawElementsBaseVertex(ArbDrawElementsBaseVertexFunctions) = "GL_ARB_draw_elements_base_vertex";
	ArbFragmentCoordConventions = "GL_ARB_fragment_coord_conventions";
	ArbProvokingVertex(ArbProvokingVertexFunctions) = "GL_ARB_provoking_vertex";
	ArbSeamlessCubeMap = "GL_ARB_seamless_cube_map";
	ArbTextureMultisample(ArbTextureMultisampleFunctions) = "GL_ARB_texture_multisample";
	ArbDepthClamp = "GL_ARB_depth_clamp";
	ArbSync(ArbSyncFunctions) = "GL_ARB_sync";
}

tier! {
	/// Assembled from extensions only if [`GL32_PROBE_SYMBOL`] resolves as well.
	Gl32(Gl31) + Gl32Functions {
		arb_compatibility: ArbCompatibility,
		arb_vertex_array_bgra: ArbVertexArrayBgra,
		arb_draw_elements_base_vertex: ArbDrawElementsBaseVertex,
		arb_fragment_coord_conventions: ArbFragmentCoordConventions,
		arb_provoking_vertex: ArbProvokingVertex,
		arb_seamless_cube_map: ArbSeamlessCubeMap,
		arb_texture_multisample: ArbTextureMultisample,
		arb_depth_clamp: ArbDepthClamp,
		arb_sync: ArbSync,
	}
}
