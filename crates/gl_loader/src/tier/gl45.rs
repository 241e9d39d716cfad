// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::c_void;

use gl::types::*;

use super::Gl44;
use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct ArbClipControlFunctions {
	#[alias("glClipControlEXT")]
	pub glClipControl: Option<unsafe extern "system" fn(GLenum, GLenum)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbEs31CompatibilityFunctions {
	pub glMemoryBarrierByRegion: Option<unsafe extern "system" fn(GLbitfield)>,
}

/// Object creation and the buffer, texture, framebuffer and vertex array
/// entry points of direct state access.
#[derive(Default, SymbolTable)]
pub struct ArbDirectStateAccessFunctions {
	pub glCreateBuffers: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	#[alias("glNamedBufferStorageEXT")]
	pub glNamedBufferStorage:
		Option<unsafe extern "system" fn(GLuint, GLsizeiptr, *const c_void, GLbitfield)>,
	#[alias("glNamedBufferDataEXT")]
	pub glNamedBufferData: Option<unsafe extern "system" fn(GLuint, GLsizeiptr, *const c_void, GLenum)>,
	#[alias("glNamedBufferSubDataEXT")]
	pub glNamedBufferSubData:
		Option<unsafe extern "system" fn(GLuint, GLintptr, GLsizeiptr, *const c_void)>,
	#[alias("glNamedCopyBufferSubDataEXT")]
	pub glCopyNamedBufferSubData:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLintptr, GLintptr, GLsizeiptr)>,
	#[alias("glClearNamedBufferSubDataEXT")]
	pub glClearNamedBufferSubData: Option<
		unsafe extern "system" fn(GLuint, GLenum, GLintptr, GLsizeiptr, GLenum, GLenum, *const c_void),
	>,
	#[alias("glMapNamedBufferRangeEXT")]
	pub glMapNamedBufferRange:
		Option<unsafe extern "system" fn(GLuint, GLintptr, GLsizeiptr, GLbitfield) -> *mut c_void>,
	#[alias("glFlushMappedNamedBufferRangeEXT")]
	pub glFlushMappedNamedBufferRange: Option<unsafe extern "system" fn(GLuint, GLintptr, GLsizeiptr)>,
	#[alias("glUnmapNamedBufferEXT")]
	pub glUnmapNamedBuffer: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	pub glCreateTextures: Option<unsafe extern "system" fn(GLenum, GLsizei, *mut GLuint)>,
	pub glTextureStorage2D:
		Option<unsafe extern "system" fn(GLuint, GLsizei, GLenum, GLsizei, GLsizei)>,
	pub glTextureSubImage2D: Option<
		unsafe extern "system" fn(
			GLuint,
			GLint,
			GLint,
			GLint,
			GLsizei,
			GLsizei,
			GLenum,
			GLenum,
			*const c_void,
		),
	>,
	pub glTextureParameteri: Option<unsafe extern "system" fn(GLuint, GLenum, GLint)>,
	pub glBindTextureUnit: Option<unsafe extern "system" fn(GLuint, GLuint)>,
	pub glGenerateTextureMipmap: Option<unsafe extern "system" fn(GLuint)>,
	pub glCreateFramebuffers: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	pub glNamedFramebufferTexture: Option<unsafe extern "system" fn(GLuint, GLenum, GLuint, GLint)>,
	pub glCheckNamedFramebufferStatus: Option<unsafe extern "system" fn(GLuint, GLenum) -> GLenum>,
	pub glCreateVertexArrays: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	pub glVertexArrayVertexBuffer:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLuint, GLintptr, GLsizei)>,
	pub glVertexArrayElementBuffer: Option<unsafe extern "system" fn(GLuint, GLuint)>,
	pub glVertexArrayAttribFormat:
		Option<unsafe extern "system" fn(GLuint, GLuint, GLint, GLenum, GLboolean, GLuint)>,
	pub glVertexArrayAttribBinding: Option<unsafe extern "system" fn(GLuint, GLuint, GLuint)>,
	pub glEnableVertexArrayAttrib: Option<unsafe extern "system" fn(GLuint, GLuint)>,
	pub glCreateSamplers: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	pub glCreateQueries: Option<unsafe extern "system" fn(GLenum, GLsizei, *mut GLuint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbGetTextureSubImageFunctions {
	pub glGetTextureSubImage: Option<
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
			GLsizei,
			*mut c_void,
		),
	>,
	pub glGetCompressedTextureSubImage: Option<
		unsafe extern "system" fn(
			GLuint,
			GLint,
			GLint,
			GLint,
			GLint,
			GLsizei,
			GLsizei,
			GLsizei,
			GLsizei,
			*mut c_void,
		),
	>,
}

#[derive(Default, SymbolTable)]
pub struct KhrRobustnessFunctions {
	#[alias("glGetGraphicsResetStatusKHR", "glGetGraphicsResetStatusARB")]
	pub glGetGraphicsResetStatus: Option<unsafe extern "system" fn() -> GLenum>,
	#[alias("glReadnPixelsKHR", "glReadnPixelsARB")]
	pub glReadnPixels: Option<
		unsafe extern "system" fn(GLint, GLint, GLsizei, GLsizei, GLenum, GLenum, GLsizei, *mut c_void),
	>,
	#[alias("glGetnUniformfvKHR", "glGetnUniformfvARB")]
	pub glGetnUniformfv: Option<unsafe extern "system" fn(GLuint, GLint, GLsizei, *mut GLfloat)>,
	#[alias("glGetnUniformivKHR", "glGetnUniformivARB")]
	pub glGetnUniformiv: Option<unsafe extern "system" fn(GLuint, GLint, GLsizei, *mut GLint)>,
	#[alias("glGetnUniformuivKHR", "glGetnUniformuivARB")]
	pub glGetnUniformuiv: Option<unsafe extern "system" fn(GLuint, GLint, GLsizei, *mut GLuint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTextureBarrierFunctions {
	#[alias("glTextureBarrierNV")]
	pub glTextureBarrier: Option<unsafe extern "system" fn()>,
}

extensions! {
	ArbClipControl(ArbClipControlFunctions) = "GL_ARB_clip_control";
	ArbCullDistance = "GL_ARB_cull_distance";
	ArbEs31Compatibility(ArbEs31CompatibilityFunctions) = "GL_ARB_ES3_1_compatibility";
	ArbConditionalRenderInverted = "GL_ARB_conditional_render_inverted";
	ArbDerivativeControl = "GL_ARB_derivative_control";
	KhrContextFlushControl = "GL_KHR_context_flush_control";
	ArbDirectStateAccess(ArbDirectStateAccessFunctions) = "GL_ARB_direct_state_access";
	ArbGetTextureSubImage(ArbGetTextureSubImageFunctions) = "GL_ARB_get_texture_sub_image";
	KhrRobustness(KhrRobustnessFunctions) = "GL_KHR_robustness";
	ArbShaderTextureImageSamples = "GL_ARB_shader_texture_image_samples";
	ArbTextureBarrier(ArbTextureBarrierFunctions) = "GL_ARB_texture_barrier";
}

tier! {
	Gl45(Gl44) {
		arb_clip_control: ArbClipControl,
		arb_cull_distance: ArbCullDistance,
		arb_es3_1_compatibility: ArbEs31Compatibility,
		arb_conditional_render_inverted: ArbConditionalRenderInverted,
		arb_derivative_control: ArbDerivativeControl,
		khr_context_flush_control: KhrContextFlushControl,
		arb_direct_state_access: ArbDirectStateAccess,
		arb_get_texture_sub_image: ArbGetTextureSubImage,
		khr_robustness: KhrRobustness,
		arb_shader_texture_image_samples: ArbShaderTextureImageSamples,
		arb_texture_barrier: ArbTextureBarrier,
	}
}
