// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::{c_char, c_void, CStr};

use gl::types::*;

use super::Gl21;
use crate::{
	feature::Requirement::{self, AllOf, AnyOf},
	loader::SymbolTable,
};

#[derive(Default, SymbolTable)]
pub struct Gl30Functions {
	pub glClearBufferfi: Option<unsafe extern "system" fn(GLenum, GLint, GLfloat, GLint)>,
	pub glClearBufferfv: Option<unsafe extern "system" fn(GLenum, GLint, *const GLfloat)>,
	pub glClearBufferiv: Option<unsafe extern "system" fn(GLenum, GLint, *const GLint)>,
	pub glClearBufferuiv: Option<unsafe extern "system" fn(GLenum, GLint, *const GLuint)>,
	pub glGetStringi: Option<unsafe extern "system" fn(GLenum, GLuint) -> *const GLubyte>,
}

#[derive(Default, SymbolTable)]
pub struct ExtGpuShader4Functions {
	#[alias("glVertexAttribIPointerEXT")]
	pub glVertexAttribIPointer:
		Option<unsafe extern "system" fn(GLuint, GLint, GLenum, GLsizei, *const c_void)>,
	#[alias("glGetVertexAttribIivEXT")]
	pub glGetVertexAttribIiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint)>,
	#[alias("glGetVertexAttribIuivEXT")]
	pub glGetVertexAttribIuiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLuint)>,
	#[alias("glBindFragDataLocationEXT")]
	pub glBindFragDataLocation: Option<unsafe extern "system" fn(GLuint, GLuint, *const GLchar)>,
	#[alias("glGetFragDataLocationEXT")]
	pub glGetFragDataLocation: Option<unsafe extern "system" fn(GLuint, *const GLchar) -> GLint>,
	#[alias("glGetUniformuivEXT")]
	pub glGetUniformuiv: Option<unsafe extern "system" fn(GLuint, GLint, *mut GLuint)>,
	#[alias("glUniform1uiEXT")]
	pub glUniform1ui: Option<unsafe extern "system" fn(GLint, GLuint)>,
	#[alias("glUniform4uivEXT")]
	pub glUniform4uiv: Option<unsafe extern "system" fn(GLint, GLsizei, *const GLuint)>,
}

#[derive(Default, SymbolTable)]
pub struct NvConditionalRenderFunctions {
	#[alias("glBeginConditionalRenderNV")]
	pub glBeginConditionalRender: Option<unsafe extern "system" fn(GLuint, GLenum)>,
	#[alias("glEndConditionalRenderNV")]
	pub glEndConditionalRender: Option<unsafe extern "system" fn()>,
}

#[derive(Default, SymbolTable)]
pub struct ArbMapBufferRangeFunctions {
	#[alias("glMapBufferRangeEXT")]
	pub glMapBufferRange:
		Option<unsafe extern "system" fn(GLenum, GLintptr, GLsizeiptr, GLbitfield) -> *mut c_void>,
	#[alias("glFlushMappedBufferRangeAPPLE", "glFlushMappedBufferRangeEXT")]
	pub glFlushMappedBufferRange: Option<unsafe extern "system" fn(GLenum, GLintptr, GLsizeiptr)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbColorBufferFloatFunctions {
	#[alias("glClampColorARB")]
	pub glClampColor: Option<unsafe extern "system" fn(GLenum, GLenum)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbFramebufferObjectFunctions {
	#[alias("glIsRenderbufferEXT")]
	pub glIsRenderbuffer: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	#[alias("glBindRenderbufferEXT")]
	pub glBindRenderbuffer: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	#[alias("glDeleteRenderbuffersEXT")]
	pub glDeleteRenderbuffers: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	#[alias("glGenRenderbuffersEXT")]
	pub glGenRenderbuffers: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	#[alias("glRenderbufferStorageEXT")]
	pub glRenderbufferStorage: Option<unsafe extern "system" fn(GLenum, GLenum, GLsizei, GLsizei)>,
	#[alias("glRenderbufferStorageMultisampleEXT")]
	pub glRenderbufferStorageMultisample:
		Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei, GLsizei)>,
	#[alias("glGetRenderbufferParameterivEXT")]
	pub glGetRenderbufferParameteriv: Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLint)>,
	#[alias("glIsFramebufferEXT")]
	pub glIsFramebuffer: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	#[alias("glBindFramebufferEXT")]
	pub glBindFramebuffer: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	#[alias("glDeleteFramebuffersEXT")]
	pub glDeleteFramebuffers: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	#[alias("glGenFramebuffersEXT")]
	pub glGenFramebuffers: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	#[alias("glCheckFramebufferStatusEXT")]
	pub glCheckFramebufferStatus: Option<unsafe extern "system" fn(GLenum) -> GLenum>,
	#[alias("glFramebufferTexture1DEXT")]
	pub glFramebufferTexture1D: Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLuint, GLint)>,
	#[alias("glFramebufferTexture2DEXT")]
	pub glFramebufferTexture2D: Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLuint, GLint)>,
	#[alias("glFramebufferTexture3DEXT")]
	pub glFramebufferTexture3D:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLuint, GLint, GLint)>,
	#[alias("glFramebufferTextureLayerARB", "glFramebufferTextureLayerEXT")]
	pub glFramebufferTextureLayer:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLuint, GLint, GLint)>,
	#[alias("glFramebufferRenderbufferEXT")]
	pub glFramebufferRenderbuffer: Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLuint)>,
	#[alias("glGetFramebufferAttachmentParameterivEXT")]
	pub glGetFramebufferAttachmentParameteriv:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, *mut GLint)>,
	#[alias("glBlitFramebufferEXT")]
	pub glBlitFramebuffer: Option<
		unsafe extern "system" fn(
			GLint,
			GLint,
			GLint,
			GLint,
			GLint,
			GLint,
			GLint,
			GLint,
			GLbitfield,
			GLenum,
		),
	>,
	#[alias("glGenerateMipmapEXT")]
	pub glGenerateMipmap: Option<unsafe extern "system" fn(GLenum)>,
}

#[derive(Default, SymbolTable)]
pub struct ExtTextureIntegerFunctions {
	#[alias("glClearColorIiEXT")]
	pub glClearColorIi: Option<unsafe extern "system" fn(GLint, GLint, GLint, GLint)>,
	#[alias("glClearColorIuiEXT")]
	pub glClearColorIui: Option<unsafe extern "system" fn(GLuint, GLuint, GLuint, GLuint)>,
	#[alias("glTexParameterIivEXT")]
	pub glTexParameterIiv: Option<unsafe extern "system" fn(GLenum, GLenum, *const GLint)>,
	#[alias("glTexParameterIuivEXT")]
	pub glTexParameterIuiv: Option<unsafe extern "system" fn(GLenum, GLenum, *const GLuint)>,
	#[alias("glGetTexParameterIivEXT")]
	pub glGetTexParameterIiv: Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLint)>,
	#[alias("glGetTexParameterIuivEXT")]
	pub glGetTexParameterIuiv: Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLuint)>,
}

#[derive(Default, SymbolTable)]
pub struct ExtDrawBuffers2Functions {
	#[alias("glColorMaskIndexedEXT")]
	pub glColorMaski: Option<unsafe extern "system" fn(GLuint, GLboolean, GLboolean, GLboolean, GLboolean)>,
	#[alias("glGetBooleanIndexedvEXT")]
	pub glGetBooleani_v: Option<unsafe extern "system" fn(GLenum, GLuint, *mut GLboolean)>,
	#[alias("glGetIntegerIndexedvEXT")]
	pub glGetIntegeri_v: Option<unsafe extern "system" fn(GLenum, GLuint, *mut GLint)>,
	#[alias("glEnableIndexedEXT")]
	pub glEnablei: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	#[alias("glDisableIndexedEXT")]
	pub glDisablei: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	#[alias("glIsEnabledIndexedEXT")]
	pub glIsEnabledi: Option<unsafe extern "system" fn(GLenum, GLuint) -> GLboolean>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTransformFeedbackFunctions {
	#[alias("glBindBufferRangeEXT", "glBindBufferRangeNV")]
	pub glBindBufferRange:
		Option<unsafe extern "system" fn(GLenum, GLuint, GLuint, GLintptr, GLsizeiptr)>,
	#[alias("glBindBufferOffsetEXT", "glBindBufferOffsetNV")]
	pub glBindBufferOffset: Option<unsafe extern "system" fn(GLenum, GLuint, GLuint, GLintptr)>,
	#[alias("glBindBufferBaseEXT", "glBindBufferBaseNV")]
	pub glBindBufferBase: Option<unsafe extern "system" fn(GLenum, GLuint, GLuint)>,
	#[alias("glBeginTransformFeedbackEXT", "glBeginTransformFeedbackNV")]
	pub glBeginTransformFeedback: Option<unsafe extern "system" fn(GLenum)>,
	#[alias("glEndTransformFeedbackEXT", "glEndTransformFeedbackNV")]
	pub glEndTransformFeedback: Option<unsafe extern "system" fn()>,
	#[alias("glTransformFeedbackVaryingsEXT")]
	pub glTransformFeedbackVaryings:
		Option<unsafe extern "system" fn(GLuint, GLsizei, *const *const GLchar, GLenum)>,
	#[alias("glGetTransformFeedbackVaryingEXT")]
	pub glGetTransformFeedbackVarying: Option<
		unsafe extern "system" fn(
			GLuint,
			GLuint,
			GLsizei,
			*mut GLsizei,
			*mut GLsizei,
			*mut GLenum,
			*mut GLchar,
		),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbVertexArrayObjectFunctions {
	#[alias("glBindVertexArrayAPPLE")]
	pub glBindVertexArray: Option<unsafe extern "system" fn(GLuint)>,
	#[alias("glDeleteVertexArraysAPPLE")]
	pub glDeleteVertexArrays: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	#[alias("glGenVertexArraysAPPLE")]
	pub glGenVertexArrays: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	#[alias("glIsVertexArrayAPPLE")]
	pub glIsVertexArray: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
}

const FRAMEBUFFER_OBJECT: Requirement = AnyOf(&[
	Requirement::Extension("GL_ARB_framebuffer_object"),
	AllOf(&[
		Requirement::Extension("GL_EXT_framebuffer_object"),
		Requirement::Extension("GL_EXT_framebuffer_blit"),
		Requirement::Extension("GL_EXT_framebuffer_multisample"),
		Requirement::Extension("GL_EXT_packed_depth_stencil"),
		Requirement::Extension("GL_EXT_texture_array"),
	]),
]);

extensions! {
	ExtGpuShader4(ExtGpuShader4Functions) = "GL_EXT_gpu_shader4";
	NvConditionalRender(NvConditionalRenderFunctions) = "GL_NV_conditional_render";
	ArbMapBufferRange(ArbMapBufferRangeFunctions) = "GL_ARB_map_buffer_range";
	ArbColorBufferFloat(ArbColorBufferFloatFunctions) = "GL_ARB_color_buffer_float";
	ArbDepthBufferFloat = "GL_ARB_depth_buffer_float";
	ArbTextureFloat = "GL_ARB_texture_float";
	ExtPackedFloat = "GL_EXT_packed_float";
	ExtTextureSharedExponent = "GL_EXT_texture_shared_exponent";
	/// Also satisfied by the EXT extensions it was assembled from.
	ArbFramebufferObject(ArbFramebufferObjectFunctions) = "GL_ARB_framebuffer_object"
		where FRAMEBUFFER_OBJECT;
	ArbHalfFloatPixel = "GL_ARB_half_float_pixel";
	ExtTextureInteger(ExtTextureIntegerFunctions) = "GL_EXT_texture_integer";
	ExtDrawBuffers2(ExtDrawBuffers2Functions) = "GL_EXT_draw_buffers2";
	ExtTextureCompressionRgtc = "GL_EXT_texture_compression_rgtc"
		where AnyOf(&[
			Requirement::Extension("GL_EXT_texture_compression_rgtc"),
			Requirement::Extension("GL_ARB_texture_compression_rgtc"),
		]);
	/// The ARB and EXT variants define the same entry points.
	ArbTransformFeedback(ArbTransformFeedbackFunctions) = "GL_ARB_transform_feedback"
		where AnyOf(&[
			Requirement::Extension("GL_ARB_transform_feedback"),
			Requirement::Extension("GL_EXT_transform_feedback"),
		]);
	ArbVertexArrayObject(ArbVertexArrayObjectFunctions) = "GL_ARB_vertex_array_object";
}

tier! {
	Gl30(Gl21) + Gl30Functions {
		ext_gpu_shader4: ExtGpuShader4,
		nv_conditional_render: NvConditionalRender,
		arb_map_buffer_range: ArbMapBufferRange,
		arb_color_buffer_float: ArbColorBufferFloat,
		arb_depth_buffer_float: ArbDepthBufferFloat,
		arb_texture_float: ArbTextureFloat,
		ext_packed_float: ExtPackedFloat,
		ext_texture_shared_exponent: ExtTextureSharedExponent,
		arb_framebuffer_object: ArbFramebufferObject,
		arb_half_float_pixel: ArbHalfFloatPixel,
		ext_texture_integer: ExtTextureInteger,
		ext_draw_buffers2: ExtDrawBuffers2,
		ext_texture_compression_rgtc: ExtTextureCompressionRgtc,
		arb_transform_feedback: ArbTransformFeedback,
		arb_vertex_array_object: ArbVertexArrayObject,
	}
}

impl Gl30 {
	/// Name `index` of an indexed string such as `GL_EXTENSIONS`.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn get_string_indexed(&self, name: GLenum, index: GLuint) -> Option<String> {
		let string = call!(self.functions(), glGetStringi(name, index));
		match string.is_null() {
			true => None,
			false => Some(CStr::from_ptr(string as *const c_char).to_string_lossy().into_owned()),
		}
	}
}
