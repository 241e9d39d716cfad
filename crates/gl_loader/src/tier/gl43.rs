// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::{ffi::c_void, ptr};

use gl::types::*;

use super::Gl42;
use crate::loader::{sizei, SymbolTable};

#[derive(Default, SymbolTable)]
pub struct KhrDebugFunctions {
	#[alias("glDebugMessageControlARB", "glDebugMessageControlKHR")]
	pub glDebugMessageControl:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLsizei, *const GLuint, GLboolean)>,
	#[alias("glDebugMessageInsertARB", "glDebugMessageInsertKHR")]
	pub glDebugMessageInsert:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLuint, GLenum, GLsizei, *const GLchar)>,
	#[alias("glDebugMessageCallbackARB", "glDebugMessageCallbackKHR")]
	pub glDebugMessageCallback: Option<unsafe extern "system" fn(GLDEBUGPROC, *const c_void)>,
	#[alias("glGetDebugMessageLogARB", "glGetDebugMessageLogKHR")]
	pub glGetDebugMessageLog: Option<
		unsafe extern "system" fn(
			GLuint,
			GLsizei,
			*mut GLenum,
			*mut GLenum,
			*mut GLuint,
			*mut GLenum,
			*mut GLsizei,
			*mut GLchar,
		) -> GLuint,
	>,
	#[alias("glPushDebugGroupKHR")]
	pub glPushDebugGroup: Option<unsafe extern "system" fn(GLenum, GLuint, GLsizei, *const GLchar)>,
	#[alias("glPopDebugGroupKHR")]
	pub glPopDebugGroup: Option<unsafe extern "system" fn()>,
	#[alias("glObjectLabelKHR")]
	pub glObjectLabel: Option<unsafe extern "system" fn(GLenum, GLuint, GLsizei, *const GLchar)>,
	#[alias("glGetObjectLabelKHR")]
	pub glGetObjectLabel:
		Option<unsafe extern "system" fn(GLenum, GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	#[alias("glObjectPtrLabelKHR")]
	pub glObjectPtrLabel: Option<unsafe extern "system" fn(*const c_void, GLsizei, *const GLchar)>,
	#[alias("glGetObjectPtrLabelKHR")]
	pub glGetObjectPtrLabel:
		Option<unsafe extern "system" fn(*const c_void, GLsizei, *mut GLsizei, *mut GLchar)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbClearBufferObjectFunctions {
	pub glClearBufferData:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLenum, *const c_void)>,
	pub glClearBufferSubData: Option<
		unsafe extern "system" fn(GLenum, GLenum, GLintptr, GLsizeiptr, GLenum, GLenum, *const c_void),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbComputeShaderFunctions {
	pub glDispatchCompute: Option<unsafe extern "system" fn(GLuint, GLuint, GLuint)>,
	pub glDispatchComputeIndirect: Option<unsafe extern "system" fn(GLintptr)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbCopyImageFunctions {
	#[alias("glCopyImageSubDataEXT", "glCopyImageSubDataOES")]
	pub glCopyImageSubData: Option<
		unsafe extern "system" fn(
			GLuint,
			GLenum,
			GLint,
			GLint,
			GLint,
			GLint,
			GLuint,
			GLenum,
			GLint,
			GLint,
			GLint,
			GLint,
			GLsizei,
			GLsizei,
			GLsizei,
		),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbFramebufferNoAttachmentsFunctions {
	pub glFramebufferParameteri: Option<unsafe extern "system" fn(GLenum, GLenum, GLint)>,
	pub glGetFramebufferParameteriv: Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbInternalformatQuery2Functions {
	pub glGetInternalformati64v:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLsizei, *mut GLint64)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbInvalidateSubdataFunctions {
	pub glInvalidateTexSubImage: Option<
		unsafe extern "system" fn(GLuint, GLint, GLint, GLint, GLint, GLsizei, GLsizei, GLsizei),
	>,
	pub glInvalidateTexImage: Option<unsafe extern "system" fn(GLuint, GLint)>,
	pub glInvalidateBufferSubData: Option<unsafe extern "system" fn(GLuint, GLintptr, GLsizeiptr)>,
	pub glInvalidateBufferData: Option<unsafe extern "system" fn(GLuint)>,
	pub glInvalidateFramebuffer: Option<unsafe extern "system" fn(GLenum, GLsizei, *const GLenum)>,
	pub glInvalidateSubFramebuffer: Option<
		unsafe extern "system" fn(GLenum, GLsizei, *const GLenum, GLint, GLint, GLsizei, GLsizei),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbMultiDrawIndirectFunctions {
	#[alias("glMultiDrawArraysIndirectAMD", "glMultiDrawArraysIndirectEXT")]
	pub glMultiDrawArraysIndirect:
		Option<unsafe extern "system" fn(GLenum, *const c_void, GLsizei, GLsizei)>,
	#[alias("glMultiDrawElementsIndirectAMD", "glMultiDrawElementsIndirectEXT")]
	pub glMultiDrawElementsIndirect:
		Option<unsafe extern "system" fn(GLenum, GLenum, *const c_void, GLsizei, GLsizei)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbProgramInterfaceQueryFunctions {
	pub glGetProgramInterfaceiv: Option<unsafe extern "system" fn(GLuint, GLenum, GLenum, *mut GLint)>,
	pub glGetProgramResourceIndex:
		Option<unsafe extern "system" fn(GLuint, GLenum, *const GLchar) -> GLuint>,
	pub glGetProgramResourceName:
		Option<unsafe extern "system" fn(GLuint, GLenum, GLuint, GLsizei, *mut GLsizei, *mut GLchar)>,
	pub glGetProgramResourceiv: Option<
		unsafe extern "system" fn(
			GLuint,
			GLenum,
			GLuint,
			GLsizei,
			*const GLenum,
			GLsizei,
			*mut GLsizei,
			*mut GLint,
		),
	>,
	pub glGetProgramResourceLocation:
		Option<unsafe extern "system" fn(GLuint, GLenum, *const GLchar) -> GLint>,
	pub glGetProgramResourceLocationIndex:
		Option<unsafe extern "system" fn(GLuint, GLenum, *const GLchar) -> GLint>,
}

#[derive(Default, SymbolTable)]
pub struct ArbShaderStorageBufferObjectFunctions {
	pub glShaderStorageBlockBinding: Option<unsafe extern "system" fn(GLuint, GLuint, GLuint)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTextureBufferRangeFunctions {
	#[alias("glTexBufferRangeEXT", "glTexBufferRangeOES")]
	pub glTexBufferRange:
		Option<unsafe extern "system" fn(GLenum, GLenum, GLuint, GLintptr, GLsizeiptr)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTextureStorageMultisampleFunctions {
	pub glTexStorage2DMultisample:
		Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei, GLsizei, GLboolean)>,
	#[alias("glTexStorage3DMultisampleOES")]
	pub glTexStorage3DMultisample: Option<
		unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei, GLsizei, GLsizei, GLboolean),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbTextureViewFunctions {
	#[alias("glTextureViewEXT", "glTextureViewOES")]
	pub glTextureView: Option<
		unsafe extern "system" fn(GLuint, GLenum, GLuint, GLenum, GLuint, GLuint, GLuint, GLuint),
	>,
}

#[derive(Default, SymbolTable)]
pub struct ArbVertexAttribBindingFunctions {
	pub glBindVertexBuffer: Option<unsafe extern "system" fn(GLuint, GLuint, GLintptr, GLsizei)>,
	pub glVertexAttribFormat:
		Option<unsafe extern "system" fn(GLuint, GLint, GLenum, GLboolean, GLuint)>,
	pub glVertexAttribIFormat: Option<unsafe extern "system" fn(GLuint, GLint, GLenum, GLuint)>,
	pub glVertexAttribLFormat: Option<unsafe extern "system" fn(GLuint, GLint, GLenum, GLuint)>,
	pub glVertexAttribBinding: Option<unsafe extern "system" fn(GLuint, GLuint)>,
	pub glVertexBindingDivisor: Option<unsafe extern "system" fn(GLuint, GLuint)>,
}

extensions! {
	KhrDebug(KhrDebugFunctions) = "GL_KHR_debug";
	ArbArraysOfArrays = "GL_ARB_arrays_of_arrays";
	ArbEs3Compatibility = "GL_ARB_ES3_compatibility";
	ArbClearBufferObject(ArbClearBufferObjectFunctions) = "GL_ARB_clear_buffer_object";
	ArbComputeShader(ArbComputeShaderFunctions) = "GL_ARB_compute_shader";
	ArbCopyImage(ArbCopyImageFunctions) = "GL_ARB_copy_image";
	ArbExplicitUniformLocation = "GL_ARB_explicit_uniform_location";
	ArbFragmentLayerViewport = "GL_ARB_fragment_layer_viewport";
	ArbFramebufferNoAttachments(ArbFramebufferNoAttachmentsFunctions) =
		"GL_ARB_framebuffer_no_attachments";
	ArbInternalformatQuery2(ArbInternalformatQuery2Functions) = "GL_ARB_internalformat_query2";
	ArbInvalidateSubdata(ArbInvalidateSubdataFunctions) = "GL_ARB_invalidate_subdata";
	ArbMultiDrawIndirect(ArbMultiDrawIndirectFunctions) = "GL_ARB_multi_draw_indirect";
	ArbProgramInterfaceQuery(ArbProgramInterfaceQueryFunctions) = "GL_ARB_program_interface_query";
	ArbRobustBufferAccessBehavior = "GL_ARB_robust_buffer_access_behavior";
	ArbShaderImageSize = "GL_ARB_shader_image_size";
	ArbShaderStorageBufferObject(ArbShaderStorageBufferObjectFunctions) =
		"GL_ARB_shader_storage_buffer_object";
	ArbStencilTexturing = "GL_ARB_stencil_texturing";
	ArbTextureBufferRange(ArbTextureBufferRangeFunctions) = "GL_ARB_texture_buffer_range";
	ArbTextureQueryLevels = "GL_ARB_texture_query_levels";
	ArbTextureStorageMultisample(ArbTextureStorageMultisampleFunctions) =
		"GL_ARB_texture_storage_multisample";
	ArbTextureView(ArbTextureViewFunctions) = "GL_ARB_texture_view";
	ArbVertexAttribBinding(ArbVertexAttribBindingFunctions) = "GL_ARB_vertex_attrib_binding";
}

impl KhrDebug {
	/// # SAFETY
	/// * must be called from GL thread
	/// * `user_param` must stay valid for as long as the callback is installed
	pub unsafe fn debug_message_callback(&self, callback: GLDEBUGPROC, user_param: *const c_void) {
		call!(self.functions, glDebugMessageCallback(callback, user_param))
	}

	/// Enable or disable messages matching `source`, `ty` and `severity`.
	/// An empty `ids` matches every message id.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn debug_message_control(
		&self,
		source: GLenum,
		ty: GLenum,
		severity: GLenum,
		ids: &[GLuint],
		enabled: bool,
	) {
		let count = sizei(ids.len(), "message id list");
		let ids_ptr = match ids.is_empty() {
			true => ptr::null(),
			false => ids.as_ptr(),
		};

		call!(
			self.functions,
			glDebugMessageControl(
				source,
				ty,
				severity,
				count,
				ids_ptr,
				enabled as GLboolean,
			)
		)
	}

	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn push_debug_group(&self, source: GLenum, id: GLuint, message: &str) {
		let length = sizei(message.len(), "debug group message");
		call!(self.functions, glPushDebugGroup(source, id, length, message.as_ptr() as *const GLchar))
	}

	/// # SAFETY
	/// * must be called from GL thread, with a group pushed
	pub unsafe fn pop_debug_group(&self) {
		call!(self.functions, glPopDebugGroup())
	}
}

tier! {
	Gl43(Gl42) {
		khr_debug: KhrDebug,
		arb_arrays_of_arrays: ArbArraysOfArrays,
		arb_es3_compatibility: ArbEs3Compatibility,
		arb_clear_buffer_object: ArbClearBufferObject,
		arb_compute_shader: ArbComputeShader,
		arb_copy_image: ArbCopyImage,
		arb_explicit_uniform_location: ArbExplicitUniformLocation,
		arb_fragment_layer_viewport: ArbFragmentLayerViewport,
		arb_framebuffer_no_attachments: ArbFramebufferNoAttachments,
		arb_internalformat_query2: ArbInternalformatQuery2,
		arb_invalidate_subdata: ArbInvalidateSubdata,
		arb_multi_draw_indirect: ArbMultiDrawIndirect,
		arb_program_interface_query: ArbProgramInterfaceQuery,
		arb_robust_buffer_access_behavior: ArbRobustBufferAccessBehavior,
		arb_shader_image_size: ArbShaderImageSize,
		arb_shader_storage_buffer_object: ArbShaderStorageBufferObject,
		arb_stencil_texturing: ArbStencilTexturing,
		arb_texture_buffer_range: ArbTextureBufferRange,
		arb_texture_query_levels: ArbTextureQueryLevels,
		arb_texture_storage_multisample: ArbTextureStorageMultisample,
		arb_texture_view: ArbTextureView,
		arb_vertex_attrib_binding: ArbVertexAttribBinding,
	}
}
