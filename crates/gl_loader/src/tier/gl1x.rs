// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use std::ffi::{c_char, c_void, CStr};

use gl::types::*;

use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct Gl11Functions {
	pub glBindTexture: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	pub glBlendFunc: Option<unsafe extern "system" fn(GLenum, GLenum)>,
	pub glClear: Option<unsafe extern "system" fn(GLbitfield)>,
	pub glClearColor: Option<unsafe extern "system" fn(GLfloat, GLfloat, GLfloat, GLfloat)>,
	pub glClearDepth: Option<unsafe extern "system" fn(GLdouble)>,
	pub glClearStencil: Option<unsafe extern "system" fn(GLint)>,
	pub glColorMask: Option<unsafe extern "system" fn(GLboolean, GLboolean, GLboolean, GLboolean)>,
	pub glCopyTexImage1D:
		Option<unsafe extern "system" fn(GLenum, GLint, GLenum, GLint, GLint, GLsizei, GLint)>,
	pub glCopyTexImage2D: Option<
		unsafe extern "system" fn(GLenum, GLint, GLenum, GLint, GLint, GLsizei, GLsizei, GLint),
	>,
	pub glCopyTexSubImage1D:
		Option<unsafe extern "system" fn(GLenum, GLint, GLint, GLint, GLint, GLsizei)>,
	pub glCopyTexSubImage2D: Option<
		unsafe extern "system" fn(GLenum, GLint, GLint, GLint, GLint, GLint, GLsizei, GLsizei),
	>,
	pub glCullFace: Option<unsafe extern "system" fn(GLenum)>,
	pub glDeleteTextures: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	pub glDepthFunc: Option<unsafe extern "system" fn(GLenum)>,
	pub glDepthMask: Option<unsafe extern "system" fn(GLboolean)>,
	pub glDepthRange: Option<unsafe extern "system" fn(GLdouble, GLdouble)>,
	pub glDisable: Option<unsafe extern "system" fn(GLenum)>,
	pub glDrawArrays: Option<unsafe extern "system" fn(GLenum, GLint, GLsizei)>,
	pub glDrawBuffer: Option<unsafe extern "system" fn(GLenum)>,
	pub glDrawElements: Option<unsafe extern "system" fn(GLenum, GLsizei, GLenum, *const c_void)>,
	pub glEnable: Option<unsafe extern "system" fn(GLenum)>,
	pub glFinish: Option<unsafe extern "system" fn()>,
	pub glFlush: Option<unsafe extern "system" fn()>,
	pub glFrontFace: Option<unsafe extern "system" fn(GLenum)>,
	pub glGenTextures: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	pub glGetBooleanv: Option<unsafe extern "system" fn(GLenum, *mut GLboolean)>,
	pub glGetDoublev: Option<unsafe extern "system" fn(GLenum, *mut GLdouble)>,
	pub glGetError: Option<unsafe extern "system" fn() -> GLenum>,
	pub glGetFloatv: Option<unsafe extern "system" fn(GLenum, *mut GLfloat)>,
	pub glGetIntegerv: Option<unsafe extern "system" fn(GLenum, *mut GLint)>,
	pub glGetString: Option<unsafe extern "system" fn(GLenum) -> *const GLubyte>,
	pub glGetTexImage: Option<unsafe extern "system" fn(GLenum, GLint, GLenum, GLenum, *mut c_void)>,
	pub glGetTexParameteriv: Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLint)>,
	pub glHint: Option<unsafe extern "system" fn(GLenum, GLenum)>,
	pub glIsEnabled: Option<unsafe extern "system" fn(GLenum) -> GLboolean>,
	pub glIsTexture: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	pub glLineWidth: Option<unsafe extern "system" fn(GLfloat)>,
	pub glLogicOp: Option<unsafe extern "system" fn(GLenum)>,
	pub glPixelStorei: Option<unsafe extern "system" fn(GLenum, GLint)>,
	pub glPointSize: Option<unsafe extern "system" fn(GLfloat)>,
	pub glPolygonMode: Option<unsafe extern "system" fn(GLenum, GLenum)>,
	pub glPolygonOffset: Option<unsafe extern "system" fn(GLfloat, GLfloat)>,
	pub glReadBuffer: Option<unsafe extern "system" fn(GLenum)>,
	pub glReadPixels: Option<
		unsafe extern "system" fn(GLint, GLint, GLsizei, GLsizei, GLenum, GLenum, *mut c_void),
	>,
	pub glScissor: Option<unsafe extern "system" fn(GLint, GLint, GLsizei, GLsizei)>,
	pub glStencilFunc: Option<unsafe extern "system" fn(GLenum, GLint, GLuint)>,
	pub glStencilMask: Option<unsafe extern "system" fn(GLuint)>,
	pub glStencilOp: Option<unsafe extern "system" fn(GLenum, GLenum, GLenum)>,
	pub glTexImage2D: Option<
		unsafe extern "system" fn(
			GLenum,
			GLint,
			GLint,
			GLsizei,
			GLsizei,
			GLint,
			GLenum,
			GLenum,
			*const c_void,
		),
	>,
	pub glTexParameteri: Option<unsafe extern "system" fn(GLenum, GLenum, GLint)>,
	pub glTexSubImage2D: Option<
		unsafe extern "system" fn(
			GLenum,
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
	pub glViewport: Option<unsafe extern "system" fn(GLint, GLint, GLsizei, GLsizei)>,
}

/// Baseline version, present on every context.
pub struct Gl11 {
	functions: Gl11Functions,
}

impl Gl11 {
	pub(crate) fn new(functions: Gl11Functions) -> Self {
		Self { functions }
	}

	#[inline]
	pub fn functions(&self) -> &Gl11Functions {
		&self.functions
	}

	/// # SAFETY
	/// * must be called from GL thread
	#[inline]
	pub unsafe fn clear(&self, mask: GLbitfield) {
		call!(self.functions, glClear(mask))
	}

	/// # SAFETY
	/// * must be called from GL thread
	#[inline]
	pub unsafe fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
		call!(self.functions, glClearColor(r, g, b, a))
	}

	/// # SAFETY
	/// * must be called from GL thread
	#[inline]
	pub unsafe fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
		call!(self.functions, glViewport(x, y, width, height))
	}

	/// # SAFETY
	/// * must be called from GL thread
	#[inline]
	pub unsafe fn enable(&self, cap: GLenum) {
		call!(self.functions, glEnable(cap))
	}

	/// # SAFETY
	/// * must be called from GL thread
	#[inline]
	pub unsafe fn disable(&self, cap: GLenum) {
		call!(self.functions, glDisable(cap))
	}

	/// # SAFETY
	/// * must be called from GL thread
	#[inline]
	pub unsafe fn get_error(&self) -> GLenum {
		call!(self.functions, glGetError())
	}

	/// # SAFETY
	/// * must be called from GL thread
	/// * `pname` must name a single-valued state
	pub unsafe fn get_integer(&self, pname: GLenum) -> GLint {
		let mut value = 0 as GLint;
		call!(self.functions, glGetIntegerv(pname, &mut value));
		value
	}

	/// `None` if the driver returned null, which it does for unknown names.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn get_string(&self, name: GLenum) -> Option<String> {
		let string = call!(self.functions, glGetString(name));
		match string.is_null() {
			true => None,
			false => Some(CStr::from_ptr(string as *const c_char).to_string_lossy().into_owned()),
		}
	}
}

#[derive(Default, SymbolTable)]
pub struct Gl12Functions {
	pub glCopyTexSubImage3D: Option<
		unsafe extern "system" fn(GLenum, GLint, GLint, GLint, GLint, GLint, GLint, GLsizei, GLsizei),
	>,
	#[alias("glDrawRangeElementsEXT")]
	pub glDrawRangeElements:
		Option<unsafe extern "system" fn(GLenum, GLuint, GLuint, GLsizei, GLenum, *const c_void)>,
	#[alias("glTexImage3DEXT")]
	pub glTexImage3D: Option<
		unsafe extern "system" fn(
			GLenum,
			GLint,
			GLint,
			GLsizei,
			GLsizei,
			GLsizei,
			GLint,
			GLenum,
			GLenum,
			*const c_void,
		),
	>,
	#[alias("glTexSubImage3DEXT")]
	pub glTexSubImage3D: Option<
		unsafe extern "system" fn(
			GLenum,
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
pub struct Gl13Functions {
	#[alias("glActiveTextureARB")]
	pub glActiveTexture: Option<unsafe extern "system" fn(GLenum)>,
	#[alias("glCompressedTexImage1DARB")]
	pub glCompressedTexImage1D: Option<
		unsafe extern "system" fn(GLenum, GLint, GLenum, GLsizei, GLint, GLsizei, *const c_void),
	>,
	#[alias("glCompressedTexImage2DARB")]
	pub glCompressedTexImage2D: Option<
		unsafe extern "system" fn(
			GLenum,
			GLint,
			GLenum,
			GLsizei,
			GLsizei,
			GLint,
			GLsizei,
			*const c_void,
		),
	>,
	#[alias("glCompressedTexImage3DARB")]
	pub glCompressedTexImage3D: Option<
		unsafe extern "system" fn(
			GLenum,
			GLint,
			GLenum,
			GLsizei,
			GLsizei,
			GLsizei,
			GLint,
			GLsizei,
			*const c_void,
		),
	>,
	#[alias("glCompressedTexSubImage2DARB")]
	pub glCompressedTexSubImage2D: Option<
		unsafe extern "system" fn(
			GLenum,
			GLint,
			GLint,
			GLint,
			GLsizei,
			GLsizei,
			GLenum,
			GLsizei,
			*const c_void,
		),
	>,
	#[alias("glGetCompressedTexImageARB")]
	pub glGetCompressedTexImage: Option<unsafe extern "system" fn(GLenum, GLint, *mut c_void)>,
	#[alias("glSampleCoverageARB")]
	pub glSampleCoverage: Option<unsafe extern "system" fn(GLfloat, GLboolean)>,
}

#[derive(Default, SymbolTable)]
pub struct Gl14Functions {
	#[alias("glBlendColorEXT")]
	pub glBlendColor: Option<unsafe extern "system" fn(GLfloat, GLfloat, GLfloat, GLfloat)>,
	#[alias("glBlendEquationEXT")]
	pub glBlendEquation: Option<unsafe extern "system" fn(GLenum)>,
	#[alias("glBlendFuncSeparateEXT")]
	pub glBlendFuncSeparate: Option<unsafe extern "system" fn(GLenum, GLenum, GLenum, GLenum)>,
	#[alias("glMultiDrawArraysEXT")]
	pub glMultiDrawArrays:
		Option<unsafe extern "system" fn(GLenum, *const GLint, *const GLsizei, GLsizei)>,
	#[alias("glMultiDrawElementsEXT")]
	pub glMultiDrawElements: Option<
		unsafe extern "system" fn(GLenum, *const GLsizei, GLenum, *const *const c_void, GLsizei),
	>,
	#[alias("glPointParameterfARB", "glPointParameterfEXT")]
	pub glPointParameterf: Option<unsafe extern "system" fn(GLenum, GLfloat)>,
	#[alias("glPointParameterfvARB", "glPointParameterfvEXT")]
	pub glPointParameterfv: Option<unsafe extern "system" fn(GLenum, *const GLfloat)>,
	#[alias("glPointParameteriNV")]
	pub glPointParameteri: Option<unsafe extern "system" fn(GLenum, GLint)>,
}

#[derive(Default, SymbolTable)]
pub struct Gl15Functions {
	#[alias("glBeginQueryARB")]
	pub glBeginQuery: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	#[alias("glBindBufferARB")]
	pub glBindBuffer: Option<unsafe extern "system" fn(GLenum, GLuint)>,
	#[alias("glBufferDataARB")]
	pub glBufferData: Option<unsafe extern "system" fn(GLenum, GLsizeiptr, *const c_void, GLenum)>,
	#[alias("glBufferSubDataARB")]
	pub glBufferSubData:
		Option<unsafe extern "system" fn(GLenum, GLintptr, GLsizeiptr, *const c_void)>,
	#[alias("glDeleteBuffersARB")]
	pub glDeleteBuffers: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	#[alias("glDeleteQueriesARB")]
	pub glDeleteQueries: Option<unsafe extern "system" fn(GLsizei, *const GLuint)>,
	#[alias("glEndQueryARB")]
	pub glEndQuery: Option<unsafe extern "system" fn(GLenum)>,
	#[alias("glGenBuffersARB")]
	pub glGenBuffers: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	#[alias("glGenQueriesARB")]
	pub glGenQueries: Option<unsafe extern "system" fn(GLsizei, *mut GLuint)>,
	#[alias("glGetBufferParameterivARB")]
	pub glGetBufferParameteriv: Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLint)>,
	#[alias("glGetBufferPointervARB")]
	pub glGetBufferPointerv: Option<unsafe extern "system" fn(GLenum, GLenum, *mut *mut c_void)>,
	#[alias("glGetBufferSubDataARB")]
	pub glGetBufferSubData:
		Option<unsafe extern "system" fn(GLenum, GLintptr, GLsizeiptr, *mut c_void)>,
	#[alias("glGetQueryObjectivARB")]
	pub glGetQueryObjectiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLint)>,
	#[alias("glGetQueryObjectuivARB")]
	pub glGetQueryObjectuiv: Option<unsafe extern "system" fn(GLuint, GLenum, *mut GLuint)>,
	#[alias("glGetQueryivARB")]
	pub glGetQueryiv: Option<unsafe extern "system" fn(GLenum, GLenum, *mut GLint)>,
	#[alias("glIsBufferARB")]
	pub glIsBuffer: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	#[alias("glIsQueryARB")]
	pub glIsQuery: Option<unsafe extern "system" fn(GLuint) -> GLboolean>,
	#[alias("glMapBufferARB")]
	pub glMapBuffer: Option<unsafe extern "system" fn(GLenum, GLenum) -> *mut c_void>,
	#[alias("glUnmapBufferARB")]
	pub glUnmapBuffer: Option<unsafe extern "system" fn(GLenum) -> GLboolean>,
}

tier! {
	Gl12(Gl11) + Gl12Functions;
}

tier! {
	Gl13(Gl12) + Gl13Functions;
}

tier! {
	Gl14(Gl13) + Gl14Functions;
}

tier! {
	Gl15(Gl14) + Gl15Functions;
}
