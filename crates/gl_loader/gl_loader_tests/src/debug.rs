// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::{c_char, c_void, CStr};

use gl::types::{GLenum, GLsizei, GLuint};
use gl_loader::Gl;

/// Route driver messages into `log`, if the context supports `GL_KHR_debug`.
pub fn setup_gl_debug(gl: &Gl) {
	let debug = match &gl.features().gl43.khr_debug {
		Some(debug) => debug,
		None => {
			log::warn!("GL_KHR_debug is not available, driver messages will not be logged");
			return
		},
	};

	unsafe {
		gl.gl11().enable(gl::DEBUG_OUTPUT);
		gl.gl11().enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
		debug.debug_message_callback(Some(gl_debug), std::ptr::null());
		debug.debug_message_control(gl::DONT_CARE, gl::DONT_CARE, gl::DONT_CARE, &[], true);
	}
}

extern "system" fn gl_debug(
	source: GLenum,
	ty: GLenum,
	_id: GLuint,
	severity: GLenum,
	_length: GLsizei,
	message: *const c_char,
	_user_param: *mut c_void,
) {
	let message = unsafe { CStr::from_ptr(message).to_string_lossy() };
	let source = match source {
		gl::DEBUG_SOURCE_API => "API",
		gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
		gl::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
		gl::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
		gl::DEBUG_SOURCE_APPLICATION => "Application",
		gl::DEBUG_SOURCE_OTHER => "Other",
		_ => "Unknown",
	};

	let ty = match ty {
		gl::DEBUG_TYPE_ERROR => "Error",
		gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behavior",
		gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
		gl::DEBUG_TYPE_PORTABILITY => "Portability",
		gl::DEBUG_TYPE_PERFORMANCE => "Performance",
		gl::DEBUG_TYPE_MARKER => "Marker",
		gl::DEBUG_TYPE_PUSH_GROUP => "Push Group",
		gl::DEBUG_TYPE_POP_GROUP => "Pop Group",
		gl::DEBUG_TYPE_OTHER => "Other",
		_ => "Unknown",
	};

	match severity {
		gl::DEBUG_SEVERITY_HIGH => log::error!(target: "OpenGL", "{ty}: {source}: {message}"),
		gl::DEBUG_SEVERITY_MEDIUM => log::warn!(target: "OpenGL", "{ty}: {source}: {message}"),
		gl::DEBUG_SEVERITY_LOW => log::debug!(target: "OpenGL", "{ty}: {source}: {message}"),
		_ => log::trace!(target: "OpenGL", "{ty}: {source}: {message}"),
	}
}
