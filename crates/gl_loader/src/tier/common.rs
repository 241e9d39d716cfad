// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#![allow(non_snake_case)]

use gl::types::*;

use crate::loader::SymbolTable;

#[derive(Default, SymbolTable)]
pub struct ExtDepthBoundsTestFunctions {
	pub glDepthBoundsEXT: Option<unsafe extern "system" fn(GLdouble, GLdouble)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbGpuShaderInt64Functions {
	#[alias("glUniform1i64NV")]
	pub glUniform1i64ARB: Option<unsafe extern "system" fn(GLint, GLint64)>,
	#[alias("glUniform1ui64NV")]
	pub glUniform1ui64ARB: Option<unsafe extern "system" fn(GLint, GLuint64)>,
	#[alias("glUniform1i64vNV")]
	pub glUniform1i64vARB: Option<unsafe extern "system" fn(GLint, GLsizei, *const GLint64)>,
	#[alias("glUniform1ui64vNV")]
	pub glUniform1ui64vARB: Option<unsafe extern "system" fn(GLint, GLsizei, *const GLuint64)>,
	#[alias("glGetUniformi64vNV")]
	pub glGetUniformi64vARB: Option<unsafe extern "system" fn(GLuint, GLint, *mut GLint64)>,
	#[alias("glGetUniformui64vNV")]
	pub glGetUniformui64vARB: Option<unsafe extern "system" fn(GLuint, GLint, *mut GLuint64)>,
	#[alias("glProgramUniform1i64NV")]
	pub glProgramUniform1i64ARB: Option<unsafe extern "system" fn(GLuint, GLint, GLint64)>,
	#[alias("glProgramUniform1ui64NV")]
	pub glProgramUniform1ui64ARB: Option<unsafe extern "system" fn(GLuint, GLint, GLuint64)>,
}

#[derive(Default, SymbolTable)]
pub struct ArbBindlessTextureFunctions {
	#[alias("glGetTextureHandleNV")]
	pub glGetTextureHandleARB: Option<unsafe extern "system" fn(GLuint) -> GLuint64>,
	#[alias("glGetTextureSamplerHandleNV")]
	pub glGetTextureSamplerHandleARB: Option<unsafe extern "system" fn(GLuint, GLuint) -> GLuint64>,
	#[alias("glMakeTextureHandleResidentNV")]
	pub glMakeTextureHandleResidentARB: Option<unsafe extern "system" fn(GLuint64)>,
	#[alias("glMakeTextureHandleNonResidentNV")]
	pub glMakeTextureHandleNonResidentARB: Option<unsafe extern "system" fn(GLuint64)>,
	#[alias("glGetImageHandleNV")]
	pub glGetImageHandleARB:
		Option<unsafe extern "system" fn(GLuint, GLint, GLboolean, GLint, GLenum) -> GLuint64>,
	#[alias("glMakeImageHandleResidentNV")]
	pub glMakeImageHandleResidentARB: Option<unsafe extern "system" fn(GLuint64, GLenum)>,
	#[alias("glMakeImageHandleNonResidentNV")]
	pub glMakeImageHandleNonResidentARB: Option<unsafe extern "system" fn(GLuint64)>,
	#[alias("glUniformHandleui64NV")]
	pub glUniformHandleui64ARB: Option<unsafe extern "system" fn(GLint, GLuint64)>,
	#[alias("glProgramUniformHandleui64NV")]
	pub glProgramUniformHandleui64ARB: Option<unsafe extern "system" fn(GLuint, GLint, GLuint64)>,
	#[alias("glIsTextureHandleResidentNV")]
	pub glIsTextureHandleResidentARB: Option<unsafe extern "system" fn(GLuint64) -> GLboolean>,
	#[alias("glIsImageHandleResidentNV")]
	pub glIsImageHandleResidentARB: Option<unsafe extern "system" fn(GLuint64) -> GLboolean>,
}

extensions! {
	ExtTextureFilterAnisotropic = "GL_EXT_texture_filter_anisotropic";
	ExtDepthBoundsTest(ExtDepthBoundsTestFunctions) = "GL_EXT_depth_bounds_test";
	KhrTextureCompressionAstcHdr = "GL_KHR_texture_compression_astc_hdr";
	KhrTextureCompressionAstcLdr = "GL_KHR_texture_compression_astc_ldr";
	ExtTextureCompressionS3tc = "GL_EXT_texture_compression_s3tc";
	ArbGpuShaderInt64(ArbGpuShaderInt64Functions) = "GL_ARB_gpu_shader_int64";
	ArbBindlessTexture(ArbBindlessTextureFunctions) = "GL_ARB_bindless_texture";
	AmdGpuShaderInt16 = "GL_AMD_gpu_shader_int16";
	/// Exposes `GL_GPU_MEMORY_INFO_*` queries on NVIDIA drivers.
	NvxGpuMemoryInfo = "GL_NVX_gpu_memory_info";
}

features! {
	/// Extensions outside any core version, probed on every context.
	CommonFeatures {
		ext_texture_filter_anisotropic: ExtTextureFilterAnisotropic,
		ext_depth_bounds_test: ExtDepthBoundsTest,
		khr_texture_compression_astc_hdr: KhrTextureCompressionAstcHdr,
		khr_texture_compression_astc_ldr: KhrTextureCompressionAstcLdr,
		ext_texture_compression_s3tc: ExtTextureCompressionS3tc,
		arb_gpu_shader_int64: ArbGpuShaderInt64,
		arb_bindless_texture: ArbBindlessTexture,
		amd_gpu_shader_int16: AmdGpuShaderInt16,
		nvx_gpu_memory_info: NvxGpuMemoryInfo,
	}
}
