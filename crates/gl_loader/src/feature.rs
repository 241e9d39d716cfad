// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::fmt;

use crate::loader::SymbolTable;

/// Condition under which a feature is considered present when its core
/// version does not already guarantee it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
	/// The driver advertises this extension name.
	Extension(&'static str),
	/// At least one of these holds, checked in order.
	AnyOf(&'static [Requirement]),
	/// Every one of these holds, checked in order.
	AllOf(&'static [Requirement]),
	/// The driver exports this entry point.
	Symbol(&'static str),
}

impl fmt::Display for Requirement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (list, separator) = match self {
			Self::Extension(name) => return f.write_str(name),
			Self::Symbol(name) => return write!(f, "{name}()"),
			Self::AnyOf(list) => (list, " | "),
			Self::AllOf(list) => (list, " & "),
		};

		f.write_str("(")?;
		for (i, requirement) in list.iter().enumerate() {
			if i != 0 {
				f.write_str(separator)?;
			}
			write!(f, "{requirement}")?;
		}
		f.write_str(")")
	}
}

/// One optional capability unit and the entry points it owns.
///
/// Usually declared with the `extensions!` macro.
pub trait Extension: Sized + 'static {
	/// Canonical extension name, `GL_` prefix included.
	const NAME: &'static str;
	const REQUIREMENT: Requirement;

	type Functions: SymbolTable;

	fn new(functions: Self::Functions) -> Self;
	fn functions(&self) -> &Self::Functions;
}

/// Table of extensions that only add tokens or shading language features.
#[derive(Debug, Default, Clone, Copy, SymbolTable)]
pub struct NoFunctions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
	/// Guaranteed by the context version, no probing done.
	Implied,
	/// Requirement checked against the driver and satisfied.
	Probed,
	Unavailable,
}

impl Availability {
	#[inline]
	pub fn is_available(self) -> bool {
		self != Self::Unavailable
	}
}

/// Outcome of negotiating one feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureStatus {
	pub name: &'static str,
	pub availability: Availability,
}

#[cfg(test)]
mod test {
	use super::Requirement::{self, *};

	#[test]
	fn display_nests() {
		const FBO: Requirement = AnyOf(&[
			Extension("GL_ARB_framebuffer_object"),
			AllOf(&[Extension("GL_EXT_framebuffer_object"), Extension("GL_EXT_framebuffer_blit")]),
		]);

		assert_eq!(
			FBO.to_string(),
			"(GL_ARB_framebuffer_object | (GL_EXT_framebuffer_object & GL_EXT_framebuffer_blit))",
		);
		assert_eq!(
			AllOf(&[Extension("GL_ARB_shader_subroutine"), Symbol("glGetSubroutineUniformLocation")])
				.to_string(),
			"(GL_ARB_shader_subroutine & glGetSubroutineUniformLocation())",
		);
	}
}
