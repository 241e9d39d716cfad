// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

macro_rules! functions_or_none {
	() => {
		$crate::feature::NoFunctions
	};
	($functions:ty) => {
		$functions
	};
}

macro_rules! requirement_or_name {
	($name:literal) => {
		$crate::feature::Requirement::Extension($name)
	};
	($name:literal, $requirement:expr) => {
		$requirement
	};
}

/// Declare extension facades.
///
/// ```ignore
/// extensions! {
///     ArbSync(ArbSyncFunctions) = "GL_ARB_sync";
///     ArbDepthClamp = "GL_ARB_depth_clamp";
///     ArbCopyBuffer(ArbCopyBufferFunctions) = "GL_ARB_copy_buffer"
///         where AnyOf(&[Extension("GL_ARB_copy_buffer"), Extension("GL_EXT_copy_buffer")]);
/// }
/// ```
///
/// Without a `where` clause the extension name itself is the requirement.
/// Without a function table the extension is flag-only.
macro_rules! extensions {
	($(
		$(#[$attr:meta])*
		$name:ident $(($functions:ty))? = $ext:literal $(where $requirement:expr)?;
	)*) => {$(
		$(#[$attr])*
		pub struct $name {
			functions: functions_or_none!($($functions)?),
		}

		impl $crate::feature::Extension for $name {
			const NAME: &'static str = $ext;
			const REQUIREMENT: $crate::feature::Requirement = requirement_or_name!($ext $(, $requirement)?);

			type Functions = functions_or_none!($($functions)?);

			#[inline]
			fn new(functions: Self::Functions) -> Self {
				Self { functions }
			}

			#[inline]
			fn functions(&self) -> &Self::Functions {
				&self.functions
			}
		}
	)*};
}

/// Declare a group of features negotiated together.
macro_rules! features {
	(
		$(#[$attr:meta])*
		$name:ident {
			$($feature:ident: $ext:ty),* $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Default)]
		pub struct $name {
			$(pub $feature: Option<::std::rc::Rc<$ext>>,)*
		}

		impl $name {
			/// Extension names, in negotiation order.
			pub const NAMES: &'static [&'static str] =
				&[$(<$ext as $crate::feature::Extension>::NAME),*];

			pub const REQUIREMENTS: &'static [$crate::feature::Requirement] =
				&[$(<$ext as $crate::feature::Extension>::REQUIREMENT),*];

			pub(crate) fn negotiate(negotiator: &mut $crate::graph::Negotiator<'_>, implied: bool) -> Self {
				Self {
					$($feature: negotiator.feature::<$ext>(implied),)*
				}
			}

			/// Whether every feature of the group is present.
			pub fn complete(&self) -> bool {
				true $(&& self.$feature.is_some())*
			}
		}
	};
}

/// Declare a version facade on top of its predecessor.
///
/// `Gl33(Gl32) { ... }` also declares `Gl33Features`, holding the optional
/// features negotiated for the tier. `Gl14(Gl13) + Gl14Functions;` declares a
/// tier made of core entry points only.
macro_rules! tier {
	(
		@facade
		$(#[$attr:meta])*
		$tier:ident($previous:ty) [$functions:ty] [$($features:ty)?] {
			$($feature:ident: $ext:ty),*
		}
	) => {
		$(#[$attr])*
		pub struct $tier {
			previous: ::std::rc::Rc<$previous>,
			functions: $functions,
			$(pub $feature: ::std::rc::Rc<$ext>,)*
		}

		impl $tier {
			/// Build the facade if every feature was negotiated. The core table is
			/// only loaded once that holds.
			pub(crate) fn assemble(
				previous: ::std::rc::Rc<$previous>,
				$(features: &$features,)?
				functions: impl FnOnce() -> $functions,
			) -> Option<Self> {
				Some(Self {
					$($feature: features.$feature.clone()?,)*
					functions: functions(),
					previous,
				})
			}

			#[inline]
			pub fn previous(&self) -> &::std::rc::Rc<$previous> {
				&self.previous
			}

			#[inline]
			pub fn functions(&self) -> &$functions {
				&self.functions
			}
		}

		impl ::std::ops::Deref for $tier {
			type Target = $previous;

			#[inline]
			fn deref(&self) -> &$previous {
				&self.previous
			}
		}
	};

	(
		$(#[$attr:meta])*
		$tier:ident($previous:ty) + $functions:ty;
	) => {
		tier! {
			@facade
			$(#[$attr])*
			$tier($previous) [$functions] [] {}
		}
	};

	(
		$(#[$attr:meta])*
		$tier:ident($previous:ty) $(+ $functions:ty)? {
			$($feature:ident: $ext:ty),* $(,)?
		}
	) => {
		::paste::paste! {
			features! {
				#[doc = concat!("Features negotiated for [`", stringify!($tier), "`].")]
				[<$tier Features>] {
					$($feature: $ext),*
				}
			}

			tier! {
				@facade
				$(#[$attr])*
				$tier($previous) [functions_or_none!($($functions)?)] [[<$tier Features>]] {
					$($feature: $ext),*
				}
			}
		}
	};
}

/// Call through a slot of a function table, panicking if it is empty.
///
/// `call!(self.functions, glClear(mask))`
macro_rules! call {
	($table:expr, $function:ident($($arg:expr),* $(,)?)) => {
		$crate::loader::loaded($table.$function, stringify!($function))($($arg),*)
	};
}
