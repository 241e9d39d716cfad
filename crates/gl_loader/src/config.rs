// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::env;

/// Set to `1`, `true` or `yes` to verify every advertised extension against its entry points.
pub const VERIFY_ENTRY_POINTS_VAR: &str = "GL_LOADER_VERIFY_ENTRY_POINTS";

/// How far an advertised extension string is trusted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ProbePolicy {
	/// Trust extension strings, except for features that declare a symbol check
	/// in their requirement.
	#[default]
	Declared,
	/// Additionally require the first entry point of every probed feature to
	/// resolve before the feature is considered present.
	VerifyEntryPoints,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
	pub probe_policy: ProbePolicy,
}

impl LoaderConfig {
	pub fn from_env() -> Self {
		let verify = env::var(VERIFY_ENTRY_POINTS_VAR).map(|v| is_enabled(&v)).unwrap_or(false);

		Self {
			probe_policy: match verify {
				true => ProbePolicy::VerifyEntryPoints,
				false => ProbePolicy::Declared,
			},
		}
	}
}

fn is_enabled(value: &str) -> bool {
	matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn default_trusts_declared_probes_only() {
		assert_eq!(LoaderConfig::default().probe_policy, ProbePolicy::Declared);
	}

	#[test]
	fn enabled_values() {
		for value in ["1", "true", "TRUE", " yes\n"] {
			assert!(is_enabled(value), "{value:?}");
		}

		for value in ["", "0", "false", "no", "on"] {
			assert!(!is_enabled(value), "{value:?}");
		}
	}
}
