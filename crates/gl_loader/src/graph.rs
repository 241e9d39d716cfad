// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::rc::Rc;

use paste::paste;

use crate::{
	config::{LoaderConfig, ProbePolicy},
	extensions::ExtensionSet,
	feature::{Availability, Extension, FeatureStatus, Requirement},
	loader::{load_new, resolve, SymbolTable},
	source::{ContextVersion, SymbolSource},
	tier::*,
};

#[cfg(test)]
mod test;

/// Counters collected while negotiating one context.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NegotiationStats {
	/// Extension names checked against the [`ExtensionSet`].
	pub extension_probes: usize,
	/// Entry points looked up to validate a feature or tier.
	pub symbol_probes: usize,
	/// Non-empty function tables loaded.
	pub tables_loaded: usize,
}

/// Decides features one at a time and loads their tables.
pub(crate) struct Negotiator<'a> {
	source: &'a mut dyn SymbolSource,
	extensions: &'a ExtensionSet,
	config: LoaderConfig,
	stats: NegotiationStats,
	report: Vec<FeatureStatus>,
}

impl<'a> Negotiator<'a> {
	fn new(source: &'a mut dyn SymbolSource, extensions: &'a ExtensionSet, config: LoaderConfig) -> Self {
		Self {
			source,
			extensions,
			config,
			stats: NegotiationStats::default(),
			report: Vec::new(),
		}
	}

	/// Negotiate `E`. `implied` features skip every probe.
	pub(crate) fn feature<E: Extension>(&mut self, implied: bool) -> Option<Rc<E>> {
		let availability = match implied {
			true => Availability::Implied,
			false if self.satisfies(&E::REQUIREMENT) && self.verified::<E::Functions>() =>
				Availability::Probed,
			false => Availability::Unavailable,
		};

		match availability {
			Availability::Implied => log::debug!("{} implied by core version", E::NAME),
			Availability::Probed => log::debug!("{} available", E::NAME),
			Availability::Unavailable => log::debug!("{} unavailable, requires {}", E::NAME, E::REQUIREMENT),
		}

		self.report.push(FeatureStatus { name: E::NAME, availability });

		match availability.is_available() {
			true => Some(Rc::new(E::new(self.load_table()))),
			false => None,
		}
	}

	fn satisfies(&mut self, requirement: &Requirement) -> bool {
		match *requirement {
			Requirement::Extension(name) => {
				self.stats.extension_probes += 1;
				self.extensions.contains(name)
			},
			Requirement::Symbol(name) => self.probe_symbol(name),
			Requirement::AnyOf(list) => list.iter().any(|requirement| self.satisfies(requirement)),
			Requirement::AllOf(list) => list.iter().all(|requirement| self.satisfies(requirement)),
		}
	}

	pub(crate) fn probe_symbol(&mut self, name: &str) -> bool {
		self.stats.symbol_probes += 1;
		let found = !self.source.get_proc_address(name).is_null();
		if !found {
			log::debug!("{name} is not exported");
		}
		found
	}

	/// Apply the probe policy to a feature whose requirement already holds.
	fn verified<T: SymbolTable>(&mut self) -> bool {
		let slot = match (self.config.probe_policy, T::SLOTS.first()) {
			(ProbePolicy::VerifyEntryPoints, Some(slot)) => slot,
			_ => return true,
		};

		self.stats.symbol_probes += 1;
		let found = !resolve(&mut *self.source, slot).is_null();
		if !found {
			log::debug!("extension advertised but {} is not exported", slot.name);
		}
		found
	}

	pub(crate) fn load_table<T: SymbolTable>(&mut self) -> T {
		if T::SLOTS.is_empty() {
			return T::default()
		}

		let (table, stats) = load_new::<_, T>(&mut *self.source);
		self.stats.tables_loaded += 1;
		if stats.missing != 0 {
			log::trace!("{} of {} entry points missing", stats.missing, T::SLOTS.len());
		}
		table
	}
}

/// Every version facade of a context. A tier is present only if all tiers
/// below it are.
pub struct Versions {
	pub gl11: Rc<Gl11>,
	pub gl12: Option<Rc<Gl12>>,
	pub gl13: Option<Rc<Gl13>>,
	pub gl14: Option<Rc<Gl14>>,
	pub gl15: Option<Rc<Gl15>>,
	pub gl20: Option<Rc<Gl20>>,
	pub gl21: Option<Rc<Gl21>>,
	pub gl30: Option<Rc<Gl30>>,
	pub gl31: Option<Rc<Gl31>>,
	pub gl32: Option<Rc<Gl32>>,
	pub gl33: Option<Rc<Gl33>>,
	pub gl40: Option<Rc<Gl40>>,
	pub gl41: Option<Rc<Gl41>>,
	pub gl42: Option<Rc<Gl42>>,
	pub gl43: Option<Rc<Gl43>>,
	pub gl44: Option<Rc<Gl44>>,
	pub gl45: Option<Rc<Gl45>>,
	pub gl46: Option<Rc<Gl46>>,
}

/// Every negotiated feature, grouped by the tier that requires it. Features
/// are recorded here even when their tier ends up unavailable.
pub struct Features {
	pub gl30: Gl30Features,
	pub gl31: Gl31Features,
	pub gl32: Gl32Features,
	pub gl33: Gl33Features,
	pub gl40: Gl40Features,
	pub gl41: Gl41Features,
	pub gl42: Gl42Features,
	pub gl43: Gl43Features,
	pub gl44: Gl44Features,
	pub gl45: Gl45Features,
	pub gl46: Gl46Features,
	pub common: CommonFeatures,
}

/// Build a tier facade on top of its predecessor.
fn stack<P, T>(
	previous: Option<&Rc<P>>,
	available: bool,
	assemble: impl FnOnce(Rc<P>) -> Option<T>,
) -> Option<Rc<T>> {
	match (previous, available) {
		(Some(previous), true) => assemble(previous.clone()).map(Rc::new),
		_ => None,
	}
}

fn negotiate(negotiator: &mut Negotiator<'_>, version: ContextVersion) -> (Versions, Features) {
	let gl11 = Rc::new(Gl11::new(negotiator.load_table()));

	// Tiers below 3.0 have no optional features, only the version decides.
	let gl12 = stack(Some(&gl11), version.at_least(1, 2), |p| Gl12::assemble(p, || negotiator.load_table()));
	let gl13 = stack(gl12.as_ref(), version.at_least(1, 3), |p| Gl13::assemble(p, || negotiator.load_table()));
	let gl14 = stack(gl13.as_ref(), version.at_least(1, 4), |p| Gl14::assemble(p, || negotiator.load_table()));
	let gl15 = stack(gl14.as_ref(), version.at_least(1, 5), |p| Gl15::assemble(p, || negotiator.load_table()));
	let gl20 = stack(gl15.as_ref(), version.at_least(2, 0), |p| Gl20::assemble(p, || negotiator.load_table()));
	let gl21 = stack(gl20.as_ref(), version.at_least(2, 1), |p| Gl21::assemble(p, || negotiator.load_table()));

	let implied = version.at_least(3, 0);
	let gl30_features = Gl30Features::negotiate(negotiator, implied);
	let gl30 = stack(gl21.as_ref(), implied || gl30_features.complete(), |p| {
		Gl30::assemble(p, &gl30_features, || negotiator.load_table())
	});

	let implied = version.at_least(3, 1);
	let gl31_features = Gl31Features::negotiate(negotiator, implied);
	let gl31 = stack(gl30.as_ref(), implied || gl31_features.complete(), |p| {
		Gl31::assemble(p, &gl31_features, || negotiator.load_table())
	});

	let implied = version.at_least(3, 2);
	let gl32_features = Gl32Features::negotiate(negotiator, implied);
	let available = implied
		|| (gl31.is_some() && gl32_features.complete() && negotiator.probe_symbol(GL32_PROBE_SYMBOL));
	let gl32 = stack(gl31.as_ref(), available, |p| {
		Gl32::assemble(p, &gl32_features, || negotiator.load_table())
	});

	macro_rules! extension_tiers {
		($($tier:ident($previous:ident, $features:ident, $major:literal, $minor:literal)),* $(,)?) => {paste! {$(
			let implied = version.at_least($major, $minor);
			let $features = [<$tier:camel Features>]::negotiate(negotiator, implied);
			let $tier = stack($previous.as_ref(), implied || $features.complete(), |p| {
				[<$tier:camel>]::assemble(p, &$features, || negotiator.load_table())
			});
		)*}};
	}

	extension_tiers! {
		gl33(gl32, gl33_features, 3, 3),
		gl40(gl33, gl40_features, 4, 0),
		gl41(gl40, gl41_features, 4, 1),
		gl42(gl41, gl42_features, 4, 2),
		gl43(gl42, gl43_features, 4, 3),
		gl44(gl43, gl44_features, 4, 4),
		gl45(gl44, gl45_features, 4, 5),
		gl46(gl45, gl46_features, 4, 6),
	}

	let common = CommonFeatures::negotiate(negotiator, false);

	let versions = Versions {
		gl11,
		gl12,
		gl13,
		gl14,
		gl15,
		gl20,
		gl21,
		gl30,
		gl31,
		gl32,
		gl33,
		gl40,
		gl41,
		gl42,
		gl43,
		gl44,
		gl45,
		gl46,
	};

	let features = Features {
		gl30: gl30_features,
		gl31: gl31_features,
		gl32: gl32_features,
		gl33: gl33_features,
		gl40: gl40_features,
		gl41: gl41_features,
		gl42: gl42_features,
		gl43: gl43_features,
		gl44: gl44_features,
		gl45: gl45_features,
		gl46: gl46_features,
		common,
	};

	(versions, features)
}

/// Capabilities of one context, negotiated once.
///
/// ```ignore
/// let mut source = ProcSource::new(ContextVersion::new(3, 3), |name| window.get_proc_address(name));
/// let gl = unsafe { Gl::load(&mut source) };
///
/// if let Some(gl43) = gl.gl43() {
///     unsafe { gl43.khr_debug.push_debug_group(gl::DEBUG_SOURCE_APPLICATION, 0, "frame") };
/// }
/// ```
pub struct Gl {
	version: ContextVersion,
	extensions: ExtensionSet,
	versions: Versions,
	features: Features,
	report: Vec<FeatureStatus>,
	stats: NegotiationStats,
}

macro_rules! tier_accessors {
	($($tier:ident),*) => {paste! {$(
		#[inline]
		pub fn $tier(&self) -> Option<&Rc<[<$tier:camel>]>> {
			self.versions.$tier.as_ref()
		}
	)*}};
}

impl Gl {
	/// Negotiate with the configuration read from the environment.
	///
	/// # SAFETY
	/// * must be called from GL thread, with the context of `source` current
	/// * `source` must return entry points of that context
	pub unsafe fn load<S: SymbolSource>(source: &mut S) -> Self {
		Self::load_with_config(source, LoaderConfig::from_env())
	}

	/// # SAFETY
	/// * see [`Gl::load`]
	pub unsafe fn load_with_config<S: SymbolSource>(source: &mut S, config: LoaderConfig) -> Self {
		let version = source.version();
		let extensions = ExtensionSet::query(source);

		let (versions, features, report, stats) = {
			let mut negotiator = Negotiator::new(source, &extensions, config);
			let (versions, features) = negotiate(&mut negotiator, version);
			(versions, features, negotiator.report, negotiator.stats)
		};

		let gl = Self {
			version,
			extensions,
			versions,
			features,
			report,
			stats,
		};

		let available = gl.report.iter().filter(|status| status.availability.is_available()).count();
		log::info!(
			"OpenGL {} (effective {}), {} extensions advertised, {available}/{} features available",
			gl.version,
			gl.effective_version(),
			gl.extensions.len(),
			gl.report.len(),
		);

		gl
	}

	/// Version reported by the context.
	#[inline]
	pub fn version(&self) -> ContextVersion {
		self.version
	}

	/// Highest tier that is available.
	pub fn effective_version(&self) -> ContextVersion {
		self.tiers()
			.into_iter()
			.take_while(|&(_, available)| available)
			.last()
			.map_or(ContextVersion::new(1, 1), |(version, _)| version)
	}

	/// Every tier with its availability, lowest first.
	pub fn tiers(&self) -> [(ContextVersion, bool); 18] {
		let v = &self.versions;
		[
			(ContextVersion::new(1, 1), true),
			(ContextVersion::new(1, 2), v.gl12.is_some()),
			(ContextVersion::new(1, 3), v.gl13.is_some()),
			(ContextVersion::new(1, 4), v.gl14.is_some()),
			(ContextVersion::new(1, 5), v.gl15.is_some()),
			(ContextVersion::new(2, 0), v.gl20.is_some()),
			(ContextVersion::new(2, 1), v.gl21.is_some()),
			(ContextVersion::new(3, 0), v.gl30.is_some()),
			(ContextVersion::new(3, 1), v.gl31.is_some()),
			(ContextVersion::new(3, 2), v.gl32.is_some()),
			(ContextVersion::new(3, 3), v.gl33.is_some()),
			(ContextVersion::new(4, 0), v.gl40.is_some()),
			(ContextVersion::new(4, 1), v.gl41.is_some()),
			(ContextVersion::new(4, 2), v.gl42.is_some()),
			(ContextVersion::new(4, 3), v.gl43.is_some()),
			(ContextVersion::new(4, 4), v.gl44.is_some()),
			(ContextVersion::new(4, 5), v.gl45.is_some()),
			(ContextVersion::new(4, 6), v.gl46.is_some()),
		]
	}

	#[inline]
	pub fn extensions(&self) -> &ExtensionSet {
		&self.extensions
	}

	#[inline]
	pub fn versions(&self) -> &Versions {
		&self.versions
	}

	#[inline]
	pub fn features(&self) -> &Features {
		&self.features
	}

	/// Vendor and compression extensions outside the core tiers.
	#[inline]
	pub fn common(&self) -> &CommonFeatures {
		&self.features.common
	}

	/// Outcome of every negotiated feature, in negotiation order.
	#[inline]
	pub fn report(&self) -> &[FeatureStatus] {
		&self.report
	}

	/// Outcome of the feature named `name`, if it was negotiated.
	pub fn availability(&self, name: &str) -> Option<Availability> {
		self.report.iter().find(|status| status.name == name).map(|status| status.availability)
	}

	#[inline]
	pub fn stats(&self) -> NegotiationStats {
		self.stats
	}

	#[inline]
	pub fn gl11(&self) -> &Rc<Gl11> {
		&self.versions.gl11
	}

	tier_accessors!(gl12, gl13, gl14, gl15, gl20, gl21, gl30, gl31, gl32, gl33, gl40, gl41, gl42, gl43, gl44, gl45, gl46);
}
