// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{ffi::c_void, iter, ptr};

use gl::types::GLsizei;

pub use symbol_table_derive::SymbolTable;

use crate::source::SymbolSource;

#[cfg(test)]
mod test;

/// Static description of one function pointer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
	/// Canonical entry point name, tried first.
	pub name: &'static str,
	/// Historical or vendor names for the same signature, in precedence order.
	pub aliases: &'static [&'static str],
}

impl SlotDescriptor {
	/// Every name this slot may resolve under, canonical name first.
	pub fn names(&self) -> impl Iterator<Item = &'static str> {
		iter::once(self.name).chain(self.aliases.iter().copied())
	}
}

/// A fixed set of function pointer slots.
///
/// Implemented with `#[derive(SymbolTable)]` over a struct of
/// `Option<unsafe extern "system" fn(..)>` fields.
pub trait SymbolTable: Default {
	const SLOTS: &'static [SlotDescriptor];

	/// Store `address` in slot `index`. A null address empties the slot.
	///
	/// # SAFETY
	/// * `address` must be null or the entry point of a function with the
	///   slot's declared signature
	unsafe fn bind_slot(&mut self, index: usize, address: *const c_void);

	/// Address held by slot `index`, null if the slot is empty.
	fn slot_address(&self, index: usize) -> *const c_void;

	/// Address held by the slot whose canonical name is `name`.
	fn address_of(&self, name: &str) -> Option<*const c_void> {
		Self::SLOTS
			.iter()
			.position(|slot| slot.name == name)
			.map(|index| self.slot_address(index))
	}

	/// Number of slots holding an address.
	fn resolved(&self) -> usize {
		(0..Self::SLOTS.len()).filter(|&index| !self.slot_address(index).is_null()).count()
	}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
	pub resolved: usize,
	pub missing: usize,
}

/// Look `slot` up under its canonical name, then under each alias in order.
/// Returns the first non-null address, or null if no name resolves.
pub fn resolve<S: SymbolSource + ?Sized>(source: &mut S, slot: &SlotDescriptor) -> *const c_void {
	slot.names()
		.map(|name| source.get_proc_address(name))
		.find(|address| !address.is_null())
		.unwrap_or(ptr::null())
}

/// Resolve every slot of `table` against `source`.
///
/// Slots that cannot be resolved are emptied. Running this again re-resolves
/// every slot from scratch.
pub fn load<S: SymbolSource + ?Sized, T: SymbolTable>(source: &mut S, table: &mut T) -> LoadStats {
	let mut stats = LoadStats::default();

	for (index, slot) in T::SLOTS.iter().enumerate() {
		let address = resolve(source, slot);

		if address.is_null() {
			log::trace!("could not resolve {} (aliases: {:?})", slot.name, slot.aliases);
			stats.missing += 1;
		} else {
			stats.resolved += 1;
		}

		// Addresses come straight from the context's own lookup function. Calling
		// through a slot is unsafe on its own, the bound value is always valid.
		unsafe { table.bind_slot(index, address) };
	}

	stats
}

/// Build and load a fresh table.
pub fn load_new<S: SymbolSource + ?Sized, T: SymbolTable>(source: &mut S) -> (T, LoadStats) {
	let mut table = T::default();
	let stats = load(source, &mut table);
	(table, stats)
}

/// Unwrap a slot before calling through it.
///
/// Calling an entry point the driver never exported is a programming error on
/// the caller's side (the owning feature or version was assumed present), so
/// this panics instead of invoking a null pointer.
#[inline]
pub fn loaded<F>(slot: Option<F>, name: &'static str) -> F {
	match slot {
		Some(f) => f,
		None => missing_symbol(name),
	}
}

/// Length of a slice or string passed to GL, panicking if it does not fit.
pub(crate) fn sizei(len: usize, what: &'static str) -> GLsizei {
	match GLsizei::try_from(len) {
		Ok(len) => len,
		Err(_) => panic!("{what} is too long for GL ({len} > {})", GLsizei::MAX),
	}
}

#[cold]
#[inline(never)]
fn missing_symbol(name: &'static str) -> ! {
	panic!("{name} was not loaded")
}
