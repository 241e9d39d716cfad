// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Runtime capability negotiation for OpenGL contexts.
//!
//! [`Gl::load`] inspects a live context once, decides which core versions and
//! extensions the driver really implements, and binds one function table per
//! available feature. Missing capabilities show up as `None`, never as errors.

// Lets `#[derive(SymbolTable)]` refer to `::gl_loader` from inside this crate.
extern crate self as gl_loader;

#[macro_use]
mod macros;

pub mod config;
pub mod extensions;
pub mod feature;
pub mod graph;
pub mod loader;
pub mod source;
pub mod tier;

#[cfg(test)]
mod testing;

pub use config::{LoaderConfig, ProbePolicy};
pub use extensions::ExtensionSet;
pub use feature::{Availability, Extension, FeatureStatus, NoFunctions, Requirement};
pub use graph::{Features, Gl, NegotiationStats, Versions};
pub use loader::{load, load_new, resolve, LoadStats, SlotDescriptor, SymbolTable};
pub use source::{ContextVersion, DetectVersionError, ProcSource, SymbolSource, VersionParseError};
