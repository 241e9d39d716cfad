// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Version facades, their features and the function tables behind them.
//!
//! Every facade derefs to the one below it, so `gl46.khr_debug` and
//! `gl46.functions()` of the 1.1 table are reachable from the top.

pub use self::{
	common::*,
	gl1x::*,
	gl2x::*,
	gl30::*,
	gl31::*,
	gl32::*,
	gl33::*,
	gl40::*,
	gl41::*,
	gl42::*,
	gl43::*,
	gl44::*,
	gl45::*,
	gl46::*,
};

mod common;
mod gl1x;
mod gl2x;
mod gl30;
mod gl31;
mod gl32;
mod gl33;
mod gl40;
mod gl41;
mod gl42;
mod gl43;
mod gl44;
mod gl45;
mod gl46;
