// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Print what the driver offers for a 3.3 core debug context

use gl_loader::Availability;

fn main() {
	gl_loader_tests::with_context(|gl| {
		let gl11 = gl.gl11();
		for (label, name) in [("vendor", gl::VENDOR), ("renderer", gl::RENDERER), ("version", gl::VERSION)] {
			let value = unsafe { gl11.get_string(name) };
			println!("{label:>10}: {}", value.as_deref().unwrap_or("?"));
		}

		println!("\nreported {}, effective {}", gl.version(), gl.effective_version());
		for (version, available) in gl.tiers() {
			println!("  {version}: {}", if available { "yes" } else { "no" });
		}

		println!("\n{} extensions advertised", gl.extensions().len());
		if let Some(gl30) = gl.gl30() {
			// the indexed query must agree with the set built during negotiation
			let count = unsafe { gl11.get_integer(gl::NUM_EXTENSIONS) }.max(0) as u32;
			for index in 0..count {
				let name = unsafe { gl30.get_string_indexed(gl::EXTENSIONS, index) };
				assert!(name.map_or(false, |name| gl.extensions().contains(&name)));
			}
		}

		println!();
		for status in gl.report() {
			let availability = match status.availability {
				Availability::Implied => "implied",
				Availability::Probed => "probed",
				Availability::Unavailable => "-",
			};
			println!("  {:<48} {availability}", status.name);
		}

		let stats = gl.stats();
		println!(
			"\n{} extension probes, {} symbol probes, {} tables loaded",
			stats.extension_probes, stats.symbol_probes, stats.tables_loaded,
		);

		assert_eq!(unsafe { gl11.get_error() }, gl::NO_ERROR);
	});
}
