// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Clear the window through the negotiated facades, fading between random colors

use rand::Rng;

fn main() {
	gl_loader_tests::view_window(true, |gl| {
		let mut rng = rand::thread_rng();
		let mut from = [0.2f32; 3];
		let mut to = rng.gen::<[f32; 3]>();
		let mut t = 0.0f32;

		// loop
		move || {
			t += 0.01;
			if t >= 1.0 {
				t = 0.0;
				from = to;
				to = rng.gen();
			}

			let [r, g, b] = [0, 1, 2].map(|i| from[i] + (to[i] - from[i]) * t);

			let debug = gl.features().gl43.khr_debug.as_ref();
			unsafe {
				if let Some(debug) = debug {
					debug.push_debug_group(gl::DEBUG_SOURCE_APPLICATION, 0, "clear");
				}

				gl.gl11().clear_color(r, g, b, 1.0);
				gl.gl11().clear(gl::COLOR_BUFFER_BIT);

				if let Some(debug) = debug {
					debug.pop_debug_group();
				}

				assert_eq!(gl.gl11().get_error(), gl::NO_ERROR);
			}
		}
	});
}
