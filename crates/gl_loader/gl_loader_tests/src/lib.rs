// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::rc::Rc;

use gl_loader::{ContextVersion, Gl, ProcSource};
use glfw::{Context, Glfw, OpenGlProfileHint, Window, WindowEvent, WindowHint};

pub mod debug;

type Events = std::sync::mpsc::Receiver<(f64, WindowEvent)>;

fn create_window(visible: bool) -> (Glfw, Window, Events) {
	let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).unwrap();
	glfw.window_hint(WindowHint::ContextVersion(3, 3));
	glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
	glfw.window_hint(WindowHint::OpenGlDebugContext(true));
	glfw.window_hint(WindowHint::Visible(visible));

	let (mut window, events) =
		glfw.create_window(1000, 1000, "test", glfw::WindowMode::Windowed).unwrap();

	window.make_current();

	(glfw, window, events)
}

/// Negotiate capabilities of the window's current context.
fn negotiate(window: &mut Window) -> Rc<Gl> {
	// the context may be newer than the hinted version
	let version = window.get_context_version();
	let version = ContextVersion::new(version.major as u32, version.minor as u32);

	let mut source = ProcSource::new(version, |p: &str| window.get_proc_address(p));
	Rc::new(unsafe { Gl::load(&mut source) })
}

/// Run `test` once against a hidden window's context.
pub fn with_context<R>(test: impl FnOnce(&Gl) -> R) -> R {
	let (_glfw, mut window, _events) = create_window(false);

	env_logger::init();
	let gl = negotiate(&mut window);
	debug::setup_gl_debug(&gl);

	test(&gl)
}

pub fn view_window<I: FnOnce(Rc<Gl>) -> L, L: FnMut()>(vsync: bool, test: I) {
	let (mut glfw, mut window, events) = create_window(true);

	if !vsync {
		glfw.set_swap_interval(glfw::SwapInterval::None);
	}

	window.set_size_polling(true);

	env_logger::init();
	let gl = negotiate(&mut window);
	debug::setup_gl_debug(&gl);

	let mut test_loop = test(gl.clone());
	while !window.should_close() {
		test_loop();

		window.swap_buffers();
		glfw.poll_events();
		for (_, event) in glfw::flush_messages(&events) {
			match event {
				WindowEvent::Size(width, height) => unsafe {
					gl.gl11().viewport(0, 0, width, height);
				},
				_ => {},
			}
		}
	}
}
