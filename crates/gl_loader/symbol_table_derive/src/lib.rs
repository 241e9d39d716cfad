// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use syn::{parse_macro_input, DeriveInput};

mod expand;

// #[derive(Default, SymbolTable)]
// #[allow(non_snake_case)]
// struct Functions {
//   #[alias("glBindVertexBufferARB")]
//   glBindVertexBuffer: Option<unsafe extern "system" fn(GLuint, GLuint, GLintptr, GLsizei)>,
// }
//
// The field name is the canonical symbol name. Aliases are tried in order
// when the canonical name does not resolve.
#[proc_macro_derive(SymbolTable, attributes(alias))]
pub fn derive_symbol_table(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(tokens as DeriveInput);

	match expand::expand(&input) {
		Ok(x) => x.into(),
		Err(e) => e.to_compile_error().into(),
	}
}
