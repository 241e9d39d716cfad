// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
	ext::IdentExt,
	punctuated::Punctuated,
	Data,
	DeriveInput,
	Fields,
	Ident,
	LitStr,
	Token,
};

#[cfg(test)]
mod test;

pub struct Slot {
	pub field: Ident,
	pub name: String,
	pub aliases: Vec<LitStr>,
}

/// Collect one slot per named field, in declaration order.
pub fn slots(input: &DeriveInput) -> syn::Result<Vec<Slot>> {
	let fields = match &input.data {
		Data::Struct(data) => match &data.fields {
			Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
			Fields::Unit => return Ok(Vec::new()),
			Fields::Unnamed(fields) =>
				return Err(syn::Error::new_spanned(
					fields,
					"symbol tables need named fields (the field name is the symbol name)",
				)),
		},
		_ =>
			return Err(syn::Error::new(
				input.ident.span(),
				"SymbolTable can only be derived for structs",
			)),
	};

	let mut slots = Vec::with_capacity(fields.len());

	for field in fields {
		let ident = match &field.ident {
			Some(x) => x.clone(),
			None => return Err(syn::Error::new_spanned(field, "expected a named field")),
		};
		let name = ident.unraw().to_string();

		let mut aliases = Vec::<LitStr>::new();
		for attr in field.attrs.iter().filter(|attr| attr.path.is_ident("alias")) {
			let list = attr.parse_args_with(Punctuated::<LitStr, Token![,]>::parse_terminated)?;

			for alias in list {
				let value = alias.value();
				if value.is_empty() {
					return Err(syn::Error::new(alias.span(), "alias must not be empty"))
				}
				if value == name {
					return Err(syn::Error::new(
						alias.span(),
						format!("{name} is already the canonical name of this slot"),
					))
				}
				if aliases.iter().any(|a| a.value() == value) {
					return Err(syn::Error::new(alias.span(), format!("duplicate alias: {value}")))
				}

				aliases.push(alias);
			}
		}

		slots.push(Slot {
			field: ident,
			name,
			aliases,
		});
	}

	Ok(slots)
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
	let slots = slots(input)?;

	let ident = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let descriptors = slots.iter().map(|slot| {
		let name = LitStr::new(&slot.name, Span::call_site());
		let aliases = &slot.aliases;
		quote! {
			::gl_loader::SlotDescriptor {
				name: #name,
				aliases: &[#(#aliases),*],
			}
		}
	});

	let binds = slots.iter().enumerate().map(|(index, slot)| {
		let field = &slot.field;
		quote! {
			#index => self.#field = ::core::mem::transmute::<*const ::core::ffi::c_void, _>(address),
		}
	});

	let addresses = slots.iter().enumerate().map(|(index, slot)| {
		let field = &slot.field;
		quote! {
			#index => unsafe { ::core::mem::transmute::<_, *const ::core::ffi::c_void>(self.#field) },
		}
	});

	Ok(quote! {
		impl #impl_generics ::gl_loader::SymbolTable for #ident #ty_generics #where_clause {
			const SLOTS: &'static [::gl_loader::SlotDescriptor] = &[#(#descriptors),*];

			#[allow(unused_variables)]
			unsafe fn bind_slot(&mut self, index: usize, address: *const ::core::ffi::c_void) {
				match index {
					#(#binds)*
					_ => {},
				}
			}

			#[allow(unused_variables)]
			fn slot_address(&self, index: usize) -> *const ::core::ffi::c_void {
				match index {
					#(#addresses)*
					_ => ::core::ptr::null(),
				}
			}
		}
	})
}
