//! Derives used on the generated app API bindings. NOTE: THESE MACROS WILL NOT WORK PROPERLY
//! IF YOU RENAME THE VIAM-APP-PROTO DEPENDENCY USING THE PACKAGE ATTRIBUTE IN CARGO.TOML.
//!
//! Both derives read the `#[prost(...)]` attributes that prost-build already emits, so they can be
//! added to generated code with a `type_attribute` and need no extra annotations.
//!
//! ToObject - implements `common::object::ToObject`, producing a plain JSON snapshot of the
//! message (lowerCamelCase keys, `List` suffix on repeated fields, oneof members flattened
//! into the parent)
//!
//! WireSchema - implements `common::wire::WireSchema`, exposing the message name, its declared
//! field numbers and a check that every enum-typed field holds a declared value
//!
//! # Example
//!
//! ```ignore
//! #[derive(Clone, PartialEq, ::prost::Message, viam_app_proto::ToObject, viam_app_proto::WireSchema)]
//! pub struct SharedSecret {
//!     #[prost(string, tag="1")]
//!     pub id: ::prost::alloc::string::String,
//!     #[prost(enumeration="shared_secret::State", tag="4")]
//!     pub state: i32,
//! }
//! ```

pub(crate) mod attributes;
pub(crate) mod composition;
pub(crate) mod utils;

use crate::composition::MessageComposition;
use proc_macro::TokenStream;

#[proc_macro_derive(ToObject)]
pub fn to_object_derive(item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::DeriveInput);

    match MessageComposition::from_input(&input) {
        Ok(statements) => statements.to_object_tokens(&input).into(),
        Err(tokens) => tokens,
    }
}

#[proc_macro_derive(WireSchema)]
pub fn wire_schema_derive(item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::DeriveInput);

    match MessageComposition::from_input(&input) {
        Ok(statements) => statements.wire_schema_tokens(&input).into(),
        Err(tokens) => tokens,
    }
}
