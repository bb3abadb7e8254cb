use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Field, Fields, Ident, Variant};

use crate::attributes::{Label, ProstAttributes, ProstKind};
use crate::utils::{error_tokens, get_viam_app_proto_crate_ident, to_lower_camel};

/// Statements generated for one protobuf message (a struct) or oneof (an enum). Each field or
/// variant contributes its own statements, which are merged in declaration order and then
/// wrapped into the trait implementations by `to_object_tokens` and `wire_schema_tokens`.
pub(crate) struct MessageComposition {
    pub(crate) object_statements: Vec<TokenStream2>,
    pub(crate) enum_checks: Vec<TokenStream2>,
    pub(crate) tags: Vec<u32>,
    is_oneof: bool,
}

impl MessageComposition {
    fn new(is_oneof: bool) -> Self {
        Self {
            object_statements: vec![],
            enum_checks: vec![],
            tags: vec![],
            is_oneof,
        }
    }

    fn merge(&mut self, mut other: Self) {
        self.object_statements.append(&mut other.object_statements);
        self.enum_checks.append(&mut other.enum_checks);
        self.tags.append(&mut other.tags);
    }

    fn from_field(field: &Field, crate_ident: &Ident) -> Result<Self, TokenStream> {
        let name = field
            .ident
            .as_ref()
            .ok_or_else(|| error_tokens("protobuf messages must have named fields"))?;
        let attrs = ProstAttributes::from_attrs(&field.attrs)?;
        let field_name = name.unraw().to_string();
        let mut key = to_lower_camel(&field_name);
        if attrs.label == Label::Repeated {
            key.push_str("List");
        }

        let object = quote! { #crate_ident::common::object };
        let wire = quote! { #crate_ident::common::wire };
        let mut statements = Self::new(false);
        statements.tags.extend(attrs.tags.iter());

        statements.object_statements.push(match (&attrs.kind, &attrs.label) {
            (ProstKind::Oneof, _) => quote! {
                if let #object::Value::Object(members) = #object::ToObject::to_object(&self.#name) {
                    map.extend(members);
                }
            },
            (ProstKind::Bytes, Label::Implicit) => quote! {
                map.insert(#key.to_string(), #object::bytes_to_object(&self.#name));
            },
            (ProstKind::Bytes, Label::Optional) => quote! {
                map.insert(#key.to_string(), self.#name.as_deref().map_or(#object::Value::Null, #object::bytes_to_object));
            },
            (ProstKind::Bytes, Label::Repeated) => quote! {
                map.insert(#key.to_string(), #object::Value::Array(self.#name.iter().map(|b| #object::bytes_to_object(b)).collect()));
            },
            _ => quote! {
                map.insert(#key.to_string(), #object::ToObject::to_object(&self.#name));
            },
        });

        let check = match (&attrs.kind, &attrs.label) {
            (ProstKind::Enumeration(path), Label::Implicit) => Some(quote! {
                #wire::check_enum_value::<#path>(Self::NAME, #field_name, self.#name)?;
            }),
            (ProstKind::Enumeration(path), Label::Optional) => Some(quote! {
                if let Some(value) = self.#name {
                    #wire::check_enum_value::<#path>(Self::NAME, #field_name, value)?;
                }
            }),
            (ProstKind::Enumeration(path), Label::Repeated) => Some(quote! {
                for value in self.#name.iter().copied() {
                    #wire::check_enum_value::<#path>(Self::NAME, #field_name, value)?;
                }
            }),
            (ProstKind::Message, Label::Repeated) => Some(quote! {
                for message in self.#name.iter() {
                    #wire::WireSchema::check_enums(message)?;
                }
            }),
            (ProstKind::Message, _) | (ProstKind::Oneof, _) => Some(quote! {
                if let Some(message) = self.#name.as_ref() {
                    #wire::WireSchema::check_enums(message)?;
                }
            }),
            _ => None,
        };
        statements.enum_checks.extend(check);
        Ok(statements)
    }

    fn from_variant(variant: &Variant, crate_ident: &Ident) -> Result<Self, TokenStream> {
        let name = &variant.ident;
        let attrs = ProstAttributes::from_attrs(&variant.attrs)?;
        let key = to_lower_camel(&name.unraw().to_string());
        let variant_name = name.unraw().to_string();

        let object = quote! { #crate_ident::common::object };
        let wire = quote! { #crate_ident::common::wire };
        let mut statements = Self::new(true);
        statements.tags.extend(attrs.tags.iter());

        let value = match attrs.kind {
            ProstKind::Bytes => quote! { #object::bytes_to_object(value) },
            _ => quote! { #object::ToObject::to_object(value) },
        };
        statements.object_statements.push(quote! {
            Self::#name(value) => {
                map.insert(#key.to_string(), #value);
            }
        });

        statements.enum_checks.push(match attrs.kind {
            ProstKind::Message => quote! {
                Self::#name(message) => #wire::WireSchema::check_enums(message)?,
            },
            ProstKind::Enumeration(path) => quote! {
                Self::#name(value) => #wire::check_enum_value::<#path>(Self::NAME, #variant_name, *value)?,
            },
            _ => quote! {
                Self::#name(_) => {}
            },
        });
        Ok(statements)
    }

    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self, TokenStream> {
        let crate_ident = get_viam_app_proto_crate_ident();
        match &input.data {
            syn::Data::Struct(data) => {
                let named_fields = match &data.fields {
                    Fields::Named(fields) => fields.named.iter().collect::<Vec<_>>(),
                    Fields::Unit => vec![],
                    Fields::Unnamed(_) => {
                        return Err(error_tokens(
                            "protobuf message derive expected struct with named fields",
                        ))
                    }
                };
                let mut statements = Self::new(false);
                for field in named_fields {
                    statements.merge(Self::from_field(field, &crate_ident)?);
                }
                Ok(statements)
            }
            syn::Data::Enum(data) => {
                let mut statements = Self::new(true);
                for variant in data.variants.iter() {
                    statements.merge(Self::from_variant(variant, &crate_ident)?);
                }
                Ok(statements)
            }
            syn::Data::Union(_) => Err(error_tokens(
                "protobuf message derive expected struct or oneof enum",
            )),
        }
    }

    pub(crate) fn to_object_tokens(&self, input: &DeriveInput) -> TokenStream2 {
        let name = &input.ident;
        let crate_ident = get_viam_app_proto_crate_ident();
        let object = quote! { #crate_ident::common::object };
        let statements = &self.object_statements;
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

        let body = if self.is_oneof {
            quote! {
                match self {
                    #(#statements)*
                }
            }
        } else {
            quote! { #(#statements)* }
        };

        quote! {
            impl #impl_generics #object::ToObject for #name #ty_generics #where_clause {
                #[allow(unused_mut)]
                fn to_object(&self) -> #object::Value {
                    let mut map = #object::Map::new();
                    #body
                    #object::Value::Object(map)
                }
            }
        }
    }

    pub(crate) fn wire_schema_tokens(&self, input: &DeriveInput) -> TokenStream2 {
        let name = &input.ident;
        let name_str = name.unraw().to_string();
        let crate_ident = get_viam_app_proto_crate_ident();
        let wire = quote! { #crate_ident::common::wire };
        let checks = &self.enum_checks;
        let mut tags = self.tags.clone();
        tags.sort_unstable();
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

        let body = if self.is_oneof {
            quote! {
                match self {
                    #(#checks)*
                }
                Ok(())
            }
        } else {
            quote! {
                #(#checks)*
                Ok(())
            }
        };

        quote! {
            impl #impl_generics #wire::WireSchema for #name #ty_generics #where_clause {
                const NAME: &'static str = #name_str;
                const FIELD_TAGS: &'static [u32] = &[#(#tags),*];

                fn check_enums(&self) -> Result<(), #wire::EnumValueError> {
                    #body
                }
            }
        }
    }
}
