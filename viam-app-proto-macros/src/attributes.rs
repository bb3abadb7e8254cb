use proc_macro::TokenStream;
use syn::{Attribute, LitStr, Path};

use crate::utils::error_tokens;

/// What a field (or oneof variant) holds on the wire, as declared by its `#[prost(...)]`
/// attribute.
#[derive(Debug)]
pub(crate) enum ProstKind {
    Scalar,
    Bytes,
    Message,
    Enumeration(Path),
    Oneof,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Label {
    Implicit,
    Optional,
    Repeated,
}

/// `ProstAttributes` is the subset of a `#[prost(...)]` attribute the derives need.
///
/// Ex. of the attributes being read
///
/// #[prost(string, tag="1")]
/// #[prost(enumeration="shared_secret::State", tag="4")]
/// #[prost(message, repeated, tag="14")]
/// #[prost(string, optional, tag="6")]
/// #[prost(oneof="upload_module_file_request::ModuleFile", tags="1, 2")]
#[derive(Debug)]
pub(crate) struct ProstAttributes {
    pub(crate) kind: ProstKind,
    pub(crate) label: Label,
    pub(crate) tags: Vec<u32>,
}

const SCALARS: &[&str] = &[
    "string", "bool", "int32", "int64", "uint32", "uint64", "sint32", "sint64", "fixed32",
    "fixed64", "sfixed32", "sfixed64", "float", "double",
];

impl ProstAttributes {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> Result<Self, TokenStream> {
        let attr = attrs
            .iter()
            .find(|attr| attr.path().is_ident("prost"))
            .ok_or_else(|| error_tokens("field is missing its #[prost(...)] attribute"))?;

        let mut kind = None;
        let mut label = Label::Implicit;
        let mut tags = vec![];

        attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .map(|ident| ident.to_string())
                .unwrap_or_default();
            let value = if meta.input.peek(syn::Token![=]) {
                Some(meta.value()?.parse::<LitStr>()?)
            } else {
                None
            };
            match key.as_str() {
                "tag" | "tags" => {
                    let value = value.ok_or_else(|| meta.error("tag requires a value"))?;
                    for tag in value.value().split(',') {
                        tags.push(tag.trim().parse::<u32>().map_err(|err| meta.error(err))?);
                    }
                }
                "optional" => label = Label::Optional,
                "repeated" => label = Label::Repeated,
                "message" => kind = Some(ProstKind::Message),
                "bytes" => kind = Some(ProstKind::Bytes),
                "enumeration" => {
                    let value =
                        value.ok_or_else(|| meta.error("enumeration requires a type path"))?;
                    kind = Some(ProstKind::Enumeration(value.parse::<Path>()?));
                }
                "oneof" => kind = Some(ProstKind::Oneof),
                "packed" | "default" => {}
                "map" | "group" => return Err(meta.error(format!("{} fields are not supported", key))),
                scalar if SCALARS.contains(&scalar) => kind = Some(ProstKind::Scalar),
                _ => return Err(meta.error("unexpected prost attribute")),
            }
            Ok(())
        })
        .map_err(|err| TokenStream::from(err.to_compile_error()))?;

        let kind = kind.ok_or_else(|| error_tokens("could not determine prost field type"))?;
        if tags.is_empty() {
            return Err(error_tokens("prost attribute has no tag"));
        }
        Ok(Self { kind, label, tags })
    }
}
