use proc_macro::TokenStream;
use proc_macro2::Span;
use proc_macro_crate::{crate_name, FoundCrate};
use syn::Ident;

pub(crate) fn error_tokens(msg: &str) -> TokenStream {
    syn::Error::new(Span::call_site(), msg)
        .to_compile_error()
        .into()
}

pub(crate) fn get_viam_app_proto_crate_ident() -> Ident {
    let found_crate =
        crate_name("viam-app-proto").expect("viam-app-proto is present in `Cargo.toml`");
    match found_crate {
        FoundCrate::Itself => Ident::new("crate", Span::call_site()),
        FoundCrate::Name(name) => Ident::new(&name, Span::call_site()),
    }
}

// jspb style object keys: `robot_config` -> `robotConfig`, `ModuleFileInfo` -> `moduleFileInfo`
pub(crate) fn to_lower_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for (i, c) in name.chars().enumerate() {
        if c == '_' {
            upper_next = i > 0;
            continue;
        }
        if out.is_empty() {
            out.extend(c.to_lowercase());
        } else if upper_next {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        upper_next = false;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::to_lower_camel;

    #[test]
    fn test_lower_camel() {
        assert_eq!(to_lower_camel("robot_config"), "robotConfig");
        assert_eq!(to_lower_camel("id"), "id");
        assert_eq!(to_lower_camel("ModuleFileInfo"), "moduleFileInfo");
        assert_eq!(to_lower_camel("File"), "file");
        assert_eq!(to_lower_camel("only_used_by_owner"), "onlyUsedByOwner");
    }
}
