use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

use crate::expand::DomainContextAttr;

mod expand;
mod generator;

/// This macro turns a struct of `#[entity_set]` collections into a domain context.
///
/// Every `#[entity_set]` field gets an accessor named after the pluralized entity type and a
/// function returning its query route. The struct implements `riagen::DomainContext`.
#[proc_macro_attribute]
pub fn domain_context(attr: TokenStream, item: TokenStream) -> TokenStream {
    // NOTE: We use `proc_macro_attribute` here because the `entity_set` field attributes have to be
    // stripped from the struct.
    let mut input = parse_macro_input!(item as ItemStruct);

    let attributes: DomainContextAttr = match syn::parse(attr) {
        Ok(v) => v,
        Err(e) => {
            return e.to_compile_error().into();
        }
    };

    expand::expand(attributes, &mut input)
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}

/// This macro implements `riagen::CodeGeneratorMetadata` from a `#[code_generator]` attribute.
#[proc_macro_derive(CodeGenerator, attributes(code_generator))]
pub fn derive_code_generator(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    generator::expand(&input)
        .unwrap_or_else(|err| err.write_errors())
        .into()
}
