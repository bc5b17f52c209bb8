use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, LitStr};

#[derive(FromDeriveInput)]
#[darling(attributes(code_generator))]
struct CodeGeneratorInput {
    ident: Ident,
    generics: Generics,
    /// The generator name. Defaults to the type identifier.
    name: Option<LitStr>,
    /// The language of the emitted code.
    language: LitStr,
}

pub(crate) fn expand(input: &DeriveInput) -> darling::Result<TokenStream> {
    let generator = CodeGeneratorInput::from_derive_input(input)?;

    if generator.language.value().trim().is_empty() {
        return Err(darling::Error::custom("The generator language must not be empty")
            .with_span(&generator.language));
    }

    let name = match &generator.name {
        Some(name) if name.value().trim().is_empty() => {
            return Err(
                darling::Error::custom("The generator name must not be empty").with_span(name)
            );
        }
        Some(name) => name.value(),
        None => generator.ident.to_string(),
    };

    let ident = &generator.ident;
    let language = &generator.language;
    let (impl_generics, ty_generics, where_clause) = generator.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics riagen::CodeGeneratorMetadata for #ident #ty_generics #where_clause {
            fn generator_name(&self) -> &'static str {
                #name
            }

            fn language(&self) -> &'static str {
                #language
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_err(input: DeriveInput) -> String {
        expand(&input).unwrap_err().to_string()
    }

    #[test]
    fn test_expand_defaults_name_to_ident() {
        let input = syn::parse_quote! {
            #[code_generator(language = "C#")]
            struct CSharpGenerator;
        };

        let output = expand(&input).unwrap().to_string();

        assert!(output.contains("CodeGeneratorMetadata for CSharpGenerator"));
        assert!(output.contains("\"CSharpGenerator\""));
        assert!(output.contains("\"C#\""));
    }

    #[test]
    fn test_expand_requires_language() {
        let input = syn::parse_quote! {
            #[code_generator(name = "CSharp")]
            struct CSharpGenerator;
        };

        assert!(expand_err(input).contains("language"));
    }

    #[test]
    fn test_expand_rejects_empty_language() {
        let input = syn::parse_quote! {
            #[code_generator(language = "  ")]
            struct CSharpGenerator;
        };

        assert_eq!(expand_err(input), "The generator language must not be empty");
    }

    #[test]
    fn test_expand_rejects_empty_name() {
        let input = syn::parse_quote! {
            #[code_generator(name = "", language = "C#")]
            struct CSharpGenerator;
        };

        assert_eq!(expand_err(input), "The generator name must not be empty");
    }
}
