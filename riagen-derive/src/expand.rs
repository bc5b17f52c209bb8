use std::str::FromStr;

use darling::{FromField, FromMeta};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use riagen::{
    EndpointRoutePattern,
    naming::{pascal_to_snake, pluralize},
};
use syn::{Field, Fields, GenericArgument, Ident, ItemStruct, LitStr, PathArguments, Result, Type};

/// The name of the entity set attribute.
const ENTITY_SET_ATTR_NAME: &str = "entity_set";

#[derive(FromMeta, Debug)]
#[darling(derive_syn_parse)]
pub(super) struct DomainContextAttr {
    /// The dotted, fully-qualified name of the domain service.
    service: LitStr,
    /// The endpoint route pattern. Defaults to [`EndpointRoutePattern::default`].
    route: Option<LitStr>,
}

impl DomainContextAttr {
    fn route_pattern(&self) -> Result<EndpointRoutePattern> {
        let Some(route) = &self.route else {
            return Ok(EndpointRoutePattern::default());
        };

        EndpointRoutePattern::from_str(&route.value())
            .map_err(|e| syn::Error::new_spanned(route, e.to_string()))
    }
}

/// The path tokens of a route pattern variant in the generated code.
fn route_pattern_tokens(pattern: EndpointRoutePattern) -> TokenStream {
    match pattern {
        EndpointRoutePattern::Name => quote! { riagen::EndpointRoutePattern::Name },
        EndpointRoutePattern::Wcf => quote! { riagen::EndpointRoutePattern::Wcf },
        EndpointRoutePattern::FullName => quote! { riagen::EndpointRoutePattern::FullName },
    }
}

#[derive(FromField)]
#[darling(attributes(entity_set))]
struct EntitySetField {
    /// The identifier of the field.
    ident: Option<Ident>,
    /// The type of the field.
    ty: Type,
    /// The set name override. Used for nouns the pluralizer gets wrong.
    rename: Option<String>,
}

/// Returns the element type of a `Vec<T>`.
fn vec_element(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };

    let last_segment = type_path.path.segments.last()?;
    if last_segment.ident != "Vec" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &last_segment.arguments else {
        return None;
    };

    match args.args.first()? {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    }
}

/// A builder that builds the accessors of an entity set from an #[entity_set] field.
struct EntitySetBuilder {
    /// The identifier of the field holding the entities.
    field: Ident,
    /// The entity type.
    entity: Type,
    /// The entity set name.
    /// = pluralized entity type name || rename.
    set_name: String,
    /// The snake_case form of the set name, used for the accessor.
    accessor: Ident,
}

impl EntitySetBuilder {
    fn try_from(field: &Field) -> Result<Self> {
        let set_field = EntitySetField::from_field(field)?;

        let ident = set_field
            .ident
            .ok_or_else(|| syn::Error::new_spanned(field, "Expected an identifier"))?;

        let entity = vec_element(&set_field.ty)
            .ok_or_else(|| {
                syn::Error::new_spanned(&set_field.ty, "Entity sets must be a `Vec<T>`")
            })?
            .clone();

        let set_name = match set_field.rename {
            Some(rename) => rename,
            None => {
                let Type::Path(entity_path) = &entity else {
                    return Err(syn::Error::new_spanned(&entity, "Expected a path type"));
                };
                let last_segment = entity_path
                    .path
                    .segments
                    .last()
                    .ok_or_else(|| syn::Error::new_spanned(&entity, "Expected a path type"))?;

                pluralize(&last_segment.ident.to_string())
            }
        };

        let accessor = syn::parse_str::<Ident>(&pascal_to_snake(&set_name)).map_err(|_| {
            syn::Error::new_spanned(
                field,
                format!("Entity set name '{set_name}' doesn't make a valid accessor name"),
            )
        })?;

        Ok(Self { field: ident, entity, set_name, accessor })
    }

    /// Build the accessor and the route function for the entity set.
    fn build_accessors(&self, vis: &syn::Visibility) -> TokenStream {
        let field = &self.field;
        let entity = &self.entity;
        let set_name = &self.set_name;
        let accessor = &self.accessor;
        let route_fn = format_ident!("{}_route", accessor);

        let accessor_doc = format!("The `{set_name}` entity set.");
        let route_doc = format!("The route of the `Get{set_name}` query.");

        quote! {
            #[doc = #accessor_doc]
            #vis fn #accessor(&self) -> &[#entity] {
                &self.#field
            }

            #[doc = #route_doc]
            #vis fn #route_fn() -> String {
                <Self as riagen::DomainContext>::query_route(#set_name)
            }
        }
    }
}

pub(crate) fn expand(
    context_attr: DomainContextAttr,
    input: &mut ItemStruct,
) -> Result<TokenStream> {
    let route_pattern = route_pattern_tokens(context_attr.route_pattern()?);
    let service = &context_attr.service;

    let Fields::Named(fields) = &mut input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Domain contexts must be structs with named fields",
        ));
    };

    let mut set_names: Vec<String> = Vec::with_capacity(fields.named.len());
    // Distinct set names can still share an accessor, e.g. `Cities` and `CITies`.
    let mut accessor_idents: Vec<Ident> = Vec::with_capacity(fields.named.len());
    let mut accessors = Vec::with_capacity(fields.named.len());

    // The visibility of the context struct
    let vis = &input.vis;

    for field in fields.named.iter_mut() {
        if !field.attrs.iter().any(|attr| attr.path().is_ident(ENTITY_SET_ATTR_NAME)) {
            continue;
        }

        let builder = EntitySetBuilder::try_from(field)?;

        if set_names.contains(&builder.set_name) {
            return Err(syn::Error::new_spanned(
                &*field,
                format!(
                    "Duplicate entity set '{}'. Use `rename` to disambiguate",
                    builder.set_name
                ),
            ));
        }

        if accessor_idents.contains(&builder.accessor) {
            return Err(syn::Error::new_spanned(
                &*field,
                format!(
                    "Entity set '{}' clashes with another set on accessor `{}`. Use `rename` to \
                     disambiguate",
                    builder.set_name, builder.accessor
                ),
            ));
        }

        accessors.push(builder.build_accessors(vis));
        accessor_idents.push(builder.accessor);
        set_names.push(builder.set_name);

        // Remove the entity set attribute from the field.
        field
            .attrs
            .retain(|attr| !attr.path().is_ident(ENTITY_SET_ATTR_NAME));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics riagen::DomainContext for #ident #ty_generics #where_clause {
            const SERVICE_NAME: &'static str = #service;
            const ROUTE_PATTERN: riagen::EndpointRoutePattern = #route_pattern;
            const ENTITY_SETS: &'static [&'static str] = &[#(#set_names),*];
        }

        impl #impl_generics #ident #ty_generics #where_clause {
            #(#accessors)*
        }
    })
}
