//! Naming utilities and metadata types for generating domain-service client code.
//! - [`pluralize`]: turns an entity type name into its entity set name.
//! - [`EndpointRoutePattern`]: lays out endpoint routes of a domain service.
//! - [`CodeGeneratorMetadata`]: the contract every code generator implements.
//! - [`DomainContext`]: implemented by contexts generated with `riagen-derive`.

mod context;
mod generator;
pub mod naming;
mod platform;
mod route;

pub use context::DomainContext;
pub use generator::CodeGeneratorMetadata;
pub use naming::pluralize;
#[allow(deprecated)]
pub use platform::{ParsePlatformError, TargetPlatform};
pub use route::{EndpointRoutePattern, ParseRoutePatternError};
