//! A set of datastructures meant for rendering a GraphQL backend
//! schema description as SDL text fragments: field type definitions,
//! `extend type Query` / `extend type Mutation` blocks, and connector
//! directives. Assembling the fragments into one document is left to
//! the caller.
//!
//! All structs implement `std::fmt::Display` for easy usage. Validation
//! happens when the objects are built; rendering a built object never
//! fails and has no side effects.

#![warn(missing_docs)]

mod common;
mod connector;
mod error;
mod query;
mod typedefs;
mod value;

pub use connector::{Header, HeaderValue, Headers, OpenApi, OpenApiTransforms, PartialOpenApi};
pub use error::Error;
pub use query::{InputType, OutputType, Query, QueryArgument, QueryType};
pub use typedefs::{
    AuthDefinition, AuthRule, AuthRules, CacheDefinition, DefaultDefinition, DefaultValue, Enum,
    EnumDefinition, FieldCache, ListDefinition, ReferenceDefinition, ResolverDefinition,
    ScalarDefinition, ScalarType, SearchDefinition, UniqueDefinition,
};
