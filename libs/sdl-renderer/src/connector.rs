//! Connector definitions for external data sources.

mod header;
mod openapi;

pub use header::{Header, HeaderValue, Headers};
pub use openapi::{OpenApi, OpenApiTransforms, PartialOpenApi};
