use super::header::{Header, Headers};
use crate::{error::Error, value::Text};
use std::fmt;

/// How the connector derives GraphQL query names from the OpenAPI
/// schema.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpenApiTransforms {
    /// Name queries after the OpenAPI `operationId`.
    OperationId,
    /// Name queries after the schema component names.
    SchemaName,
}

impl fmt::Display for OpenApiTransforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenApiTransforms::OperationId => f.write_str("OPERATION_ID"),
            OpenApiTransforms::SchemaName => f.write_str("SCHEMA_NAME"),
        }
    }
}

/// An OpenAPI connector before namespacing. Captures everything except
/// the namespace; only [`PartialOpenApi::finalize`] produces a
/// renderable connector. One partial can be finalized any number of
/// times.
#[derive(Debug, Clone)]
pub struct PartialOpenApi {
    schema: String,
    url: Option<String>,
    transforms: Option<OpenApiTransforms>,
    headers: Headers,
}

impl PartialOpenApi {
    /// Capture the mandatory schema reference: a URL or a path to the
    /// OpenAPI document.
    pub fn new(schema: &str) -> Result<Self, Error> {
        if schema.trim().is_empty() {
            return Err(Error::MissingSchema);
        }

        Ok(Self {
            schema: schema.to_owned(),
            url: None,
            transforms: None,
            headers: Headers::default(),
        })
    }

    /// Override the API base URL from the one the schema declares.
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_owned());
        self
    }

    /// Set the query naming strategy.
    pub fn transforms(mut self, transforms: OpenApiTransforms) -> Self {
        self.transforms = Some(transforms);
        self
    }

    /// Populate the header lists. The closure is invoked exactly once,
    /// synchronously, against the connector's collector.
    pub fn headers(mut self, configure: impl FnOnce(&mut Headers)) -> Self {
        configure(&mut self.headers);
        self
    }

    /// Produce a renderable connector under the given namespace. The
    /// partial is left untouched and can be finalized again.
    pub fn finalize(&self, namespace: &str) -> OpenApi {
        OpenApi {
            namespace: namespace.to_owned(),
            schema: self.schema.clone(),
            url: self.url.clone(),
            transforms: self.transforms,
            headers: self.headers.headers.clone(),
            introspection_headers: self.headers.introspection_headers.clone(),
        }
    }
}

/// A finalized, namespaced OpenAPI connector, rendered as an
/// `@openapi(...)` directive block.
#[derive(Debug, Clone)]
pub struct OpenApi {
    namespace: String,
    schema: String,
    url: Option<String>,
    transforms: Option<OpenApiTransforms>,
    headers: Vec<Header>,
    introspection_headers: Vec<Header>,
}

impl fmt::Display for OpenApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("  @openapi(\n")?;

        if !self.namespace.is_empty() {
            writeln!(f, "    name: {}", Text(&self.namespace))?;
        }

        if let Some(url) = &self.url {
            writeln!(f, "    url: {}", Text(url))?;
        }

        writeln!(f, "    schema: {}", Text(&self.schema))?;

        if let Some(transforms) = self.transforms {
            writeln!(f, "    transforms: {{ queryNaming: {transforms} }}")?;
        }

        // Each header block is gated on its own content only.
        for (key, headers) in [
            ("headers", &self.headers),
            ("introspectionHeaders", &self.introspection_headers),
        ] {
            if headers.is_empty() {
                continue;
            }

            writeln!(f, "    {key}: [")?;

            for header in headers {
                writeln!(f, "      {header}")?;
            }

            f.write_str("    ]\n")?;
        }

        f.write_str("  )")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::HeaderValue;

    #[test]
    fn schema_is_mandatory() {
        assert_eq!(PartialOpenApi::new("").unwrap_err(), Error::MissingSchema);
        assert_eq!(PartialOpenApi::new("   ").unwrap_err(), Error::MissingSchema);
    }

    #[test]
    fn minimal_connector() {
        let connector = PartialOpenApi::new("./schema.json")
            .unwrap()
            .url("https://api.example.com")
            .finalize("Stripe");

        // Every line keeps the base indentation of the directive block.
        let expected = r#"  @openapi(
    name: "Stripe"
    url: "https://api.example.com"
    schema: "./schema.json"
  )"#;

        assert_eq!(connector.to_string(), expected);
    }

    #[test]
    fn full_connector() {
        let connector = PartialOpenApi::new("https://api.example.com/openapi.json")
            .unwrap()
            .url("https://api.example.com")
            .transforms(OpenApiTransforms::OperationId)
            .headers(|headers| {
                headers.push_header("X-Api-Key", "hello");
                headers.push_header("Authorization", HeaderValue::forward("Authorization"));
                headers.push_introspection_header("X-Introspection", "on");
            })
            .finalize("Example");

        let expected = r#"  @openapi(
    name: "Example"
    url: "https://api.example.com"
    schema: "https://api.example.com/openapi.json"
    transforms: { queryNaming: OPERATION_ID }
    headers: [
      { name: "X-Api-Key", value: "hello" }
      { name: "Authorization", forward: "Authorization" }
    ]
    introspectionHeaders: [
      { name: "X-Introspection", value: "on" }
    ]
  )"#;

        assert_eq!(connector.to_string(), expected);
    }

    #[test]
    fn introspection_headers_do_not_depend_on_runtime_headers() {
        let connector = PartialOpenApi::new("./schema.json")
            .unwrap()
            .headers(|headers| {
                headers.push_introspection_header("X-Introspection", "on");
            })
            .finalize("Example");

        let expected = r#"  @openapi(
    name: "Example"
    schema: "./schema.json"
    introspectionHeaders: [
      { name: "X-Introspection", value: "on" }
    ]
  )"#;

        assert_eq!(connector.to_string(), expected);
    }

    #[test]
    fn one_partial_finalizes_many_namespaces() {
        let partial = PartialOpenApi::new("./schema.json").unwrap();

        let first = partial.finalize("First").to_string();
        let second = partial.finalize("Second").to_string();

        assert_eq!(first.replace("First", "Second"), second);
    }

    #[test]
    fn empty_namespace_omits_the_name_argument() {
        let connector = PartialOpenApi::new("./schema.json").unwrap().finalize("");

        let expected = r#"  @openapi(
    schema: "./schema.json"
  )"#;

        assert_eq!(connector.to_string(), expected);
    }
}
