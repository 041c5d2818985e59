use crate::value::Text;
use std::fmt;

/// What a header carries: a literal value, or the instruction to
/// forward the named header from the client request.
#[derive(Debug, Clone)]
pub enum HeaderValue {
    /// A literal header value.
    Static(String),
    /// Forward the named header from the incoming request.
    Forward(String),
}

impl HeaderValue {
    /// Forward the named client header instead of sending a literal
    /// value.
    pub fn forward(header: &str) -> Self {
        Self::Forward(header.to_owned())
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::Static(value.to_owned())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::Static(value)
    }
}

/// A single HTTP header entry in a connector directive.
///
/// ```ignore
/// { name: "X-Api-Key", value: "hello" }
/// ```
#[derive(Debug, Clone)]
pub struct Header {
    name: String,
    value: HeaderValue,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            HeaderValue::Static(value) => {
                write!(f, "{{ name: {}, value: {} }}", Text(&self.name), Text(value))
            }
            HeaderValue::Forward(header) => {
                write!(f, "{{ name: {}, forward: {} }}", Text(&self.name), Text(header))
            }
        }
    }
}

/// The collector handed to a connector's header closure. Runtime and
/// introspection headers are independent ordered lists.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    pub(crate) headers: Vec<Header>,
    pub(crate) introspection_headers: Vec<Header>,
}

impl Headers {
    /// Append a header sent on every request to the upstream API.
    pub fn push_header(&mut self, name: &str, value: impl Into<HeaderValue>) {
        self.headers.push(Header {
            name: name.to_owned(),
            value: value.into(),
        });
    }

    /// Append a header sent only while introspecting the upstream
    /// schema.
    pub fn push_introspection_header(&mut self, name: &str, value: impl Into<HeaderValue>) {
        self.introspection_headers.push(Header {
            name: name.to_owned(),
            value: value.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_value() {
        let mut headers = Headers::default();
        headers.push_header("X-Api-Key", "hello");

        assert_eq!(
            headers.headers[0].to_string(),
            r#"{ name: "X-Api-Key", value: "hello" }"#
        );
    }

    #[test]
    fn forwarded_value() {
        let mut headers = Headers::default();
        headers.push_header("Authorization", HeaderValue::forward("Authorization"));

        assert_eq!(
            headers.headers[0].to_string(),
            r#"{ name: "Authorization", forward: "Authorization" }"#
        );
    }

    #[test]
    fn the_two_lists_are_independent() {
        let mut headers = Headers::default();
        headers.push_introspection_header("X-Introspection", "on");

        assert!(headers.headers.is_empty());
        assert_eq!(headers.introspection_headers.len(), 1);
    }
}
