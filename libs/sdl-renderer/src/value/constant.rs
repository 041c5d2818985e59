use crate::error::Error;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The GraphQL `Name` production.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// An unquoted identifier, guaranteed to be renderable as a GraphQL
/// name. Construction is the only place in the crate where names are
/// validated; rendering never fails afterwards.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Constant(String);

impl Constant {
    /// Validate the given name, failing with [`Error::InvalidIdentifier`]
    /// if it does not match the GraphQL `Name` production.
    pub(crate) fn new(name: &str) -> Result<Self, Error> {
        if NAME_RE.is_match(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(Error::InvalidIdentifier(name.to_owned()))
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Constant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
