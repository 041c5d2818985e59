use super::{
    auth::{AuthDefinition, AuthInner, AuthRules},
    cache::{CacheDefinition, CacheInner, FieldCache},
    default::{DefaultDefinition, DefaultValue},
    list::{ListDefinition, ListInner},
    resolver::{ResolverDefinition, ResolverInner},
    search::{SearchDefinition, SearchInner},
    unique::{UniqueDefinition, UniqueInner},
    DirectiveSet, FieldRender,
};
use crate::error::Error;
use std::fmt;

/// The scalar kinds the backend platform supports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarType {
    /// A UTF-8 string.
    String,
    /// An opaque identifier, rendered as `ID`.
    Id,
    /// A signed integer.
    Int,
    /// A signed floating point number.
    Float,
    /// A true/false value.
    Boolean,
    /// An RFC 3339 calendar date.
    Date,
    /// An RFC 3339 date and time.
    DateTime,
    /// An RFC 5322 email address.
    Email,
    /// An IPv4 or IPv6 address, rendered as `IPAddress`.
    IpAddress,
    /// A Unix timestamp in milliseconds.
    Timestamp,
    /// An RFC 3986 URL, rendered as `URL`.
    Url,
    /// An arbitrary JSON document, rendered as `JSON`.
    Json,
    /// An E.164 phone number.
    PhoneNumber,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::String => f.write_str("String"),
            ScalarType::Id => f.write_str("ID"),
            ScalarType::Int => f.write_str("Int"),
            ScalarType::Float => f.write_str("Float"),
            ScalarType::Boolean => f.write_str("Boolean"),
            ScalarType::Date => f.write_str("Date"),
            ScalarType::DateTime => f.write_str("DateTime"),
            ScalarType::Email => f.write_str("Email"),
            ScalarType::IpAddress => f.write_str("IPAddress"),
            ScalarType::Timestamp => f.write_str("Timestamp"),
            ScalarType::Url => f.write_str("URL"),
            ScalarType::Json => f.write_str("JSON"),
            ScalarType::PhoneNumber => f.write_str("PhoneNumber"),
        }
    }
}

/// A scalar field type, the most common chain leaf.
///
/// ```ignore
/// name: String! @unique
/// //    ^^^^^^^ this
/// ```
#[derive(Debug, Clone)]
pub struct ScalarDefinition {
    scalar: ScalarType,
    is_optional: bool,
}

impl ScalarDefinition {
    /// Create a new required scalar field type.
    pub fn new(scalar: ScalarType) -> Self {
        Self {
            scalar,
            is_optional: false,
        }
    }

    pub(crate) fn scalar(&self) -> ScalarType {
        self.scalar
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Allow multiple values of the scalar in the field.
    pub fn list(self) -> ListDefinition {
        ListDefinition::new(ListInner::Scalar(self))
    }

    /// Set the default value of the field. The value must belong to the
    /// scalar's own domain.
    pub fn default(self, value: impl Into<DefaultValue>) -> Result<DefaultDefinition, Error> {
        DefaultDefinition::scalar(self, value.into())
    }

    /// Make the field unique.
    pub fn unique(self) -> UniqueDefinition {
        UniqueDefinition::new(UniqueInner::Scalar(self))
    }

    /// Make the field unique together with the given additional fields.
    pub fn unique_scope<'a>(self, scope: impl IntoIterator<Item = &'a str>) -> Result<UniqueDefinition, Error> {
        UniqueDefinition::with_scope(UniqueInner::Scalar(self), scope)
    }

    /// Make the field searchable.
    pub fn search(self) -> SearchDefinition {
        SearchDefinition::new(SearchInner::Scalar(self))
    }

    /// Set the field-level auth directive.
    pub fn auth(self, rules: impl FnOnce(&mut AuthRules)) -> AuthDefinition {
        AuthDefinition::new(AuthInner::Scalar(self), rules)
    }

    /// Attach a resolver function to the field.
    pub fn resolver(self, name: &str) -> ResolverDefinition {
        ResolverDefinition::new(ResolverInner::Scalar(self), name)
    }

    /// Set the field-level cache directive.
    pub fn cache(self, cache: FieldCache) -> CacheDefinition {
        CacheDefinition::new(CacheInner::Scalar(self), cache)
    }
}

impl FieldRender for ScalarDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scalar)?;

        if !self.is_optional {
            f.write_str("!")?;
        }

        Ok(())
    }

    fn collect<'a>(&'a self, _directives: &mut DirectiveSet<'a>) {}

    fn set_optional(&mut self) {
        self.is_optional = true;
    }
}

impl fmt::Display for ScalarDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}
