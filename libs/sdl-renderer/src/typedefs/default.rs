use super::{
    auth::{AuthDefinition, AuthInner, AuthRules},
    enumerator::EnumDefinition,
    scalar::{ScalarDefinition, ScalarType},
    search::{SearchDefinition, SearchInner},
    unique::{UniqueDefinition, UniqueInner},
    DirectiveSet, FieldRender,
};
use crate::{
    error::Error,
    value::{Constant, Text},
};
use std::fmt;

/// A default value for a scalar field.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// A string literal, quoted in the output.
    String(String),
    /// An integer literal.
    Int(i64),
    /// A floating point literal.
    Float(f64),
    /// A boolean literal.
    Boolean(bool),
}

impl DefaultValue {
    /// Whether the value belongs to the domain of the given scalar.
    fn fits(&self, scalar: ScalarType) -> bool {
        match self {
            DefaultValue::String(_) => matches!(
                scalar,
                ScalarType::String
                    | ScalarType::Id
                    | ScalarType::Date
                    | ScalarType::DateTime
                    | ScalarType::Email
                    | ScalarType::IpAddress
                    | ScalarType::Url
                    | ScalarType::Json
                    | ScalarType::PhoneNumber
            ),
            DefaultValue::Int(_) => matches!(scalar, ScalarType::Int | ScalarType::Timestamp),
            DefaultValue::Float(_) => matches!(scalar, ScalarType::Float),
            DefaultValue::Boolean(_) => matches!(scalar, ScalarType::Boolean),
        }
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::String(s) => Text(s).fmt(f),
            DefaultValue::Int(i) => i.fmt(f),
            DefaultValue::Float(v) => v.fmt(f),
            DefaultValue::Boolean(b) => b.fmt(f),
        }
    }
}

/// What ends up inside `@default(value: ...)`: a scalar literal, or a
/// bare enum variant.
#[derive(Debug, Clone)]
pub(crate) enum DefaultPayload {
    Value(DefaultValue),
    Variant(Constant),
}

impl fmt::Display for DefaultPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultPayload::Value(value) => value.fmt(f),
            DefaultPayload::Variant(variant) => variant.fmt(f),
        }
    }
}

/// The leaves a default can be attached to.
#[derive(Debug, Clone)]
pub(crate) enum DefaultInner {
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
}

impl FieldRender for DefaultInner {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultInner::Scalar(inner) => inner.render_type(f),
            DefaultInner::Enum(inner) => inner.render_type(f),
        }
    }

    fn collect<'a>(&'a self, _directives: &mut DirectiveSet<'a>) {}

    fn set_optional(&mut self) {
        match self {
            DefaultInner::Scalar(inner) => inner.set_optional(),
            DefaultInner::Enum(inner) => inner.set_optional(),
        }
    }
}

/// A field with a default value, rendered as `@default(value: ...)`.
/// The value's membership in the field's domain was checked when the
/// wrapper was constructed.
#[derive(Debug, Clone)]
pub struct DefaultDefinition {
    inner: DefaultInner,
    value: DefaultPayload,
}

impl DefaultDefinition {
    pub(crate) fn scalar(definition: ScalarDefinition, value: DefaultValue) -> Result<Self, Error> {
        if !value.fits(definition.scalar()) {
            return Err(Error::InvalidDefaultValue(value.to_string()));
        }

        Ok(Self {
            inner: DefaultInner::Scalar(definition),
            value: DefaultPayload::Value(value),
        })
    }

    pub(crate) fn enumeration(definition: EnumDefinition, variant: &str) -> Result<Self, Error> {
        let variant = definition
            .variant(variant)
            .cloned()
            .ok_or_else(|| Error::InvalidDefaultValue(variant.to_owned()))?;

        Ok(Self {
            inner: DefaultInner::Enum(definition),
            value: DefaultPayload::Variant(variant),
        })
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.inner.set_optional();
        self
    }

    /// Make the field unique.
    pub fn unique(self) -> UniqueDefinition {
        UniqueDefinition::new(UniqueInner::Default(self))
    }

    /// Make the field unique together with the given additional fields.
    pub fn unique_scope<'a>(self, scope: impl IntoIterator<Item = &'a str>) -> Result<UniqueDefinition, Error> {
        UniqueDefinition::with_scope(UniqueInner::Default(self), scope)
    }

    /// Make the field searchable.
    pub fn search(self) -> SearchDefinition {
        SearchDefinition::new(SearchInner::Default(self))
    }

    /// Set the field-level auth directive.
    pub fn auth(self, rules: impl FnOnce(&mut AuthRules)) -> AuthDefinition {
        AuthDefinition::new(AuthInner::Default(self), rules)
    }
}

impl FieldRender for DefaultDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.render_type(f)
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        self.inner.collect(directives);
        directives.default = Some(&self.value);
    }

    fn set_optional(&mut self) {
        self.inner.set_optional();
    }
}

impl fmt::Display for DefaultDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_default() {
        let field = ScalarDefinition::new(ScalarType::String).default("meow").unwrap();

        assert_eq!(field.to_string(), r#"String! @default(value: "meow")"#);
    }

    #[test]
    fn numeric_and_boolean_defaults() {
        let count = ScalarDefinition::new(ScalarType::Int).default(3).unwrap();
        let ratio = ScalarDefinition::new(ScalarType::Float).default(1.5).unwrap();
        let flag = ScalarDefinition::new(ScalarType::Boolean).default(false).unwrap();

        assert_eq!(count.to_string(), "Int! @default(value: 3)");
        assert_eq!(ratio.to_string(), "Float! @default(value: 1.5)");
        assert_eq!(flag.to_string(), "Boolean! @default(value: false)");
    }

    #[test]
    fn value_outside_the_scalar_domain() {
        let err = ScalarDefinition::new(ScalarType::Int).default("nope").unwrap_err();

        assert_eq!(err, Error::InvalidDefaultValue("\"nope\"".to_string()));
    }

    #[test]
    fn optional_applies_to_the_type_reference() {
        let field = ScalarDefinition::new(ScalarType::String)
            .default("meow")
            .unwrap()
            .optional();

        assert_eq!(field.to_string(), r#"String @default(value: "meow")"#);
    }
}
