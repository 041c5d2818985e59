use super::{
    auth::{AuthDefinition, AuthInner, AuthRules},
    cache::{CacheDefinition, CacheInner, FieldCache},
    default::DefaultDefinition,
    enumerator::EnumDefinition,
    scalar::ScalarDefinition,
    search::{SearchDefinition, SearchInner},
    DirectiveSet, FieldRender,
};
use crate::{error::Error, value::Constant};
use std::fmt;

/// The states a uniqueness constraint can be attached to.
#[derive(Debug, Clone)]
pub(crate) enum UniqueInner {
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
    Default(DefaultDefinition),
}

impl FieldRender for UniqueInner {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueInner::Scalar(inner) => inner.render_type(f),
            UniqueInner::Enum(inner) => inner.render_type(f),
            UniqueInner::Default(inner) => inner.render_type(f),
        }
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        match self {
            UniqueInner::Scalar(inner) => inner.collect(directives),
            UniqueInner::Enum(inner) => inner.collect(directives),
            UniqueInner::Default(inner) => inner.collect(directives),
        }
    }

    fn set_optional(&mut self) {
        match self {
            UniqueInner::Scalar(inner) => inner.set_optional(),
            UniqueInner::Enum(inner) => inner.set_optional(),
            UniqueInner::Default(inner) => inner.set_optional(),
        }
    }
}

/// A unique field. An empty scope renders `@unique`; a non-empty one a
/// composite constraint over this field and the scope fields.
#[derive(Debug, Clone)]
pub struct UniqueDefinition {
    inner: UniqueInner,
    scope: Vec<Constant>,
}

impl UniqueDefinition {
    pub(crate) fn new(inner: UniqueInner) -> Self {
        Self {
            inner,
            scope: Vec::new(),
        }
    }

    pub(crate) fn with_scope<'a>(
        inner: UniqueInner,
        scope: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, Error> {
        let mut fields = Vec::new();

        for name in scope {
            let field = Constant::new(name)?;

            if fields.contains(&field) {
                return Err(Error::DuplicateScopeField(name.to_owned()));
            }

            fields.push(field);
        }

        Ok(Self { inner, scope: fields })
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.inner.set_optional();
        self
    }

    /// Make the field searchable.
    pub fn search(self) -> SearchDefinition {
        SearchDefinition::new(SearchInner::Unique(self))
    }

    /// Set the field-level auth directive.
    pub fn auth(self, rules: impl FnOnce(&mut AuthRules)) -> AuthDefinition {
        AuthDefinition::new(AuthInner::Unique(self), rules)
    }

    /// Set the field-level cache directive.
    pub fn cache(self, cache: FieldCache) -> CacheDefinition {
        CacheDefinition::new(CacheInner::Unique(self), cache)
    }
}

impl FieldRender for UniqueDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.render_type(f)
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        self.inner.collect(directives);
        directives.unique = Some(&self.scope);
    }

    fn set_optional(&mut self) {
        self.inner.set_optional();
    }
}

impl fmt::Display for UniqueDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typedefs::ScalarType;

    #[test]
    fn single_field_uniqueness() {
        let field = ScalarDefinition::new(ScalarType::Email).unique();

        assert_eq!(field.to_string(), "Email! @unique");
    }

    #[test]
    fn composite_scope() {
        let field = ScalarDefinition::new(ScalarType::String)
            .unique_scope(["color", "size"])
            .unwrap();

        assert_eq!(field.to_string(), r#"String! @unique(fields: ["color", "size"])"#);
    }

    #[test]
    fn duplicate_scope_fields_are_rejected() {
        let err = ScalarDefinition::new(ScalarType::String)
            .unique_scope(["color", "color"])
            .unwrap_err();

        assert_eq!(err, Error::DuplicateScopeField("color".to_string()));
    }

    #[test]
    fn scope_names_are_validated() {
        let err = ScalarDefinition::new(ScalarType::String)
            .unique_scope(["ok", "not ok"])
            .unwrap_err();

        assert_eq!(err, Error::InvalidIdentifier("not ok".to_string()));
    }

    #[test]
    fn unique_after_default() {
        let field = ScalarDefinition::new(ScalarType::String)
            .default("S")
            .unwrap()
            .unique();

        assert_eq!(field.to_string(), r#"String! @unique @default(value: "S")"#);
    }
}
