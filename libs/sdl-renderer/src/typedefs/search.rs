use super::{
    auth::{AuthDefinition, AuthInner, AuthRules},
    cache::{CacheDefinition, CacheInner, FieldCache},
    default::DefaultDefinition,
    enumerator::EnumDefinition,
    list::ListDefinition,
    resolver::{ResolverDefinition, ResolverInner},
    scalar::ScalarDefinition,
    unique::UniqueDefinition,
    DirectiveSet, FieldRender,
};
use std::fmt;

/// The states a search index can be attached to.
#[derive(Debug, Clone)]
pub(crate) enum SearchInner {
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
    List(ListDefinition),
    Default(DefaultDefinition),
    Unique(UniqueDefinition),
}

impl FieldRender for SearchInner {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchInner::Scalar(inner) => inner.render_type(f),
            SearchInner::Enum(inner) => inner.render_type(f),
            SearchInner::List(inner) => inner.render_type(f),
            SearchInner::Default(inner) => inner.render_type(f),
            SearchInner::Unique(inner) => inner.render_type(f),
        }
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        match self {
            SearchInner::Scalar(inner) => inner.collect(directives),
            SearchInner::Enum(inner) => inner.collect(directives),
            SearchInner::List(inner) => inner.collect(directives),
            SearchInner::Default(inner) => inner.collect(directives),
            SearchInner::Unique(inner) => inner.collect(directives),
        }
    }

    fn set_optional(&mut self) {
        match self {
            SearchInner::Scalar(inner) => inner.set_optional(),
            SearchInner::Enum(inner) => inner.set_optional(),
            SearchInner::List(inner) => inner.set_optional(),
            SearchInner::Default(inner) => inner.set_optional(),
            SearchInner::Unique(inner) => inner.set_optional(),
        }
    }
}

/// A search-indexed field, rendered as `@search`.
#[derive(Debug, Clone)]
pub struct SearchDefinition {
    inner: SearchInner,
}

impl SearchDefinition {
    pub(crate) fn new(inner: SearchInner) -> Self {
        Self { inner }
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.inner.set_optional();
        self
    }

    /// Set the field-level auth directive.
    pub fn auth(self, rules: impl FnOnce(&mut AuthRules)) -> AuthDefinition {
        AuthDefinition::new(AuthInner::Search(self), rules)
    }

    /// Attach a resolver function to the field.
    pub fn resolver(self, name: &str) -> ResolverDefinition {
        ResolverDefinition::new(ResolverInner::Search(self), name)
    }

    /// Set the field-level cache directive.
    pub fn cache(self, cache: FieldCache) -> CacheDefinition {
        CacheDefinition::new(CacheInner::Search(self), cache)
    }
}

impl FieldRender for SearchDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.render_type(f)
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        self.inner.collect(directives);
        directives.search = true;
    }

    fn set_optional(&mut self) {
        self.inner.set_optional();
    }
}

impl fmt::Display for SearchDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typedefs::ScalarType;

    #[test]
    fn renders_the_directive() {
        let field = ScalarDefinition::new(ScalarType::String).search();

        assert_eq!(field.to_string(), "String! @search");
    }

    #[test]
    fn search_on_a_list() {
        let field = ScalarDefinition::new(ScalarType::String).list().search();

        assert_eq!(field.to_string(), "[String!]! @search");
    }

    #[test]
    fn directives_render_in_canonical_order() {
        // Attached unique-then-search, rendered search-then-unique.
        let field = ScalarDefinition::new(ScalarType::String).unique().search();

        assert_eq!(field.to_string(), "String! @search @unique");
    }
}
