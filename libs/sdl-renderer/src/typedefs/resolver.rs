use super::{
    auth::AuthDefinition,
    cache::{CacheDefinition, CacheInner, FieldCache},
    enumerator::EnumDefinition,
    list::ListDefinition,
    reference::ReferenceDefinition,
    scalar::ScalarDefinition,
    search::SearchDefinition,
    DirectiveSet, FieldRender,
};
use std::fmt;

/// The states a resolver can be attached to.
#[derive(Debug, Clone)]
pub(crate) enum ResolverInner {
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
    Reference(ReferenceDefinition),
    List(ListDefinition),
    Search(SearchDefinition),
    Auth(AuthDefinition),
}

impl FieldRender for ResolverInner {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverInner::Scalar(inner) => inner.render_type(f),
            ResolverInner::Enum(inner) => inner.render_type(f),
            ResolverInner::Reference(inner) => inner.render_type(f),
            ResolverInner::List(inner) => inner.render_type(f),
            ResolverInner::Search(inner) => inner.render_type(f),
            ResolverInner::Auth(inner) => inner.render_type(f),
        }
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        match self {
            ResolverInner::Scalar(inner) => inner.collect(directives),
            ResolverInner::Enum(inner) => inner.collect(directives),
            ResolverInner::Reference(inner) => inner.collect(directives),
            ResolverInner::List(inner) => inner.collect(directives),
            ResolverInner::Search(inner) => inner.collect(directives),
            ResolverInner::Auth(inner) => inner.collect(directives),
        }
    }

    fn set_optional(&mut self) {
        match self {
            ResolverInner::Scalar(inner) => inner.set_optional(),
            ResolverInner::Enum(inner) => inner.set_optional(),
            ResolverInner::Reference(inner) => inner.set_optional(),
            ResolverInner::List(inner) => inner.set_optional(),
            ResolverInner::Search(inner) => inner.set_optional(),
            ResolverInner::Auth(inner) => inner.set_optional(),
        }
    }
}

/// A field backed by a custom resolver function, rendered as
/// `@resolver(name: "...")`. The name is the resolver file without the
/// extension, so it is not identifier-validated.
#[derive(Debug, Clone)]
pub struct ResolverDefinition {
    inner: ResolverInner,
    resolver: String,
}

impl ResolverDefinition {
    pub(crate) fn new(inner: ResolverInner, resolver: &str) -> Self {
        Self {
            inner,
            resolver: resolver.to_owned(),
        }
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.inner.set_optional();
        self
    }

    /// Set the field-level cache directive.
    pub fn cache(self, cache: FieldCache) -> CacheDefinition {
        CacheDefinition::new(CacheInner::Resolver(self), cache)
    }
}

impl FieldRender for ResolverDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.render_type(f)
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        self.inner.collect(directives);
        directives.resolver = Some(&self.resolver);
    }

    fn set_optional(&mut self) {
        self.inner.set_optional();
    }
}

impl fmt::Display for ResolverDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typedefs::ScalarType;

    #[test]
    fn renders_the_resolver_name() {
        let field = ScalarDefinition::new(ScalarType::String).resolver("user/fullName");

        assert_eq!(field.to_string(), r#"String! @resolver(name: "user/fullName")"#);
    }

    #[test]
    fn resolver_then_optional() {
        let field = ScalarDefinition::new(ScalarType::String)
            .resolver("user/fullName")
            .optional();

        assert_eq!(field.to_string(), r#"String @resolver(name: "user/fullName")"#);
    }
}
