use super::{
    auth::AuthDefinition,
    enumerator::EnumDefinition,
    list::ListDefinition,
    resolver::ResolverDefinition,
    scalar::ScalarDefinition,
    search::SearchDefinition,
    unique::UniqueDefinition,
    DirectiveSet, FieldRender,
};
use std::fmt;

/// Field-level cache parameters.
///
/// ```ignore
/// @cache(maxAge: 60, staleWhileRevalidate: 300)
/// //     ^^^^^^^^^^ always present
/// //                ^^^^^^^^^^^^^^^^^^^^^^^^^^ optional
/// ```
#[derive(Debug, Clone)]
pub struct FieldCache {
    max_age: u32,
    stale_while_revalidate: Option<u32>,
}

impl FieldCache {
    /// Cache the field value for the given number of seconds.
    pub fn max_age(seconds: u32) -> Self {
        Self {
            max_age: seconds,
            stale_while_revalidate: None,
        }
    }

    /// Serve the stale value for the given number of seconds while
    /// revalidating in the background.
    pub fn stale_while_revalidate(mut self, seconds: u32) -> Self {
        self.stale_while_revalidate = Some(seconds);
        self
    }
}

impl fmt::Display for FieldCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "maxAge: {}", self.max_age)?;

        if let Some(seconds) = self.stale_while_revalidate {
            write!(f, ", staleWhileRevalidate: {seconds}")?;
        }

        Ok(())
    }
}

/// The states a cache policy can be attached to.
#[derive(Debug, Clone)]
pub(crate) enum CacheInner {
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
    List(ListDefinition),
    Unique(UniqueDefinition),
    Search(SearchDefinition),
    Auth(AuthDefinition),
    Resolver(ResolverDefinition),
}

impl FieldRender for CacheInner {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheInner::Scalar(inner) => inner.render_type(f),
            CacheInner::Enum(inner) => inner.render_type(f),
            CacheInner::List(inner) => inner.render_type(f),
            CacheInner::Unique(inner) => inner.render_type(f),
            CacheInner::Search(inner) => inner.render_type(f),
            CacheInner::Auth(inner) => inner.render_type(f),
            CacheInner::Resolver(inner) => inner.render_type(f),
        }
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        match self {
            CacheInner::Scalar(inner) => inner.collect(directives),
            CacheInner::Enum(inner) => inner.collect(directives),
            CacheInner::List(inner) => inner.collect(directives),
            CacheInner::Unique(inner) => inner.collect(directives),
            CacheInner::Search(inner) => inner.collect(directives),
            CacheInner::Auth(inner) => inner.collect(directives),
            CacheInner::Resolver(inner) => inner.collect(directives),
        }
    }

    fn set_optional(&mut self) {
        match self {
            CacheInner::Scalar(inner) => inner.set_optional(),
            CacheInner::Enum(inner) => inner.set_optional(),
            CacheInner::List(inner) => inner.set_optional(),
            CacheInner::Unique(inner) => inner.set_optional(),
            CacheInner::Search(inner) => inner.set_optional(),
            CacheInner::Auth(inner) => inner.set_optional(),
            CacheInner::Resolver(inner) => inner.set_optional(),
        }
    }
}

/// A cached field, rendered as `@cache(...)`.
#[derive(Debug, Clone)]
pub struct CacheDefinition {
    inner: CacheInner,
    cache: FieldCache,
}

impl CacheDefinition {
    pub(crate) fn new(inner: CacheInner, cache: FieldCache) -> Self {
        Self { inner, cache }
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.inner.set_optional();
        self
    }
}

impl FieldRender for CacheDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.render_type(f)
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        self.inner.collect(directives);
        directives.cache = Some(&self.cache);
    }

    fn set_optional(&mut self) {
        self.inner.set_optional();
    }
}

impl fmt::Display for CacheDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typedefs::ScalarType;

    #[test]
    fn max_age_only() {
        let field = ScalarDefinition::new(ScalarType::String).cache(FieldCache::max_age(60));

        assert_eq!(field.to_string(), "String! @cache(maxAge: 60)");
    }

    #[test]
    fn with_stale_while_revalidate() {
        let field = ScalarDefinition::new(ScalarType::String)
            .cache(FieldCache::max_age(60).stale_while_revalidate(300));

        assert_eq!(
            field.to_string(),
            "String! @cache(maxAge: 60, staleWhileRevalidate: 300)"
        );
    }

    #[test]
    fn cached_field_can_still_be_optional() {
        let field = ScalarDefinition::new(ScalarType::String)
            .cache(FieldCache::max_age(60))
            .optional();

        assert_eq!(field.to_string(), "String @cache(maxAge: 60)");
    }

    #[test]
    fn cache_renders_last() {
        let field = ScalarDefinition::new(ScalarType::String)
            .cache(FieldCache::max_age(10))
            .optional();

        let authed = ScalarDefinition::new(ScalarType::String)
            .auth(|rules| {
                rules.private();
            })
            .cache(FieldCache::max_age(10));

        assert_eq!(field.to_string(), "String @cache(maxAge: 10)");
        assert_eq!(
            authed.to_string(),
            "String! @auth(rules: [ { allow: private } ]) @cache(maxAge: 10)"
        );
    }
}
