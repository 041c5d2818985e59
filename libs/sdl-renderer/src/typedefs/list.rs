use super::{
    auth::{AuthDefinition, AuthInner, AuthRules},
    cache::{CacheDefinition, CacheInner, FieldCache},
    enumerator::EnumDefinition,
    reference::ReferenceDefinition,
    resolver::{ResolverDefinition, ResolverInner},
    scalar::ScalarDefinition,
    search::{SearchDefinition, SearchInner},
    DirectiveSet, FieldRender,
};
use std::fmt;

/// The leaves a list can be made of. Lists do not nest.
#[derive(Debug, Clone)]
pub(crate) enum ListInner {
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
    Reference(ReferenceDefinition),
}

impl FieldRender for ListInner {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListInner::Scalar(inner) => inner.render_type(f),
            ListInner::Enum(inner) => inner.render_type(f),
            ListInner::Reference(inner) => inner.render_type(f),
        }
    }

    fn collect<'a>(&'a self, _directives: &mut DirectiveSet<'a>) {}

    fn set_optional(&mut self) {
        match self {
            ListInner::Scalar(inner) => inner.set_optional(),
            ListInner::Enum(inner) => inner.set_optional(),
            ListInner::Reference(inner) => inner.set_optional(),
        }
    }
}

/// A list field type. The list's own required marker is independent of
/// the element's: `String.optional().list()` is a required list of
/// optional strings, `String.list().optional()` an optional list of
/// required ones.
#[derive(Debug, Clone)]
pub struct ListDefinition {
    inner: ListInner,
    is_optional: bool,
}

impl ListDefinition {
    pub(crate) fn new(inner: ListInner) -> Self {
        Self {
            inner,
            is_optional: false,
        }
    }

    /// Set the list itself optional. The element type is not affected.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Make the field searchable.
    pub fn search(self) -> SearchDefinition {
        SearchDefinition::new(SearchInner::List(self))
    }

    /// Set the field-level auth directive.
    pub fn auth(self, rules: impl FnOnce(&mut AuthRules)) -> AuthDefinition {
        AuthDefinition::new(AuthInner::List(self), rules)
    }

    /// Attach a resolver function to the field.
    pub fn resolver(self, name: &str) -> ResolverDefinition {
        ResolverDefinition::new(ResolverInner::List(self), name)
    }

    /// Set the field-level cache directive.
    pub fn cache(self, cache: FieldCache) -> CacheDefinition {
        CacheDefinition::new(CacheInner::List(self), cache)
    }
}

impl FieldRender for ListDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        self.inner.render_type(f)?;
        f.write_str("]")?;

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

impl fmt::Display for ListDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typedefs::ScalarType;

    #[test]
    fn wraps_the_element_type_in_brackets() {
        let list = ScalarDefinition::new(ScalarType::String).list();

        assert_eq!(list.to_string(), "[String!]!");
    }

    #[test]
    fn element_and_list_optionality_are_independent() {
        let optional_elements = ScalarDefinition::new(ScalarType::String).optional().list();
        let optional_list = ScalarDefinition::new(ScalarType::String).list().optional();

        assert_eq!(optional_elements.to_string(), "[String]!");
        assert_eq!(optional_list.to_string(), "[String!]");
    }

    #[test]
    fn reference_lists() {
        let posts = ReferenceDefinition::new("Post").unwrap().optional().list().optional();

        assert_eq!(posts.to_string(), "[Post]");
    }
}
