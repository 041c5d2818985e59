use super::{
    auth::{AuthDefinition, AuthInner, AuthRules},
    list::{ListDefinition, ListInner},
    resolver::{ResolverDefinition, ResolverInner},
    DirectiveSet, FieldRender,
};
use crate::{error::Error, value::Constant};
use std::fmt;

/// A field type referencing another declared model.
///
/// ```ignore
/// author: Author!
/// //      ^^^^^^^ this
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceDefinition {
    referenced_model: Constant,
    is_optional: bool,
}

impl ReferenceDefinition {
    /// Create a new required reference to the named model.
    pub fn new(referenced_model: &str) -> Result<Self, Error> {
        Ok(Self {
            referenced_model: Constant::new(referenced_model)?,
            is_optional: false,
        })
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Allow multiple references in the field.
    pub fn list(self) -> ListDefinition {
        ListDefinition::new(ListInner::Reference(self))
    }

    /// Set the field-level auth directive.
    pub fn auth(self, rules: impl FnOnce(&mut AuthRules)) -> AuthDefinition {
        AuthDefinition::new(AuthInner::Reference(self), rules)
    }

    /// Attach a resolver function to the field.
    pub fn resolver(self, name: &str) -> ResolverDefinition {
        ResolverDefinition::new(ResolverInner::Reference(self), name)
    }
}

impl FieldRender for ReferenceDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.referenced_model.as_str())?;

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

impl fmt::Display for ReferenceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_model_name() {
        assert_eq!(ReferenceDefinition::new("Post").unwrap().to_string(), "Post!");
        assert_eq!(ReferenceDefinition::new("Post").unwrap().optional().to_string(), "Post");
    }

    #[test]
    fn validates_the_model_name() {
        assert_eq!(
            ReferenceDefinition::new("no spaces").unwrap_err(),
            Error::InvalidIdentifier("no spaces".to_string())
        );
    }
}
