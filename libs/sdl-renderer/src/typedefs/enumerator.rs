use super::{
    auth::{AuthDefinition, AuthInner, AuthRules},
    cache::{CacheDefinition, CacheInner, FieldCache},
    default::DefaultDefinition,
    list::{ListDefinition, ListInner},
    resolver::{ResolverDefinition, ResolverInner},
    search::{SearchDefinition, SearchInner},
    unique::{UniqueDefinition, UniqueInner},
    DirectiveSet, FieldRender,
};
use crate::{error::Error, value::Constant};
use std::fmt;

/// An enum declaration, rendered as an SDL `enum` block.
///
/// ```ignore
/// enum Role {
///   ADMIN
///   USER
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Enum {
    name: Constant,
    variants: Vec<Constant>,
}

impl Enum {
    /// Create a new enum declaration. The variant list keeps its order
    /// and must not be empty; every name is validated.
    pub fn new<'a>(name: &str, variants: impl IntoIterator<Item = &'a str>) -> Result<Self, Error> {
        let name = Constant::new(name)?;

        let variants = variants
            .into_iter()
            .map(Constant::new)
            .collect::<Result<Vec<_>, _>>()?;

        if variants.is_empty() {
            return Err(Error::EmptyEnum(name.as_str().to_owned()));
        }

        Ok(Self { name, variants })
    }

    /// Append a variant to the declaration. Field definitions already
    /// built from this enum keep their own copy and do not observe the
    /// change.
    pub fn push_variant(&mut self, variant: &str) -> Result<(), Error> {
        self.variants.push(Constant::new(variant)?);
        Ok(())
    }

    /// The name of the enum.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "enum {} {{", self.name)?;

        for variant in &self.variants {
            writeln!(f, "  {variant}")?;
        }

        f.write_str("}")
    }
}

/// An enum field type. Takes a snapshot of the declaration it is built
/// from: the name and variants are copied, not referenced.
#[derive(Debug, Clone)]
pub struct EnumDefinition {
    name: Constant,
    variants: Vec<Constant>,
    is_optional: bool,
}

impl EnumDefinition {
    /// Create a new required enum field type from a declaration.
    pub fn new(referenced_enum: &Enum) -> Self {
        Self {
            name: referenced_enum.name.clone(),
            variants: referenced_enum.variants.clone(),
            is_optional: false,
        }
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Allow multiple values of the enum in the field.
    pub fn list(self) -> ListDefinition {
        ListDefinition::new(ListInner::Enum(self))
    }

    /// Set the default value of the field. The value must be one of the
    /// snapshotted variants.
    pub fn default(self, variant: &str) -> Result<DefaultDefinition, Error> {
        DefaultDefinition::enumeration(self, variant)
    }

    /// Make the field unique.
    pub fn unique(self) -> UniqueDefinition {
        UniqueDefinition::new(UniqueInner::Enum(self))
    }

    /// Make the field unique together with the given additional fields.
    pub fn unique_scope<'a>(self, scope: impl IntoIterator<Item = &'a str>) -> Result<UniqueDefinition, Error> {
        UniqueDefinition::with_scope(UniqueInner::Enum(self), scope)
    }

    /// Make the field searchable.
    pub fn search(self) -> SearchDefinition {
        SearchDefinition::new(SearchInner::Enum(self))
    }

    /// Set the field-level auth directive.
    pub fn auth(self, rules: impl FnOnce(&mut AuthRules)) -> AuthDefinition {
        AuthDefinition::new(AuthInner::Enum(self), rules)
    }

    /// Attach a resolver function to the field.
    pub fn resolver(self, name: &str) -> ResolverDefinition {
        ResolverDefinition::new(ResolverInner::Enum(self), name)
    }

    /// Set the field-level cache directive.
    pub fn cache(self, cache: FieldCache) -> CacheDefinition {
        CacheDefinition::new(CacheInner::Enum(self), cache)
    }

    pub(crate) fn variant(&self, name: &str) -> Option<&Constant> {
        self.variants.iter().find(|variant| variant.as_str() == name)
    }
}

impl FieldRender for EnumDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_str())?;

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

impl fmt::Display for EnumDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn renders_a_block() {
        let role = Enum::new("Role", ["ADMIN", "USER"]).unwrap();

        let expected = expect![[r#"
            enum Role {
              ADMIN
              USER
            }"#]];

        expected.assert_eq(&role.to_string());
    }

    #[test]
    fn rejects_an_empty_variant_list() {
        assert_eq!(
            Enum::new("Role", std::iter::empty::<&str>()).unwrap_err(),
            Error::EmptyEnum("Role".to_string())
        );
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(
            Enum::new("bad name", ["A"]).unwrap_err(),
            Error::InvalidIdentifier("bad name".to_string())
        );

        assert_eq!(
            Enum::new("Role", ["NOT OK"]).unwrap_err(),
            Error::InvalidIdentifier("NOT OK".to_string())
        );
    }

    #[test]
    fn field_renders_the_enum_name() {
        let role = Enum::new("Role", ["ADMIN", "USER"]).unwrap();

        assert_eq!(EnumDefinition::new(&role).to_string(), "Role!");
        assert_eq!(EnumDefinition::new(&role).optional().to_string(), "Role");
    }

    #[test]
    fn definitions_snapshot_the_variants() {
        let mut role = Enum::new("Role", ["ADMIN", "USER"]).unwrap();
        let field = EnumDefinition::new(&role);

        role.push_variant("MODERATOR").unwrap();

        // The snapshot predates MODERATOR, so it is not a valid default.
        assert_eq!(
            field.clone().default("MODERATOR").unwrap_err(),
            Error::InvalidDefaultValue("MODERATOR".to_string())
        );

        assert_eq!(field.default("ADMIN").unwrap().to_string(), "Role! @default(value: ADMIN)");
    }
}
