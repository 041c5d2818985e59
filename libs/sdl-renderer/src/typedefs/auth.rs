use super::{
    cache::{CacheDefinition, CacheInner, FieldCache},
    default::DefaultDefinition,
    enumerator::EnumDefinition,
    list::ListDefinition,
    reference::ReferenceDefinition,
    resolver::{ResolverDefinition, ResolverInner},
    scalar::ScalarDefinition,
    search::SearchDefinition,
    unique::UniqueDefinition,
    DirectiveSet, FieldRender,
};
use crate::{common::IteratorJoin, value::Text};
use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Allow {
    Public,
    Private,
    Groups,
    Owner,
}

impl fmt::Display for Allow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allow::Public => f.write_str("public"),
            Allow::Private => f.write_str("private"),
            Allow::Groups => f.write_str("groups"),
            Allow::Owner => f.write_str("owner"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operation {
    Get,
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Get => f.write_str("get"),
            Operation::List => f.write_str("list"),
            Operation::Read => f.write_str("read"),
            Operation::Create => f.write_str("create"),
            Operation::Update => f.write_str("update"),
            Operation::Delete => f.write_str("delete"),
        }
    }
}

/// One access rule. Created through [`AuthRules`]; the returned mutable
/// reference lets the caller restrict the rule to specific operations.
#[derive(Debug, Clone)]
pub struct AuthRule {
    allow: Allow,
    groups: Vec<String>,
    operations: Vec<Operation>,
}

impl AuthRule {
    fn new(allow: Allow) -> Self {
        Self {
            allow,
            groups: Vec::new(),
            operations: Vec::new(),
        }
    }

    fn operation(&mut self, operation: Operation) -> &mut Self {
        if !self.operations.contains(&operation) {
            self.operations.push(operation);
        }

        self
    }

    /// Allow the `get` operation.
    pub fn get(&mut self) -> &mut Self {
        self.operation(Operation::Get)
    }

    /// Allow the `list` operation.
    pub fn list(&mut self) -> &mut Self {
        self.operation(Operation::List)
    }

    /// Allow the `read` operation.
    pub fn read(&mut self) -> &mut Self {
        self.operation(Operation::Read)
    }

    /// Allow the `create` operation.
    pub fn create(&mut self) -> &mut Self {
        self.operation(Operation::Create)
    }

    /// Allow the `update` operation.
    pub fn update(&mut self) -> &mut Self {
        self.operation(Operation::Update)
    }

    /// Allow the `delete` operation.
    pub fn delete(&mut self) -> &mut Self {
        self.operation(Operation::Delete)
    }
}

impl fmt::Display for AuthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ allow: {}", self.allow)?;

        if !self.groups.is_empty() {
            f.write_str(", groups: [")?;
            self.groups.iter().map(Text).join(", ", f)?;
            f.write_str("]")?;
        }

        if !self.operations.is_empty() {
            f.write_str(", operations: [")?;
            self.operations.iter().join(", ", f)?;
            f.write_str("]")?;
        }

        f.write_str(" }")
    }
}

/// The rule collector handed to the caller's auth closure. Rules render
/// in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct AuthRules {
    rules: Vec<AuthRule>,
}

impl AuthRules {
    fn rule(&mut self, allow: Allow) -> &mut AuthRule {
        self.rules.push(AuthRule::new(allow));

        // Just pushed, the list cannot be empty.
        self.rules.last_mut().unwrap()
    }

    /// Allow access to everybody.
    pub fn public(&mut self) -> &mut AuthRule {
        self.rule(Allow::Public)
    }

    /// Allow access to signed-in users.
    pub fn private(&mut self) -> &mut AuthRule {
        self.rule(Allow::Private)
    }

    /// Allow access to users belonging to one of the given groups.
    pub fn groups<'a>(&mut self, groups: impl IntoIterator<Item = &'a str>) -> &mut AuthRule {
        let rule = self.rule(Allow::Groups);
        rule.groups = groups.into_iter().map(ToOwned::to_owned).collect();

        rule
    }

    /// Allow access to the owner of the entity.
    pub fn owner(&mut self) -> &mut AuthRule {
        self.rule(Allow::Owner)
    }
}

impl fmt::Display for AuthRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        self.rules.iter().join(", ", f)?;
        f.write_str(" ]")
    }
}

/// The states an auth rule can be attached to.
#[derive(Debug, Clone)]
pub(crate) enum AuthInner {
    Scalar(ScalarDefinition),
    Enum(EnumDefinition),
    Reference(ReferenceDefinition),
    List(ListDefinition),
    Default(DefaultDefinition),
    Unique(UniqueDefinition),
    Search(SearchDefinition),
}

impl FieldRender for AuthInner {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthInner::Scalar(inner) => inner.render_type(f),
            AuthInner::Enum(inner) => inner.render_type(f),
            AuthInner::Reference(inner) => inner.render_type(f),
            AuthInner::List(inner) => inner.render_type(f),
            AuthInner::Default(inner) => inner.render_type(f),
            AuthInner::Unique(inner) => inner.render_type(f),
            AuthInner::Search(inner) => inner.render_type(f),
        }
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        match self {
            AuthInner::Scalar(inner) => inner.collect(directives),
            AuthInner::Enum(inner) => inner.collect(directives),
            AuthInner::Reference(inner) => inner.collect(directives),
            AuthInner::List(inner) => inner.collect(directives),
            AuthInner::Default(inner) => inner.collect(directives),
            AuthInner::Unique(inner) => inner.collect(directives),
            AuthInner::Search(inner) => inner.collect(directives),
        }
    }

    fn set_optional(&mut self) {
        match self {
            AuthInner::Scalar(inner) => inner.set_optional(),
            AuthInner::Enum(inner) => inner.set_optional(),
            AuthInner::Reference(inner) => inner.set_optional(),
            AuthInner::List(inner) => inner.set_optional(),
            AuthInner::Default(inner) => inner.set_optional(),
            AuthInner::Unique(inner) => inner.set_optional(),
            AuthInner::Search(inner) => inner.set_optional(),
        }
    }
}

/// A field guarded by access rules, rendered as `@auth(rules: [...])`.
#[derive(Debug, Clone)]
pub struct AuthDefinition {
    inner: AuthInner,
    rules: AuthRules,
}

impl AuthDefinition {
    pub(crate) fn new(inner: AuthInner, configure: impl FnOnce(&mut AuthRules)) -> Self {
        let mut rules = AuthRules::default();
        configure(&mut rules);

        Self { inner, rules }
    }

    /// Set the field optional.
    pub fn optional(mut self) -> Self {
        self.inner.set_optional();
        self
    }

    /// Attach a resolver function to the field.
    pub fn resolver(self, name: &str) -> ResolverDefinition {
        ResolverDefinition::new(ResolverInner::Auth(self), name)
    }

    /// Set the field-level cache directive.
    pub fn cache(self, cache: FieldCache) -> CacheDefinition {
        CacheDefinition::new(CacheInner::Auth(self), cache)
    }
}

impl FieldRender for AuthDefinition {
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.render_type(f)
    }

    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>) {
        self.inner.collect(directives);
        directives.auth = Some(&self.rules);
    }

    fn set_optional(&mut self) {
        self.inner.set_optional();
    }
}

impl fmt::Display for AuthDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::render(self, f)
    }
}
