//! The field type definition chain.
//!
//! A chain starts from a scalar, enum or reference leaf and grows by
//! wrapping: every modifier call consumes the current definition and
//! returns a new wrapper owning it. Each wrapper type only exposes the
//! modifiers that are still legal after it, so illegal combinations do
//! not compile.

mod auth;
mod cache;
mod default;
mod enumerator;
mod list;
mod reference;
mod resolver;
mod scalar;
mod search;
mod unique;

pub use auth::{AuthDefinition, AuthRule, AuthRules};
pub use cache::{CacheDefinition, FieldCache};
pub use default::{DefaultDefinition, DefaultValue};
pub use enumerator::{Enum, EnumDefinition};
pub use list::ListDefinition;
pub use reference::ReferenceDefinition;
pub use resolver::ResolverDefinition;
pub use scalar::{ScalarDefinition, ScalarType};
pub use search::SearchDefinition;
pub use unique::UniqueDefinition;

use crate::{
    common::IteratorJoin,
    value::{Constant, Text},
};
use default::DefaultPayload;
use std::fmt;

/// The rendering seam every chain node implements.
pub(crate) trait FieldRender {
    /// Write the type reference itself: the leaf name, the `!` marker
    /// when required, the brackets around lists.
    fn render_type(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Deposit the node's directive, if any, after collecting from the
    /// owned inner node.
    fn collect<'a>(&'a self, directives: &mut DirectiveSet<'a>);

    /// Clear the required marker of the outermost type node, which is
    /// the one the `!` belongs to.
    fn set_optional(&mut self);
}

/// Renders a full chain node: the type reference first, then the
/// directives in their canonical order.
pub(crate) fn render(node: &impl FieldRender, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    node.render_type(f)?;

    let mut directives = DirectiveSet::default();
    node.collect(&mut directives);

    write!(f, "{directives}")
}

/// One slot per directive kind. Rendering a field always emits the
/// directives in the slot order below, whatever order the caller
/// attached them in, so the output stays diff-stable.
#[derive(Default)]
pub(crate) struct DirectiveSet<'a> {
    pub(crate) auth: Option<&'a AuthRules>,
    pub(crate) search: bool,
    pub(crate) unique: Option<&'a [Constant]>,
    pub(crate) default: Option<&'a DefaultPayload>,
    pub(crate) resolver: Option<&'a str>,
    pub(crate) cache: Option<&'a FieldCache>,
}

impl fmt::Display for DirectiveSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rules) = self.auth {
            write!(f, " @auth(rules: {rules})")?;
        }

        if self.search {
            f.write_str(" @search")?;
        }

        if let Some(scope) = self.unique {
            f.write_str(" @unique")?;

            if !scope.is_empty() {
                f.write_str("(fields: [")?;
                scope.iter().map(Text).join(", ", f)?;
                f.write_str("])")?;
            }
        }

        if let Some(value) = self.default {
            write!(f, " @default(value: {value})")?;
        }

        if let Some(name) = self.resolver {
            write!(f, " @resolver(name: {})", Text(name))?;
        }

        if let Some(cache) = self.cache {
            write!(f, " @cache({cache})")?;
        }

        Ok(())
    }
}
