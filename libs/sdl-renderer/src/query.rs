//! The `extend type Query` / `extend type Mutation` block builder.

use crate::{
    common::IteratorJoin,
    error::Error,
    typedefs::{ListDefinition, ReferenceDefinition, ScalarDefinition},
    value::{Constant, Text},
};
use std::fmt;

/// Whether the operation extends the `Query` or the `Mutation` type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryType {
    /// A read operation.
    Query,
    /// A write operation.
    Mutation,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Query => f.write_str("Query"),
            QueryType::Mutation => f.write_str("Mutation"),
        }
    }
}

/// The type of a query argument: a scalar, a list or a model reference.
#[derive(Debug, Clone)]
pub enum InputType {
    /// A scalar argument or return value.
    Scalar(ScalarDefinition),
    /// A list argument or return value.
    List(ListDefinition),
    /// A model reference argument or return value.
    Reference(ReferenceDefinition),
}

/// The return type of a query. The same shapes are legal as for
/// arguments.
pub type OutputType = InputType;

impl From<ScalarDefinition> for InputType {
    fn from(definition: ScalarDefinition) -> Self {
        Self::Scalar(definition)
    }
}

impl From<ListDefinition> for InputType {
    fn from(definition: ListDefinition) -> Self {
        Self::List(definition)
    }
}

impl From<ReferenceDefinition> for InputType {
    fn from(definition: ReferenceDefinition) -> Self {
        Self::Reference(definition)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Scalar(definition) => definition.fmt(f),
            InputType::List(definition) => definition.fmt(f),
            InputType::Reference(definition) => definition.fmt(f),
        }
    }
}

/// A named, typed query argument, rendered as `name: Type`.
#[derive(Debug, Clone)]
pub struct QueryArgument {
    name: Constant,
    r#type: InputType,
}

impl fmt::Display for QueryArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.r#type)
    }
}

/// A custom query or mutation backed by a resolver.
///
/// ```ignore
/// extend type Query {
///   greet(name: String): String! @resolver(name: "greet")
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    name: Constant,
    r#type: QueryType,
    arguments: Vec<QueryArgument>,
    returns: OutputType,
    resolver: String,
}

impl Query {
    /// Create a new query or mutation with no arguments.
    pub fn new(
        name: &str,
        r#type: QueryType,
        returns: impl Into<OutputType>,
        resolver: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            name: Constant::new(name)?,
            r#type,
            arguments: Vec::new(),
            returns: returns.into(),
            resolver: resolver.to_owned(),
        })
    }

    /// Append an argument, returning the receiver so calls can be
    /// chained. Arguments render in push order. Names are not
    /// deduplicated; a repeated name renders twice, and keeping the
    /// list consistent is the caller's responsibility.
    pub fn push_argument(&mut self, name: &str, r#type: impl Into<InputType>) -> Result<&mut Self, Error> {
        self.arguments.push(QueryArgument {
            name: Constant::new(name)?,
            r#type: r#type.into(),
        });

        Ok(self)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "extend type {} {{", self.r#type)?;

        write!(f, "  {}", self.name)?;

        if !self.arguments.is_empty() {
            f.write_str("(")?;
            self.arguments.iter().join(", ", f)?;
            f.write_str(")")?;
        }

        write!(f, ": {} @resolver(name: {})", self.returns, Text(&self.resolver))?;

        f.write_str("\n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typedefs::ScalarType;
    use expect_test::expect;

    #[test]
    fn no_arguments_renders_without_parentheses() {
        let returns = ReferenceDefinition::new("Post").unwrap().optional().list().optional();
        let query = Query::new("feed", QueryType::Query, returns, "feedResolver").unwrap();

        let expected = expect![[r#"
            extend type Query {
              feed: [Post] @resolver(name: "feedResolver")
            }"#]];

        expected.assert_eq(&query.to_string());
    }

    #[test]
    fn arguments_render_in_push_order() {
        let returns = ReferenceDefinition::new("Post").unwrap().optional().list().optional();
        let mut query = Query::new("feed", QueryType::Query, returns, "feedResolver").unwrap();

        query
            .push_argument("first", ScalarDefinition::new(ScalarType::Int))
            .unwrap()
            .push_argument("after", ScalarDefinition::new(ScalarType::String).optional())
            .unwrap();

        let expected = expect![[r#"
            extend type Query {
              feed(first: Int!, after: String): [Post] @resolver(name: "feedResolver")
            }"#]];

        expected.assert_eq(&query.to_string());
    }

    #[test]
    fn duplicate_argument_names_both_render() {
        let returns = ScalarDefinition::new(ScalarType::Boolean);
        let mut query = Query::new("check", QueryType::Query, returns, "check").unwrap();

        query
            .push_argument("id", ScalarDefinition::new(ScalarType::Id))
            .unwrap()
            .push_argument("id", ScalarDefinition::new(ScalarType::Id))
            .unwrap();

        let expected = expect![[r#"
            extend type Query {
              check(id: ID!, id: ID!): Boolean! @resolver(name: "check")
            }"#]];

        expected.assert_eq(&query.to_string());
    }

    #[test]
    fn mutations_extend_the_mutation_type() {
        let mut mutation = Query::new(
            "createUser",
            QueryType::Mutation,
            ReferenceDefinition::new("User").unwrap(),
            "user/create",
        )
        .unwrap();

        mutation
            .push_argument("email", ScalarDefinition::new(ScalarType::Email))
            .unwrap();

        let expected = expect![[r#"
            extend type Mutation {
              createUser(email: Email!): User! @resolver(name: "user/create")
            }"#]];

        expected.assert_eq(&mutation.to_string());
    }

    #[test]
    fn argument_names_are_validated() {
        let mut query = Query::new(
            "feed",
            QueryType::Query,
            ScalarDefinition::new(ScalarType::Boolean),
            "feed",
        )
        .unwrap();

        assert_eq!(
            query
                .push_argument("not ok", ScalarDefinition::new(ScalarType::Int))
                .unwrap_err(),
            Error::InvalidIdentifier("not ok".to_string())
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let query = Query::new(
            "feed",
            QueryType::Query,
            ScalarDefinition::new(ScalarType::Boolean),
            "feed",
        )
        .unwrap();

        assert_eq!(query.to_string(), query.to_string());
    }
}
