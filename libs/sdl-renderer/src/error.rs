use thiserror::Error;

/// Every validation failure the builders can produce. Validation is
/// eager: all variants are returned at construction time, and a
/// successfully constructed object always renders.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A name that does not match the GraphQL `Name` production.
    #[error("`{0}` is not a valid GraphQL name")]
    InvalidIdentifier(String),
    /// A default value outside the domain of the field's type.
    #[error("`{0}` is not a valid default value for the field")]
    InvalidDefaultValue(String),
    /// The same field twice in a composite uniqueness scope.
    #[error("duplicate field `{0}` in the unique scope")]
    DuplicateScopeField(String),
    /// An enum declared without variants.
    #[error("enum `{0}` must have at least one variant")]
    EmptyEnum(String),
    /// A connector constructed without a schema reference.
    #[error("an OpenAPI connector requires a schema reference")]
    MissingSchema,
}
