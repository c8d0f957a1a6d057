use serde::{Deserialize, Serialize};

use crate::ast::Span;

use super::Id;

/// `builtin op a b`: invocation of a built-in operator. The operator
/// identifier is annotated with the operator's result type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinCall<T> {
    pub op: Id<T>,
    pub args: Vec<Id<T>>,
    pub info: T,
    pub position: Span,
}
