use serde::{Deserialize, Serialize};

use crate::ast::{Expression, Id, Span};

/// `x = e`: bind the value of a pure expression for the rest of the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bind<T> {
    pub target: Id<T>,
    pub value: Box<Expression<T>>,
    pub info: T,
    pub position: Span,
}
