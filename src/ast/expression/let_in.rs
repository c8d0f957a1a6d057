use serde::{Deserialize, Serialize};

use crate::ast::{Span, TypeName};

use super::{Expression, Id};

/// `let x = value in body`, with an optional annotation on the binder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetIn<T> {
    pub binder: Id<T>,
    pub annotation: Option<TypeName>,
    pub value: Box<Expression<T>>,
    pub body: Box<Expression<T>>,
    pub info: T,
    pub position: Span,
}
