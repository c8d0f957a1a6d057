use serde::{Deserialize, Serialize};

use crate::ast::{Span, TypeName};

use super::{Expression, Id};

/// General recursion primitive: `fix f : T => body`, where `body` may refer
/// to `f` at type `T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixpoint<T> {
    pub binder: Id<T>,
    pub annotation: TypeName,
    pub body: Box<Expression<T>>,
    pub info: T,
    pub position: Span,
}
