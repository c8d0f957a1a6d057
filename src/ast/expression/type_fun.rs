use serde::{Deserialize, Serialize};

use crate::ast::Span;

use super::Expression;

/// Explicit type abstraction: `tfun 'A => body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFun<T> {
    pub type_var: String,
    pub body: Box<Expression<T>>,
    pub info: T,
    pub position: Span,
}
