use serde::{Deserialize, Serialize};

use crate::ast::Span;

use super::Id;

/// Function application. Operands are identifiers: the surface language is
/// in A-normal form, so compound arguments are let-bound first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App<T> {
    pub func: Id<T>,
    pub args: Vec<Id<T>>,
    pub info: T,
    pub position: Span,
}
