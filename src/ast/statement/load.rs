use serde::{Deserialize, Serialize};

use crate::ast::{Id, Span};

/// `x <- f`: read a contract field into a local binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Load<T> {
    pub target: Id<T>,
    pub field: Id<T>,
    pub info: T,
    pub position: Span,
}
