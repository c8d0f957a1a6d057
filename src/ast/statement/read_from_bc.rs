use serde::{Deserialize, Serialize};

use crate::ast::{Id, Span};

/// `x <- & BLOCKNUMBER`: read a well-known blockchain value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadFromBC<T> {
    pub target: Id<T>,
    pub field: String,
    pub info: T,
    pub position: Span,
}
