use serde::{Deserialize, Serialize};

use crate::ast::{Id, Span};

/// `f := r`: overwrite a contract field with a local value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store<T> {
    pub field: Id<T>,
    pub value: Id<T>,
    pub info: T,
    pub position: Span,
}
