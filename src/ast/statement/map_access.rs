use serde::{Deserialize, Serialize};

use crate::ast::{Id, Span};

/// `m[k1][..kn] := v` or, without a value, `delete m[k1][..kn]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapUpdate<T> {
    pub map: Id<T>,
    pub keys: Vec<Id<T>>,
    /// `None` deletes the addressed entry.
    pub value: Option<Id<T>>,
    pub info: T,
    pub position: Span,
}

/// `x <- m[k1][..kn]` (`fetch_value`) or `x <- exists m[k1][..kn]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapGet<T> {
    pub target: Id<T>,
    pub map: Id<T>,
    pub keys: Vec<Id<T>>,
    /// `true` binds `Option` of the addressed value, `false` binds the
    /// existence check result.
    pub fetch_value: bool,
    pub info: T,
    pub position: Span,
}
