use serde::{Deserialize, Serialize};

use crate::ast::{Span, TypeName};

use super::Id;

/// Saturated constructor application, e.g. `Cons {Uint32} hd tl`. Type
/// arguments instantiate the constructor's algebraic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constr<T> {
    pub name: Id<T>,
    pub type_args: Vec<TypeName>,
    pub args: Vec<Id<T>>,
    pub info: T,
    pub position: Span,
}
