use serde::{Deserialize, Serialize};

use crate::ast::{Span, TypeName};

use super::{Expression, Id};

/// `fun (x : T) => body`: a single-parameter function with an explicitly
/// annotated binder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunDef<T> {
    pub param: Id<T>,
    pub param_type: TypeName,
    pub body: Box<Expression<T>>,
    pub info: T,
    pub position: Span,
}
