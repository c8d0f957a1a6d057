use serde::{Deserialize, Serialize};

use crate::ast::{Span, TypeName};

use super::Id;

/// Explicit type application: `@f Uint32 ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeApp<T> {
    pub func: Id<T>,
    pub type_args: Vec<TypeName>,
    pub info: T,
    pub position: Span,
}
