use serde::{Deserialize, Serialize};

use crate::ast::{Literal, Span};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lit<T> {
    pub value: Literal,
    pub info: T,
    pub position: Span,
}

impl Lit<()> {
    pub fn new(value: Literal) -> Lit<()> {
        Lit {
            value,
            info: (),
            position: Span::default(),
        }
    }
}
