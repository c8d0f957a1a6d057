use serde::{Deserialize, Serialize};

use crate::ast::Span;

/// A single identifier occurrence. Binder and use sites share this node;
/// the info slot carries the type the environment assigns at the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Id<T> {
    pub name: String,
    pub info: T,
    pub position: Span,
}

impl Id<()> {
    pub fn new(name: impl ToString) -> Id<()> {
        Id {
            name: name.to_string(),
            info: (),
            position: Span::default(),
        }
    }
}
