use serde::{Deserialize, Serialize};

use crate::ast::{Literal, Span};

use super::Id;

/// Message or event construction: `{_tag : "..."; _recipient : r; ...}`.
/// Which of the two it is depends on the header fields present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageExpr<T> {
    pub entries: Vec<MessageEntry<T>>,
    pub info: T,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry<T> {
    pub field: String,
    pub payload: MessagePayload<T>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessagePayload<T> {
    /// A bare string tag.
    Tag(String),
    Lit(Literal),
    Var(Id<T>),
}

impl<T> MessageEntry<T> {
    pub fn new(field: impl ToString, payload: MessagePayload<T>) -> MessageEntry<T> {
        MessageEntry {
            field: field.to_string(),
            payload,
            position: Span::default(),
        }
    }
}
