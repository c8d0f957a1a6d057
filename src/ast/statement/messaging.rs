use serde::{Deserialize, Serialize};

use crate::ast::{Id, Span};

/// `accept`: take custody of the funds sent with the current call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptPayment<T> {
    pub info: T,
    pub position: Span,
}

/// `send msgs`: emit a list of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMsgs<T> {
    pub messages: Id<T>,
    pub info: T,
    pub position: Span,
}

/// `event e`: emit a single event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEvnt<T> {
    pub event: Id<T>,
    pub info: T,
    pub position: Span,
}

/// `throw`: abort the transition. Not supported by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throw<T> {
    pub info: T,
    pub position: Span,
}
