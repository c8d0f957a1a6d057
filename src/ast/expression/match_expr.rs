use serde::{Deserialize, Serialize};

use crate::ast::{Pattern, Span};

use super::{Expression, Id};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchExpr<T> {
    pub scrutinee: Id<T>,
    pub clauses: Vec<MatchClause<T>>,
    pub info: T,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchClause<T> {
    pub pattern: Pattern<T>,
    pub body: Expression<T>,
    pub position: Span,
}
