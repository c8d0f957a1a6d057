use serde::{Deserialize, Serialize};

use crate::ast::{Id, Pattern, Span};

use super::Statement;

/// Statement-level match. Branch bodies are statement blocks; bindings a
/// branch introduces stay inside that branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatement<T> {
    pub scrutinee: Id<T>,
    pub clauses: Vec<StatementMatchClause<T>>,
    pub info: T,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementMatchClause<T> {
    pub pattern: Pattern<T>,
    pub body: Vec<Statement<T>>,
    pub position: Span,
}
