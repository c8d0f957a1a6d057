use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Id, Span};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern<T> {
    Wildcard(WildcardPattern<T>),
    Binder(Id<T>),
    Constructor(ConstructorPattern<T>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardPattern<T> {
    pub info: T,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorPattern<T> {
    pub name: String,
    pub args: Vec<Pattern<T>>,
    pub info: T,
    pub position: Span,
}

impl Pattern<()> {
    pub fn wildcard() -> Pattern<()> {
        Pattern::Wildcard(WildcardPattern {
            info: (),
            position: Span::default(),
        })
    }

    pub fn binder(name: impl ToString) -> Pattern<()> {
        Pattern::Binder(Id::new(name))
    }

    pub fn constructor(name: impl ToString, args: Vec<Pattern<()>>) -> Pattern<()> {
        Pattern::Constructor(ConstructorPattern {
            name: name.to_string(),
            args,
            info: (),
            position: Span::default(),
        })
    }
}

impl<T> Pattern<T> {
    pub fn position(&self) -> Span {
        match self {
            Pattern::Wildcard(WildcardPattern { position, .. }) => position.clone(),
            Pattern::Binder(Id { position, .. }) => position.clone(),
            Pattern::Constructor(ConstructorPattern { position, .. }) => position.clone(),
        }
    }

    /// Collect every name this pattern binds.
    pub fn bound_names(&self, into: &mut HashSet<String>) {
        match self {
            Pattern::Wildcard(_) => {}
            Pattern::Binder(id) => {
                into.insert(id.name.clone());
            }
            Pattern::Constructor(ConstructorPattern { args, .. }) => {
                for arg in args {
                    arg.bound_names(into);
                }
            }
        }
    }
}

impl<T> Pattern<T>
where
    T: Clone,
{
    pub fn get_info(&self) -> T {
        match self {
            Pattern::Wildcard(WildcardPattern { info, .. }) => info.clone(),
            Pattern::Binder(Id { info, .. }) => info.clone(),
            Pattern::Constructor(ConstructorPattern { info, .. }) => info.clone(),
        }
    }
}
