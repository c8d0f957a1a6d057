use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::Span;

/// Types as written in programs. Resolution into semantic types (including
/// well-formedness of type variables and named types) happens in the type
/// checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeName {
    /// A primitive or algebraic type referenced by name, with optional
    /// positional type arguments (`Uint128`, `Option ByStr32`).
    Named {
        name: String,
        args: Vec<TypeName>,
        position: Span,
    },
    /// A type variable (`'A`), valid only under an enclosing `forall`.
    Var { name: String, position: Span },
    Map {
        key: Box<TypeName>,
        value: Box<TypeName>,
        position: Span,
    },
    Fun {
        arg: Box<TypeName>,
        ret: Box<TypeName>,
        position: Span,
    },
    /// `forall 'A. body`
    Poly {
        type_var: String,
        body: Box<TypeName>,
        position: Span,
    },
}

impl TypeName {
    pub fn position(&self) -> Span {
        match self {
            TypeName::Named { position, .. } => position.clone(),
            TypeName::Var { position, .. } => position.clone(),
            TypeName::Map { position, .. } => position.clone(),
            TypeName::Fun { position, .. } => position.clone(),
            TypeName::Poly { position, .. } => position.clone(),
        }
    }

    pub fn named(name: impl ToString) -> TypeName {
        TypeName::Named {
            name: name.to_string(),
            args: vec![],
            position: Span::default(),
        }
    }

    pub fn named_with_args(name: impl ToString, args: Vec<TypeName>) -> TypeName {
        TypeName::Named {
            name: name.to_string(),
            args,
            position: Span::default(),
        }
    }

    pub fn var(name: impl ToString) -> TypeName {
        TypeName::Var {
            name: name.to_string(),
            position: Span::default(),
        }
    }

    pub fn map(key: TypeName, value: TypeName) -> TypeName {
        TypeName::Map {
            key: Box::new(key),
            value: Box::new(value),
            position: Span::default(),
        }
    }

    pub fn fun(arg: TypeName, ret: TypeName) -> TypeName {
        TypeName::Fun {
            arg: Box::new(arg),
            ret: Box::new(ret),
            position: Span::default(),
        }
    }

    pub fn poly(type_var: impl ToString, body: TypeName) -> TypeName {
        TypeName::Poly {
            type_var: type_var.to_string(),
            body: Box::new(body),
            position: Span::default(),
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeName::Named { name, args, .. } => {
                write!(f, "{name}")?;
                for arg in args {
                    write!(f, " ({arg})")?;
                }
                Ok(())
            }
            TypeName::Var { name, .. } => write!(f, "'{name}"),
            TypeName::Map { key, value, .. } => write!(f, "Map ({key}) ({value})"),
            TypeName::Fun { arg, ret, .. } => write!(f, "({arg}) -> ({ret})"),
            TypeName::Poly { type_var, body, .. } => write!(f, "forall '{type_var}. {body}"),
        }
    }
}
