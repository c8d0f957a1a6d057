use serde::{Deserialize, Serialize};

use super::{Expression, Id, Span, Statement, TypeName};

/// Constructor declaration inside a library type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtrDef {
    pub name: String,
    pub arg_types: Vec<TypeName>,
    pub position: Span,
}

/// `let name = expr` at library level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibVar<T> {
    pub name: Id<T>,
    pub expr: Expression<T>,
    pub position: Span,
}

/// `type Name = | C1 of ... | C2 of ...` at library level. Registration of
/// the algebraic type itself happens outside the checker; the checker only
/// validates the constructor argument types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibTyp {
    pub name: String,
    pub ctr_defs: Vec<CtrDef>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibEntry<T> {
    Var(LibVar<T>),
    Typ(LibTyp),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library<T> {
    pub name: String,
    pub entries: Vec<LibEntry<T>>,
    pub position: Span,
}

/// An explicitly typed binder, used for contract and transition parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter<T> {
    pub name: Id<T>,
    pub type_name: TypeName,
    pub position: Span,
}

/// A mutable contract field with its declared type and initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field<T> {
    pub name: Id<T>,
    pub type_name: TypeName,
    pub init: Expression<T>,
    pub position: Span,
}

/// A contract entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<T> {
    pub name: String,
    pub params: Vec<Parameter<T>>,
    pub body: Vec<Statement<T>>,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract<T> {
    pub name: String,
    pub params: Vec<Parameter<T>>,
    pub fields: Vec<Field<T>>,
    pub transitions: Vec<Transition<T>>,
    pub position: Span,
}

/// A whole compilation unit: recursion primitives, imported libraries, the
/// contract's own library, and the contract itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractModule<T> {
    pub name: String,
    pub rec_primitives: Vec<LibEntry<T>>,
    pub external_libraries: Vec<Library<T>>,
    pub library: Option<Library<T>>,
    pub contract: Contract<T>,
    pub position: Span,
}
