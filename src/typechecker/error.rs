use std::{error::Error, fmt::Display};

use crate::ast::{Span, TypeName};

use super::types::Type;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeCheckError {
    TypeMismatch(TypeMismatch, Span),
    UndefinedVariable(UndefinedVariable, Span),
    UndefinedConstructor(UndefinedConstructor, Span),
    NotWellFormed(NotWellFormed, Span),
    ArityMismatch(ArityMismatch, Span),
    UnknownBuiltin(UnknownBuiltin, Span),
    NonStorable(NonStorable, Span),
    NonSerializable(NonSerializable, Span),
    EmptyMatch(EmptyMatch, Span),
    BadMessageField(BadMessageField, Span),
    WriteToReadOnly(WriteToReadOnly, Span),
    RecPrimsTypeDecl(RecPrimsTypeDecl, Span),
    UnknownBlockchainField(UnknownBlockchainField, Span),
    NotImplemented(NotImplemented, Span),
}

impl Display for TypeCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            self.span()
                .to_string(format!("type checking failed: {}", self.err()))
                .as_str(),
        )
    }
}

impl TypeCheckError {
    pub fn span(&self) -> Span {
        match self {
            TypeCheckError::TypeMismatch(_, span) => span.clone(),
            TypeCheckError::UndefinedVariable(_, span) => span.clone(),
            TypeCheckError::UndefinedConstructor(_, span) => span.clone(),
            TypeCheckError::NotWellFormed(_, span) => span.clone(),
            TypeCheckError::ArityMismatch(_, span) => span.clone(),
            TypeCheckError::UnknownBuiltin(_, span) => span.clone(),
            TypeCheckError::NonStorable(_, span) => span.clone(),
            TypeCheckError::NonSerializable(_, span) => span.clone(),
            TypeCheckError::EmptyMatch(_, span) => span.clone(),
            TypeCheckError::BadMessageField(_, span) => span.clone(),
            TypeCheckError::WriteToReadOnly(_, span) => span.clone(),
            TypeCheckError::RecPrimsTypeDecl(_, span) => span.clone(),
            TypeCheckError::UnknownBlockchainField(_, span) => span.clone(),
            TypeCheckError::NotImplemented(_, span) => span.clone(),
        }
    }

    fn err(&self) -> Box<dyn Error> {
        match self {
            TypeCheckError::TypeMismatch(e, _) => Box::new(e.clone()),
            TypeCheckError::UndefinedVariable(e, _) => Box::new(e.clone()),
            TypeCheckError::UndefinedConstructor(e, _) => Box::new(e.clone()),
            TypeCheckError::NotWellFormed(e, _) => Box::new(e.clone()),
            TypeCheckError::ArityMismatch(e, _) => Box::new(e.clone()),
            TypeCheckError::UnknownBuiltin(e, _) => Box::new(e.clone()),
            TypeCheckError::NonStorable(e, _) => Box::new(e.clone()),
            TypeCheckError::NonSerializable(e, _) => Box::new(e.clone()),
            TypeCheckError::EmptyMatch(e, _) => Box::new(e.clone()),
            TypeCheckError::BadMessageField(e, _) => Box::new(e.clone()),
            TypeCheckError::WriteToReadOnly(e, _) => Box::new(e.clone()),
            TypeCheckError::RecPrimsTypeDecl(e, _) => Box::new(e.clone()),
            TypeCheckError::UnknownBlockchainField(e, _) => Box::new(e.clone()),
            TypeCheckError::NotImplemented(e, _) => Box::new(e.clone()),
        }
    }
}

impl Error for TypeCheckError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMismatch {
    pub expected: Type,
    pub got: Type,
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "expected type '{}' but got '{}'",
            self.expected, self.got
        ))
    }
}

impl Error for TypeMismatch {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndefinedVariable {
    pub variable_name: String,
}

impl Display for UndefinedVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "tried to access undefined variable '{}'",
            self.variable_name
        ))
    }
}

impl Error for UndefinedVariable {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndefinedConstructor {
    pub constructor_name: String,
}

impl Display for UndefinedConstructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "unknown constructor '{}'",
            self.constructor_name
        ))
    }
}

impl Error for UndefinedConstructor {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotWellFormed {
    pub type_name: TypeName,
}

impl Display for NotWellFormed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("type '{}' is not well formed", self.type_name))
    }
}

impl Error for NotWellFormed {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArityMismatch {
    pub context: String,
    pub expected: usize,
    pub got: usize,
}

impl ArityMismatch {
    pub fn new(context: impl ToString, expected: usize, got: usize) -> ArityMismatch {
        ArityMismatch {
            context: context.to_string(),
            expected,
            got,
        }
    }
}

impl Display for ArityMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} expects {} argument(s) but got {}",
            self.context, self.expected, self.got
        ))
    }
}

impl Error for ArityMismatch {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBuiltin {
    pub op: String,
    pub arg_types: Vec<Type>,
}

impl Display for UnknownBuiltin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args = self
            .arg_types
            .iter()
            .map(|ty| format!("{ty}"))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_fmt(format_args!(
            "no builtin operator '{}' for argument types ({args})",
            self.op
        ))
    }
}

impl Error for UnknownBuiltin {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonStorable {
    pub ty: Type,
}

impl Display for NonStorable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "type '{}' cannot be stored in a contract field",
            self.ty
        ))
    }
}

impl Error for NonStorable {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonSerializable {
    pub ty: Type,
}

impl Display for NonSerializable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "type '{}' cannot cross the contract boundary",
            self.ty
        ))
    }
}

impl Error for NonSerializable {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyMatch;

impl Display for EmptyMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("match construct with no branches")
    }
}

impl Error for EmptyMatch {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadMessageField {
    pub field: String,
    pub expected: Type,
    /// `None` when the mandatory field is missing altogether.
    pub got: Option<Type>,
}

impl Display for BadMessageField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.got {
            Some(got) => f.write_fmt(format_args!(
                "message field '{}' must have type '{}' but got '{got}'",
                self.field, self.expected
            )),
            None => f.write_fmt(format_args!(
                "mandatory message field '{}' of type '{}' is absent",
                self.field, self.expected
            )),
        }
    }
}

impl Error for BadMessageField {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteToReadOnly {
    pub field: String,
}

impl Display for WriteToReadOnly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "field '{}' is read only and cannot be written",
            self.field
        ))
    }
}

impl Error for WriteToReadOnly {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecPrimsTypeDecl {
    pub name: String,
}

impl Display for RecPrimsTypeDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "type declaration '{}' is not allowed among recursion primitives",
            self.name
        ))
    }
}

impl Error for RecPrimsTypeDecl {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownBlockchainField {
    pub name: String,
}

impl Display for UnknownBlockchainField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("unknown blockchain value '{}'", self.name))
    }
}

impl Error for UnknownBlockchainField {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotImplemented {
    pub construct: String,
}

impl Display for NotImplemented {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("'{}' is not supported", self.construct))
    }
}

impl Error for NotImplemented {}
