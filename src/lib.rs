use ast::ContractModule;

pub mod ast;
pub mod stdlib;
pub mod typechecker;

pub type Ast<T> = ContractModule<T>;
