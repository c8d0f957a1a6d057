mod app;
mod builtin;
mod constr;
mod fixpoint;
mod fun_def;
mod id;
mod let_in;
mod lit;
mod match_expr;
mod message;
mod type_app;
mod type_fun;

pub use self::app::*;
pub use self::builtin::*;
pub use self::constr::*;
pub use self::fixpoint::*;
pub use self::fun_def::*;
pub use self::id::*;
pub use self::let_in::*;
pub use self::lit::*;
pub use self::match_expr::*;
pub use self::message::*;
pub use self::type_app::*;
pub use self::type_fun::*;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Span;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expression<T> {
    Lit(Lit<T>),
    Var(Id<T>),
    FunDef(FunDef<T>),
    App(App<T>),
    Builtin(BuiltinCall<T>),
    Let(LetIn<T>),
    Constr(Constr<T>),
    Match(MatchExpr<T>),
    Fixpoint(Fixpoint<T>),
    TFun(TypeFun<T>),
    TApp(TypeApp<T>),
    Message(MessageExpr<T>),
}

impl<T> Expression<T>
where
    T: Clone,
{
    pub fn get_info(&self) -> T {
        match self {
            Expression::Lit(Lit { info, .. }) => info.clone(),
            Expression::Var(Id { info, .. }) => info.clone(),
            Expression::FunDef(FunDef { info, .. }) => info.clone(),
            Expression::App(App { info, .. }) => info.clone(),
            Expression::Builtin(BuiltinCall { info, .. }) => info.clone(),
            Expression::Let(LetIn { info, .. }) => info.clone(),
            Expression::Constr(Constr { info, .. }) => info.clone(),
            Expression::Match(MatchExpr { info, .. }) => info.clone(),
            Expression::Fixpoint(Fixpoint { info, .. }) => info.clone(),
            Expression::TFun(TypeFun { info, .. }) => info.clone(),
            Expression::TApp(TypeApp { info, .. }) => info.clone(),
            Expression::Message(MessageExpr { info, .. }) => info.clone(),
        }
    }

    pub fn position(&self) -> Span {
        match self {
            Expression::Lit(Lit { position, .. }) => position.clone(),
            Expression::Var(Id { position, .. }) => position.clone(),
            Expression::FunDef(FunDef { position, .. }) => position.clone(),
            Expression::App(App { position, .. }) => position.clone(),
            Expression::Builtin(BuiltinCall { position, .. }) => position.clone(),
            Expression::Let(LetIn { position, .. }) => position.clone(),
            Expression::Constr(Constr { position, .. }) => position.clone(),
            Expression::Match(MatchExpr { position, .. }) => position.clone(),
            Expression::Fixpoint(Fixpoint { position, .. }) => position.clone(),
            Expression::TFun(TypeFun { position, .. }) => position.clone(),
            Expression::TApp(TypeApp { position, .. }) => position.clone(),
            Expression::Message(MessageExpr { position, .. }) => position.clone(),
        }
    }
}

impl<T> Expression<T> {
    /// The free value identifiers of this expression. Drives the
    /// dependency-aware skipping of library entries whose prerequisites
    /// failed to check.
    pub fn free_vars(&self) -> HashSet<String> {
        let mut vars = HashSet::new();
        self.collect_free_vars(&mut vars);
        vars
    }

    fn collect_free_vars(&self, vars: &mut HashSet<String>) {
        match self {
            Expression::Lit(_) => {}
            Expression::Var(id) => {
                vars.insert(id.name.clone());
            }
            Expression::FunDef(FunDef { param, body, .. }) => {
                let mut inner = body.free_vars();
                inner.remove(&param.name);
                vars.extend(inner);
            }
            Expression::App(App { func, args, .. }) => {
                vars.insert(func.name.clone());
                vars.extend(args.iter().map(|arg| arg.name.clone()));
            }
            Expression::Builtin(BuiltinCall { args, .. }) => {
                vars.extend(args.iter().map(|arg| arg.name.clone()));
            }
            Expression::Let(LetIn {
                binder, value, body, ..
            }) => {
                value.collect_free_vars(vars);
                let mut inner = body.free_vars();
                inner.remove(&binder.name);
                vars.extend(inner);
            }
            Expression::Constr(Constr { args, .. }) => {
                vars.extend(args.iter().map(|arg| arg.name.clone()));
            }
            Expression::Match(MatchExpr {
                scrutinee, clauses, ..
            }) => {
                vars.insert(scrutinee.name.clone());
                for clause in clauses {
                    let mut bound = HashSet::new();
                    clause.pattern.bound_names(&mut bound);
                    let mut inner = clause.body.free_vars();
                    for name in bound {
                        inner.remove(&name);
                    }
                    vars.extend(inner);
                }
            }
            Expression::Fixpoint(Fixpoint { binder, body, .. }) => {
                let mut inner = body.free_vars();
                inner.remove(&binder.name);
                vars.extend(inner);
            }
            Expression::TFun(TypeFun { body, .. }) => body.collect_free_vars(vars),
            Expression::TApp(TypeApp { func, .. }) => {
                vars.insert(func.name.clone());
            }
            Expression::Message(MessageExpr { entries, .. }) => {
                for entry in entries {
                    if let MessagePayload::Var(id) = &entry.payload {
                        vars.insert(id.name.clone());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Expression, Id, IntWidth, LetIn, Lit, Literal, Span};

    #[test]
    fn test_free_vars_of_let() {
        let expr: Expression<()> = Expression::Let(LetIn {
            binder: Id::new("x"),
            annotation: None,
            value: Box::new(Expression::Var(Id::new("y"))),
            body: Box::new(Expression::Var(Id::new("x"))),
            info: (),
            position: Span::default(),
        });

        let vars = expr.free_vars();
        assert!(vars.contains("y"));
        assert!(!vars.contains("x"));
    }

    #[test]
    fn test_literals_have_no_free_vars() {
        let expr: Expression<()> =
            Expression::Lit(Lit::new(Literal::UintLit(IntWidth::W128, "42".into())));

        assert!(expr.free_vars().is_empty());
    }
}
