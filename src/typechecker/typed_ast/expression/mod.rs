mod app;
mod builtin;
mod constr;
mod fixpoint;
mod fun_def;
pub(crate) mod id;
mod let_in;
mod lit;
mod match_expr;
mod message;
mod type_app;
mod type_fun;

use crate::{
    ast::Expression,
    typechecker::{context::Context, TypeCheckable, TypeInformation, TypeResult},
};

impl TypeCheckable for Expression<()> {
    type Typed = Expression<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        match self {
            Expression::Lit(lit) => Ok(Expression::Lit(lit.check(ctx)?)),
            Expression::Var(id) => Ok(Expression::Var(id.check(ctx)?)),
            Expression::FunDef(fun_def) => Ok(Expression::FunDef(fun_def.check(ctx)?)),
            Expression::App(app) => Ok(Expression::App(app.check(ctx)?)),
            Expression::Builtin(builtin) => Ok(Expression::Builtin(builtin.check(ctx)?)),
            Expression::Let(let_in) => Ok(Expression::Let(let_in.check(ctx)?)),
            Expression::Constr(constr) => Ok(Expression::Constr(constr.check(ctx)?)),
            Expression::Match(match_expr) => Ok(Expression::Match(match_expr.check(ctx)?)),
            Expression::Fixpoint(fixpoint) => Ok(Expression::Fixpoint(fixpoint.check(ctx)?)),
            Expression::TFun(type_fun) => Ok(Expression::TFun(type_fun.check(ctx)?)),
            Expression::TApp(type_app) => Ok(Expression::TApp(type_app.check(ctx)?)),
            Expression::Message(message) => Ok(Expression::Message(message.check(ctx)?)),
        }
    }

    fn revert(this: &Self::Typed) -> Self {
        match this {
            Expression::Lit(lit) => Expression::Lit(TypeCheckable::revert(lit)),
            Expression::Var(id) => Expression::Var(TypeCheckable::revert(id)),
            Expression::FunDef(fun_def) => Expression::FunDef(TypeCheckable::revert(fun_def)),
            Expression::App(app) => Expression::App(TypeCheckable::revert(app)),
            Expression::Builtin(builtin) => Expression::Builtin(TypeCheckable::revert(builtin)),
            Expression::Let(let_in) => Expression::Let(TypeCheckable::revert(let_in)),
            Expression::Constr(constr) => Expression::Constr(TypeCheckable::revert(constr)),
            Expression::Match(match_expr) => Expression::Match(TypeCheckable::revert(match_expr)),
            Expression::Fixpoint(fixpoint) => Expression::Fixpoint(TypeCheckable::revert(fixpoint)),
            Expression::TFun(type_fun) => Expression::TFun(TypeCheckable::revert(type_fun)),
            Expression::TApp(type_app) => Expression::TApp(TypeCheckable::revert(type_app)),
            Expression::Message(message) => Expression::Message(TypeCheckable::revert(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{Expression, Id, IntWidth, LetIn, Lit, Literal, Span};
    use crate::typechecker::{context::Context, types::Type, TypeCheckable};

    #[test]
    fn test_revert_round_trip() -> Result<(), Box<dyn Error>> {
        let expr: Expression<()> = Expression::Let(LetIn {
            binder: Id::new("x"),
            annotation: None,
            value: Box::new(Expression::Lit(Lit::new(Literal::UintLit(
                IntWidth::W128,
                "1".into(),
            )))),
            body: Box::new(Expression::Var(Id::new("x"))),
            info: (),
            position: Span::default(),
        });

        let mut ctx = Context::default();
        let typed = expr.clone().check(&mut ctx)?;

        let reverted: Expression<()> = TypeCheckable::revert(&typed);
        assert_eq!(reverted, expr);

        // checking the reverted expression reproduces the annotations
        let retyped = reverted.check(&mut Context::default())?;
        assert_eq!(retyped, typed);
        assert_eq!(*retyped.get_info().ty(), Type::uint128());

        Ok(())
    }

    #[test]
    fn test_environment_extension_preserves_types() -> Result<(), Box<dyn Error>> {
        use crate::typechecker::types::QualifiedType;

        let expr: Expression<()> = Expression::Var(Id::new("x"));

        let mut ctx = Context::default();
        ctx.env.add("x", QualifiedType::plain(Type::uint128()));
        let typed = expr.clone().check(&mut ctx)?;

        // extending the environment with unrelated bindings changes nothing
        let mut extended = ctx.clone();
        extended.env.add("y", QualifiedType::plain(Type::string()));
        let retyped = expr.check(&mut extended)?;

        assert_eq!(typed.get_info().type_id, retyped.get_info().type_id);

        Ok(())
    }
}
