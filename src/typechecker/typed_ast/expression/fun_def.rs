use crate::{
    ast::FunDef,
    typechecker::{
        context::Context,
        types::{QualifiedType, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

use super::id::add_type_to_ident;

impl TypeCheckable for FunDef<()> {
    type Typed = FunDef<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let FunDef {
            param,
            param_type,
            body,
            position,
            ..
        } = self;

        let arg_type: Type = (&param_type, &*ctx).try_into()?;

        // the parameter is only visible inside the body
        let mut inner = ctx.clone();
        inner
            .env
            .add(&param.name, QualifiedType::plain(arg_type.clone()));

        let param = add_type_to_ident(param, QualifiedType::plain(arg_type.clone()), &inner);
        let body = body.check(&mut inner)?;

        let fun_type = Type::fun(arg_type, body.get_info().ty().clone());

        Ok(FunDef {
            param,
            param_type,
            body: Box::new(body),
            info: TypeInformation::new(QualifiedType::plain(fun_type), ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let FunDef {
            param,
            param_type,
            body,
            position,
            ..
        } = this;

        FunDef {
            param: TypeCheckable::revert(param),
            param_type: param_type.clone(),
            body: Box::new(TypeCheckable::revert(&**body)),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{Expression, FunDef, Id, Span, TypeName};
    use crate::typechecker::{context::Context, error::TypeCheckError, types::Type, TypeCheckable};

    fn identity_fun(param_type: TypeName) -> FunDef<()> {
        FunDef {
            param: Id::new("x"),
            param_type,
            body: Box::new(Expression::Var(Id::new("x"))),
            info: (),
            position: Span::default(),
        }
    }

    #[test]
    fn test_arrow_type() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        let fun = identity_fun(TypeName::named("Uint128")).check(&mut ctx)?;

        assert_eq!(*fun.info.ty(), Type::fun(Type::uint128(), Type::uint128()));
        assert_eq!(*fun.param.info.ty(), Type::uint128());

        Ok(())
    }

    #[test]
    fn test_parameter_does_not_escape() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        identity_fun(TypeName::named("Uint128")).check(&mut ctx)?;

        assert!(!ctx.env.contains("x"));

        Ok(())
    }

    #[test]
    fn test_malformed_annotation() {
        let mut ctx = Context::default();

        let res = identity_fun(TypeName::named("NoSuchType")).check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::NotWellFormed(..))));
    }
}
