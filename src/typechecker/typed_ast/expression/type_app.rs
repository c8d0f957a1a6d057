use crate::{
    ast::TypeApp,
    typechecker::{
        context::Context,
        types::{QualifiedType, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for TypeApp<()> {
    type Typed = TypeApp<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let TypeApp {
            func,
            type_args,
            position,
            ..
        } = self;

        let func = func.check(ctx)?;

        let mut resolved = vec![];
        for type_arg in &type_args {
            resolved.push(Type::try_from((type_arg, &*ctx))?);
        }

        let result = func.info.ty().elab_with_type_args(&resolved, &position)?;

        Ok(TypeApp {
            func,
            type_args,
            info: TypeInformation::new(QualifiedType::plain(result), ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let TypeApp {
            func,
            type_args,
            position,
            ..
        } = this;

        TypeApp {
            func: TypeCheckable::revert(func),
            type_args: type_args.clone(),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{Id, Span, TypeApp, TypeName};
    use crate::typechecker::{
        context::Context,
        error::TypeCheckError,
        types::{QualifiedType, Type},
        TypeCheckable,
    };

    fn polymorphic_identity() -> QualifiedType {
        QualifiedType::plain(Type::poly("A", Type::fun(Type::tvar("A"), Type::tvar("A"))))
    }

    #[test]
    fn test_instantiation() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();
        ctx.env.add("identity", polymorphic_identity());

        let tapp = TypeApp {
            func: Id::new("identity"),
            type_args: vec![TypeName::named("Uint128")],
            info: (),
            position: Span::default(),
        }
        .check(&mut ctx)?;

        assert_eq!(*tapp.info.ty(), Type::fun(Type::uint128(), Type::uint128()));

        Ok(())
    }

    #[test]
    fn test_too_many_type_args() {
        let mut ctx = Context::default();
        ctx.env.add("identity", polymorphic_identity());

        let res = TypeApp {
            func: Id::new("identity"),
            type_args: vec![TypeName::named("Uint128"), TypeName::named("String")],
            info: (),
            position: Span::default(),
        }
        .check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::ArityMismatch(..))));
    }

    #[test]
    fn test_malformed_type_arg() {
        let mut ctx = Context::default();
        ctx.env.add("identity", polymorphic_identity());

        let res = TypeApp {
            func: Id::new("identity"),
            type_args: vec![TypeName::var("B")],
            info: (),
            position: Span::default(),
        }
        .check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::NotWellFormed(..))));
    }
}
