use crate::{
    ast::App,
    typechecker::{
        context::Context, types::QualifiedType, TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for App<()> {
    type Typed = App<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let App {
            func,
            args,
            position,
            ..
        } = self;

        let func = func.check(ctx)?;

        let mut typed_args = vec![];
        let mut arg_types = vec![];
        for arg in args {
            let arg = arg.check(ctx)?;
            arg_types.push(arg.info.ty().clone());
            typed_args.push(arg);
        }

        let result = func.info.ty().applied_to(&arg_types, &position)?;

        Ok(App {
            func,
            args: typed_args,
            info: TypeInformation::new(QualifiedType::plain(result), ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let App {
            func,
            args,
            position,
            ..
        } = this;

        App {
            func: TypeCheckable::revert(func),
            args: args.iter().map(TypeCheckable::revert).collect(),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{App, Id, Span};
    use crate::typechecker::{
        context::Context,
        error::TypeCheckError,
        types::{QualifiedType, Type},
        TypeCheckable,
    };

    fn call(func: &str, args: &[&str]) -> App<()> {
        App {
            func: Id::new(func),
            args: args.iter().map(Id::new).collect(),
            info: (),
            position: Span::default(),
        }
    }

    #[test]
    fn test_full_application() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();
        ctx.env.add(
            "add_one",
            QualifiedType::plain(Type::fun(Type::uint128(), Type::uint128())),
        );
        ctx.env.add("n", QualifiedType::plain(Type::uint128()));

        let app = call("add_one", &["n"]).check(&mut ctx)?;

        assert_eq!(*app.info.ty(), Type::uint128());

        Ok(())
    }

    #[test]
    fn test_partial_application() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();
        ctx.env.add(
            "pair_up",
            QualifiedType::plain(Type::fun(
                Type::uint128(),
                Type::fun(Type::string(), Type::pair_of(Type::uint128(), Type::string())),
            )),
        );
        ctx.env.add("n", QualifiedType::plain(Type::uint128()));

        let app = call("pair_up", &["n"]).check(&mut ctx)?;

        assert_eq!(
            *app.info.ty(),
            Type::fun(Type::string(), Type::pair_of(Type::uint128(), Type::string()))
        );

        Ok(())
    }

    #[test]
    fn test_argument_mismatch() {
        let mut ctx = Context::default();
        ctx.env.add(
            "add_one",
            QualifiedType::plain(Type::fun(Type::uint128(), Type::uint128())),
        );
        ctx.env.add("s", QualifiedType::plain(Type::string()));

        let res = call("add_one", &["s"]).check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::TypeMismatch(..))));
    }

    #[test]
    fn test_over_application() {
        let mut ctx = Context::default();
        ctx.env.add(
            "add_one",
            QualifiedType::plain(Type::fun(Type::uint128(), Type::uint128())),
        );
        ctx.env.add("n", QualifiedType::plain(Type::uint128()));

        let res = call("add_one", &["n", "n"]).check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::ArityMismatch(..))));
    }
}
