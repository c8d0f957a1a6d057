use crate::{
    ast::BuiltinCall,
    typechecker::{
        context::Context,
        error::{TypeCheckError, UnknownBuiltin},
        types::QualifiedType,
        TypeCheckable, TypeInformation, TypeResult,
    },
};

use super::id::add_type_to_ident;

impl TypeCheckable for BuiltinCall<()> {
    type Typed = BuiltinCall<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let BuiltinCall {
            op,
            args,
            position,
            ..
        } = self;

        let mut typed_args = vec![];
        let mut arg_types = vec![];
        for arg in args {
            let arg = arg.check(ctx)?;
            arg_types.push(arg.info.ty().clone());
            typed_args.push(arg);
        }

        // operators are overloaded on their full argument type vector
        let Some(sig) = ctx.builtins.find_builtin_op(&op.name, &arg_types) else {
            return Err(TypeCheckError::UnknownBuiltin(
                UnknownBuiltin {
                    op: op.name.clone(),
                    arg_types,
                },
                position,
            ));
        };

        let op = add_type_to_ident(op, QualifiedType::plain(sig.ret.clone()), ctx);

        Ok(BuiltinCall {
            op,
            args: typed_args,
            info: TypeInformation::new(QualifiedType::plain(sig.ret), ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let BuiltinCall {
            op,
            args,
            position,
            ..
        } = this;

        BuiltinCall {
            op: TypeCheckable::revert(op),
            args: args.iter().map(TypeCheckable::revert).collect(),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{BuiltinCall, Id, Span};
    use crate::typechecker::{
        context::Context,
        error::TypeCheckError,
        types::{QualifiedType, Type},
        TypeCheckable,
    };

    fn builtin(op: &str, args: &[&str]) -> BuiltinCall<()> {
        BuiltinCall {
            op: Id::new(op),
            args: args.iter().map(Id::new).collect(),
            info: (),
            position: Span::default(),
        }
    }

    #[test]
    fn test_operator_resolution() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();
        ctx.env.add("a", QualifiedType::plain(Type::uint128()));
        ctx.env.add("b", QualifiedType::plain(Type::uint128()));

        let call = builtin("eq", &["a", "b"]).check(&mut ctx)?;

        assert_eq!(*call.info.ty(), Type::bool_adt());
        // the operator identifier carries the result type
        assert_eq!(*call.op.info.ty(), Type::bool_adt());

        Ok(())
    }

    #[test]
    fn test_unknown_signature() {
        let mut ctx = Context::default();
        ctx.env.add("s", QualifiedType::plain(Type::string()));
        ctx.env.add("n", QualifiedType::plain(Type::uint32()));

        let res = builtin("add", &["s", "n"]).check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::UnknownBuiltin(..))));
    }
}
