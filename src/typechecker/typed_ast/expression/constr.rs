use crate::{
    ast::Constr,
    typechecker::{
        context::Context,
        error::{ArityMismatch, TypeCheckError, UndefinedConstructor},
        types::{QualifiedType, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

use super::id::add_type_to_ident;

impl TypeCheckable for Constr<()> {
    type Typed = Constr<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Constr {
            name,
            type_args,
            args,
            position,
            ..
        } = self;

        let mut resolved_type_args = vec![];
        for type_arg in &type_args {
            resolved_type_args.push(Type::try_from((type_arg, &*ctx))?);
        }

        let adts = ctx.adts.clone();

        let Some((_, ctr)) = adts.lookup_constructor(&name.name) else {
            return Err(TypeCheckError::UndefinedConstructor(
                UndefinedConstructor {
                    constructor_name: name.name.clone(),
                },
                name.position.clone(),
            ));
        };

        if ctr.arity() != args.len() {
            return Err(TypeCheckError::ArityMismatch(
                ArityMismatch::new(
                    format!("constructor '{}'", name.name),
                    ctr.arity(),
                    args.len(),
                ),
                position,
            ));
        }

        // the constructor denotes a function type once instantiated; the
        // saturated application yields the algebraic type itself
        let ctr_type = adts.elab_constr_type(&name.name, &resolved_type_args, &position)?;

        let mut typed_args = vec![];
        let mut arg_types = vec![];
        for arg in args {
            let arg = arg.check(ctx)?;
            arg_types.push(arg.info.ty().clone());
            typed_args.push(arg);
        }

        let result = ctr_type.applied_to(&arg_types, &position)?;

        let name = add_type_to_ident(name, QualifiedType::plain(ctr_type), ctx);

        Ok(Constr {
            name,
            type_args,
            args: typed_args,
            info: TypeInformation::new(QualifiedType::plain(result), ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Constr {
            name,
            type_args,
            args,
            position,
            ..
        } = this;

        Constr {
            name: TypeCheckable::revert(name),
            type_args: type_args.clone(),
            args: args.iter().map(TypeCheckable::revert).collect(),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{Constr, Id, Span, TypeName};
    use crate::typechecker::{
        context::Context,
        error::TypeCheckError,
        types::{QualifiedType, Type},
        TypeCheckable,
    };

    fn constr(name: &str, type_args: Vec<TypeName>, args: &[&str]) -> Constr<()> {
        Constr {
            name: Id::new(name),
            type_args,
            args: args.iter().map(Id::new).collect(),
            info: (),
            position: Span::default(),
        }
    }

    #[test]
    fn test_nullary_constructor() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        let none = constr("None", vec![TypeName::named("ByStr32")], &[]).check(&mut ctx)?;

        assert_eq!(*none.info.ty(), Type::option_of(Type::bystr_x(32)));

        Ok(())
    }

    #[test]
    fn test_saturated_constructor() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();
        ctx.env.add("h", QualifiedType::plain(Type::bystr_x(32)));

        let some = constr("Some", vec![TypeName::named("ByStr32")], &["h"]).check(&mut ctx)?;

        assert_eq!(*some.info.ty(), Type::option_of(Type::bystr_x(32)));
        assert_eq!(
            *some.name.info.ty(),
            Type::fun(Type::bystr_x(32), Type::option_of(Type::bystr_x(32)))
        );

        Ok(())
    }

    #[test]
    fn test_wrong_value_arity() {
        let mut ctx = Context::default();

        let res = constr("Some", vec![TypeName::named("ByStr32")], &[]).check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::ArityMismatch(..))));
    }

    #[test]
    fn test_wrong_argument_type() {
        let mut ctx = Context::default();
        ctx.env.add("n", QualifiedType::plain(Type::uint128()));

        let res = constr("Some", vec![TypeName::named("ByStr32")], &["n"]).check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::TypeMismatch(..))));
    }

    #[test]
    fn test_unknown_constructor() {
        let mut ctx = Context::default();

        let res = constr("Kons", vec![], &[]).check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::UndefinedConstructor(..))));
    }
}
