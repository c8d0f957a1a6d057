use crate::{
    ast::LetIn,
    typechecker::{
        context::Context,
        types::{assert_type_equiv, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

use super::id::add_type_to_ident;

impl TypeCheckable for LetIn<()> {
    type Typed = LetIn<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let LetIn {
            binder,
            annotation,
            value,
            body,
            position,
            ..
        } = self;

        let value = value.check(ctx)?;
        let value_type = value.get_info().type_id;

        // an annotation constrains the bound value, never the body
        if let Some(annotation) = &annotation {
            let expected: Type = (annotation, &*ctx).try_into()?;
            assert_type_equiv(&expected, &value_type.type_id, &value.position())?;
        }

        let mut inner = ctx.clone();
        inner.env.add(&binder.name, value_type.clone());

        let binder = add_type_to_ident(binder, value_type, &inner);
        let body = body.check(&mut inner)?;
        let info = TypeInformation::new(body.get_info().type_id, ctx);

        Ok(LetIn {
            binder,
            annotation,
            value: Box::new(value),
            body: Box::new(body),
            info,
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let LetIn {
            binder,
            annotation,
            value,
            body,
            position,
            ..
        } = this;

        LetIn {
            binder: TypeCheckable::revert(binder),
            annotation: annotation.clone(),
            value: Box::new(TypeCheckable::revert(&**value)),
            body: Box::new(TypeCheckable::revert(&**body)),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{Expression, Id, IntWidth, LetIn, Lit, Literal, Span, TypeName};
    use crate::typechecker::{context::Context, error::TypeCheckError, types::Type, TypeCheckable};

    fn let_bound_literal(annotation: Option<TypeName>) -> LetIn<()> {
        LetIn {
            binder: Id::new("x"),
            annotation,
            value: Box::new(Expression::Lit(Lit::new(Literal::UintLit(
                IntWidth::W128,
                "1".into(),
            )))),
            body: Box::new(Expression::Var(Id::new("x"))),
            info: (),
            position: Span::default(),
        }
    }

    #[test]
    fn test_body_type_is_result() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        let let_in = let_bound_literal(None).check(&mut ctx)?;

        assert_eq!(*let_in.info.ty(), Type::uint128());
        assert_eq!(*let_in.binder.info.ty(), Type::uint128());

        Ok(())
    }

    #[test]
    fn test_matching_annotation() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        let let_in = let_bound_literal(Some(TypeName::named("Uint128"))).check(&mut ctx)?;

        assert_eq!(*let_in.info.ty(), Type::uint128());

        Ok(())
    }

    #[test]
    fn test_mismatched_annotation() {
        let mut ctx = Context::default();

        let res = let_bound_literal(Some(TypeName::named("Int32"))).check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::TypeMismatch(..))));
    }

    #[test]
    fn test_binder_does_not_escape() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        let_bound_literal(None).check(&mut ctx)?;

        assert!(!ctx.env.contains("x"));

        Ok(())
    }
}
