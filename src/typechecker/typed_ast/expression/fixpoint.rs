use crate::{
    ast::Fixpoint,
    typechecker::{
        context::Context,
        types::{assert_type_equiv, QualifiedType},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

use super::id::add_type_to_ident;

impl TypeCheckable for Fixpoint<()> {
    type Typed = Fixpoint<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Fixpoint {
            binder,
            annotation,
            body,
            position,
            ..
        } = self;

        let annotated: QualifiedType = (&annotation, &*ctx).try_into()?;

        // the recursive binder is in scope inside the body, at the
        // annotated type
        let mut inner = ctx.clone();
        inner.env.add(&binder.name, annotated.clone());

        let binder = add_type_to_ident(binder, annotated.clone(), &inner);
        let body = body.check(&mut inner)?;

        assert_type_equiv(&annotated.type_id, body.get_info().ty(), &position)?;

        Ok(Fixpoint {
            binder,
            annotation,
            body: Box::new(body),
            info: TypeInformation::new(annotated, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Fixpoint {
            binder,
            annotation,
            body,
            position,
            ..
        } = this;

        Fixpoint {
            binder: TypeCheckable::revert(binder),
            annotation: annotation.clone(),
            body: Box::new(TypeCheckable::revert(&**body)),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{Expression, Fixpoint, Id, Span, TypeName};
    use crate::typechecker::{context::Context, error::TypeCheckError, types::Type, TypeCheckable};

    #[test]
    fn test_recursive_binder_types_the_body() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        let fix = Fixpoint {
            binder: Id::new("go"),
            annotation: TypeName::fun(TypeName::named("Nat"), TypeName::named("Nat")),
            body: Box::new(Expression::Var(Id::new("go"))),
            info: (),
            position: Span::default(),
        }
        .check(&mut ctx)?;

        assert_eq!(*fix.info.ty(), Type::fun(Type::nat_adt(), Type::nat_adt()));

        Ok(())
    }

    #[test]
    fn test_body_must_match_annotation() {
        let mut ctx = Context::default();
        ctx.env.add(
            "zero",
            crate::typechecker::types::QualifiedType::plain(Type::nat_adt()),
        );

        let res = Fixpoint {
            binder: Id::new("go"),
            annotation: TypeName::fun(TypeName::named("Nat"), TypeName::named("Nat")),
            body: Box::new(Expression::Var(Id::new("zero"))),
            info: (),
            position: Span::default(),
        }
        .check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::TypeMismatch(..))));
    }
}
