use crate::{
    ast::Bind,
    typechecker::{
        context::Context, typed_ast::expression::id::add_type_to_ident, TypeCheckable,
        TypeInformation, TypeResult,
    },
};

impl TypeCheckable for Bind<()> {
    type Typed = Bind<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Bind {
            target,
            value,
            position,
            ..
        } = self;

        let value = value.check(ctx)?;
        let value_type = value.get_info().type_id;

        ctx.env.add(&target.name, value_type.clone());
        let target = add_type_to_ident(target, value_type.clone(), ctx);

        Ok(Bind {
            target,
            value: Box::new(value),
            info: TypeInformation::new(value_type, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Bind {
            target,
            value,
            position,
            ..
        } = this;

        Bind {
            target: TypeCheckable::revert(target),
            value: Box::new(TypeCheckable::revert(&**value)),
            info: (),
            position: position.clone(),
        }
    }
}
