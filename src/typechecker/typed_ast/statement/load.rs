use crate::{
    ast::Load,
    typechecker::{
        context::Context, typed_ast::expression::id::add_type_to_ident, TypeCheckable,
        TypeInformation, TypeResult,
    },
};

impl TypeCheckable for Load<()> {
    type Typed = Load<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Load {
            target,
            field,
            position,
            ..
        } = self;

        let field_type = ctx.fields.resolve(&field.name, &field.position)?;

        // the loaded value is visible to the rest of the block
        ctx.env.add(&target.name, field_type.clone());

        let field = add_type_to_ident(field, field_type.clone(), ctx);
        let target = add_type_to_ident(target, field_type.clone(), ctx);

        Ok(Load {
            target,
            field,
            info: TypeInformation::new(field_type, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Load {
            target,
            field,
            position,
            ..
        } = this;

        Load {
            target: TypeCheckable::revert(target),
            field: TypeCheckable::revert(field),
            info: (),
            position: position.clone(),
        }
    }
}
