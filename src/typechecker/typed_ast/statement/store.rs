use crate::{
    ast::Store,
    typechecker::{
        context::Context,
        error::{TypeCheckError, WriteToReadOnly},
        typed_ast::expression::id::add_type_to_ident,
        types::assert_type_equiv,
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for Store<()> {
    type Typed = Store<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Store {
            field,
            value,
            position,
            ..
        } = self;

        if ctx.host.is_read_only(&field.name) {
            return Err(TypeCheckError::WriteToReadOnly(
                WriteToReadOnly {
                    field: field.name.clone(),
                },
                field.position.clone(),
            ));
        }

        let field_type = ctx.fields.resolve(&field.name, &field.position)?;
        let value_type = ctx.env.resolve(&value.name, &value.position)?;

        assert_type_equiv(&field_type.type_id, &value_type.type_id, &position)?;

        let field = add_type_to_ident(field, field_type.clone(), ctx);
        let value = add_type_to_ident(value, value_type, ctx);

        Ok(Store {
            field,
            value,
            info: TypeInformation::new(field_type, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Store {
            field,
            value,
            position,
            ..
        } = this;

        Store {
            field: TypeCheckable::revert(field),
            value: TypeCheckable::revert(value),
            info: (),
            position: position.clone(),
        }
    }
}
