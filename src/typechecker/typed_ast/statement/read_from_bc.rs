use crate::{
    ast::ReadFromBC,
    typechecker::{
        context::Context,
        error::{TypeCheckError, UnknownBlockchainField},
        typed_ast::expression::id::add_type_to_ident,
        types::QualifiedType,
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for ReadFromBC<()> {
    type Typed = ReadFromBC<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let ReadFromBC {
            target,
            field,
            position,
            ..
        } = self;

        let Some(field_type) = ctx.host.blockchain_field(&field).cloned() else {
            return Err(TypeCheckError::UnknownBlockchainField(
                UnknownBlockchainField { name: field },
                position,
            ));
        };

        let bound = QualifiedType::plain(field_type);
        ctx.env.add(&target.name, bound.clone());
        let target = add_type_to_ident(target, bound.clone(), ctx);

        Ok(ReadFromBC {
            target,
            field,
            info: TypeInformation::new(bound, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let ReadFromBC {
            target,
            field,
            position,
            ..
        } = this;

        ReadFromBC {
            target: TypeCheckable::revert(target),
            field: field.clone(),
            info: (),
            position: position.clone(),
        }
    }
}
