use crate::{
    ast::Id,
    typechecker::{
        context::Context, types::QualifiedType, TypeCheckable, TypeInformation, TypeResult,
    },
};

/// Attach a type to an identifier occurrence. Every site that annotates an
/// identifier, binder or use alike, goes through this single helper.
pub(crate) fn add_type_to_ident(
    id: Id<()>,
    type_id: QualifiedType,
    ctx: &Context,
) -> Id<TypeInformation> {
    let Id { name, position, .. } = id;

    Id {
        name,
        info: TypeInformation::new(type_id, ctx),
        position,
    }
}

impl TypeCheckable for Id<()> {
    type Typed = Id<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let type_id = ctx.env.resolve(&self.name, &self.position)?;
        Ok(add_type_to_ident(self, type_id, ctx))
    }

    fn revert(this: &Self::Typed) -> Self {
        let Id { name, position, .. } = this;

        Id {
            name: name.to_owned(),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{Id, Span};
    use crate::typechecker::{
        context::Context,
        error::{TypeCheckError, UndefinedVariable},
        types::{QualifiedType, Type},
        TypeCheckable,
    };

    #[test]
    fn test_resolution_from_env() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();
        ctx.env.add("owner", QualifiedType::plain(Type::address()));

        let id = Id::new("owner").check(&mut ctx)?;

        assert_eq!(id.info.type_id, QualifiedType::plain(Type::address()));

        Ok(())
    }

    #[test]
    fn test_error_on_undefined() {
        let mut ctx = Context::default();

        let res = Id::new("owner").check(&mut ctx);

        assert_eq!(
            res,
            Err(TypeCheckError::UndefinedVariable(
                UndefinedVariable {
                    variable_name: "owner".into()
                },
                Span::default()
            ))
        );
    }
}
