use crate::{
    ast::Lit,
    typechecker::{
        context::Context,
        types::{literal_type, QualifiedType},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for Lit<()> {
    type Typed = Lit<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Lit { value, position, .. } = self;

        let type_id = QualifiedType::plain(literal_type(&value));

        Ok(Lit {
            value,
            info: TypeInformation::new(type_id, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Lit { value, position, .. } = this;

        Lit {
            value: value.clone(),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{IntWidth, Lit, Literal};
    use crate::typechecker::{context::Context, types::Type, TypeCheckable};

    #[test]
    fn test_literal_typing() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        let lit = Lit::new(Literal::UintLit(IntWidth::W128, "0".into())).check(&mut ctx)?;
        assert_eq!(*lit.info.ty(), Type::uint128());

        let lit = Lit::new(Literal::ByStrXLit(vec![0u8; 20])).check(&mut ctx)?;
        assert_eq!(*lit.info.ty(), Type::address());

        Ok(())
    }
}
