use crate::{
    ast::TypeFun,
    typechecker::{
        context::Context,
        types::{QualifiedType, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for TypeFun<()> {
    type Typed = TypeFun<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let TypeFun {
            type_var,
            body,
            position,
            ..
        } = self;

        // the abstracted variable is in scope only inside the body
        let mut inner = ctx.clone();
        inner.env.add_type_var(&type_var);

        let body = body.check(&mut inner)?;
        let poly = Type::poly(&type_var, body.get_info().ty().clone());

        Ok(TypeFun {
            type_var,
            body: Box::new(body),
            info: TypeInformation::new(QualifiedType::plain(poly), ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let TypeFun {
            type_var,
            body,
            position,
            ..
        } = this;

        TypeFun {
            type_var: type_var.clone(),
            body: Box::new(TypeCheckable::revert(&**body)),
            info: (),
            position: position.clone(),
        }
    }
}
