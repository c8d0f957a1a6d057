use log::{debug, trace};

use crate::{
    ast::{Field, LibVar, Parameter, Transition},
    typechecker::{
        context::Context,
        error::{NonSerializable, NonStorable, TypeCheckError},
        types::{assert_type_equiv, QualifiedType},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

use super::expression::id::add_type_to_ident;

/// A library binding: the checked value becomes visible to every later
/// entry through the context.
impl TypeCheckable for LibVar<()> {
    type Typed = LibVar<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let LibVar {
            name,
            expr,
            position,
        } = self;

        let expr = expr.check(ctx)?;
        let type_id = expr.get_info().type_id;

        trace!("library binding '{}' : {}", name.name, type_id);

        ctx.env.add(&name.name, type_id.clone());
        let name = add_type_to_ident(name, type_id, ctx);

        Ok(LibVar {
            name,
            expr,
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let LibVar {
            name,
            expr,
            position,
        } = this;

        LibVar {
            name: TypeCheckable::revert(name),
            expr: TypeCheckable::revert(expr),
            position: position.clone(),
        }
    }
}

/// Contract and transition parameters: explicitly typed binders whose types
/// must be able to cross the contract boundary.
impl TypeCheckable for Parameter<()> {
    type Typed = Parameter<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Parameter {
            name,
            type_name,
            position,
        } = self;

        let type_id: QualifiedType = (&type_name, &*ctx).try_into()?;

        if !type_id.type_id.is_serializable() {
            return Err(TypeCheckError::NonSerializable(
                NonSerializable {
                    ty: type_id.type_id,
                },
                type_name.position(),
            ));
        }

        ctx.env.add(&name.name, type_id.clone());
        let name = add_type_to_ident(name, type_id, ctx);

        Ok(Parameter {
            name,
            type_name,
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Parameter {
            name,
            type_name,
            position,
        } = this;

        Parameter {
            name: TypeCheckable::revert(name),
            type_name: type_name.clone(),
            position: position.clone(),
        }
    }
}

/// A contract field: the declared type must be storable and must agree
/// with the initializer, which runs in the pure environment.
impl TypeCheckable for Field<()> {
    type Typed = Field<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Field {
            name,
            type_name,
            init,
            position,
        } = self;

        let declared: QualifiedType = (&type_name, &*ctx).try_into()?;

        if !declared.type_id.is_storable() {
            return Err(TypeCheckError::NonStorable(
                NonStorable {
                    ty: declared.type_id,
                },
                type_name.position(),
            ));
        }

        let init = init.check(ctx)?;
        assert_type_equiv(&declared.type_id, init.get_info().ty(), &init.position())?;

        let name = add_type_to_ident(name, declared, ctx);

        Ok(Field {
            name,
            type_name,
            init,
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Field {
            name,
            type_name,
            init,
            position,
        } = this;

        Field {
            name: TypeCheckable::revert(name),
            type_name: type_name.clone(),
            init: TypeCheckable::revert(init),
            position: position.clone(),
        }
    }
}

/// A transition checks under its own copy of the environment: the caller
/// clones the context, so bindings never leak across transitions. Implicit
/// parameters are injected before the declared ones.
impl TypeCheckable for Transition<()> {
    type Typed = Transition<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let Transition {
            name,
            params,
            body,
            position,
        } = self;

        debug!("type checking transition '{name}'");

        for (param, ty) in ctx.host.transition_params().to_vec() {
            ctx.env.add(param, QualifiedType::plain(ty));
        }

        let mut typed_params = vec![];
        for param in params {
            typed_params.push(param.check(ctx)?);
        }

        let mut typed_body = vec![];
        for statement in body {
            typed_body.push(statement.check(ctx)?);
        }

        Ok(Transition {
            name,
            params: typed_params,
            body: typed_body,
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let Transition {
            name,
            params,
            body,
            position,
        } = this;

        Transition {
            name: name.clone(),
            params: params.iter().map(TypeCheckable::revert).collect(),
            body: body.iter().map(TypeCheckable::revert).collect(),
            position: position.clone(),
        }
    }
}
