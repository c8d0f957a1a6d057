use crate::{
    ast::{AcceptPayment, CreateEvnt, SendMsgs, Throw},
    typechecker::{
        context::Context,
        error::{NotImplemented, TypeCheckError},
        typed_ast::expression::id::add_type_to_ident,
        types::{assert_type_equiv, QualifiedType, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for AcceptPayment<()> {
    type Typed = AcceptPayment<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let AcceptPayment { position, .. } = self;

        // no obligations; the accepted amount is a Uint128
        Ok(AcceptPayment {
            info: TypeInformation::new(QualifiedType::plain(Type::uint128()), ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        AcceptPayment {
            info: (),
            position: this.position.clone(),
        }
    }
}

impl TypeCheckable for SendMsgs<()> {
    type Typed = SendMsgs<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let SendMsgs {
            messages, position, ..
        } = self;

        let messages_type = ctx.env.resolve(&messages.name, &messages.position)?;
        assert_type_equiv(
            &Type::list_of(Type::msg()),
            &messages_type.type_id,
            &position,
        )?;

        let messages = add_type_to_ident(messages, messages_type.clone(), ctx);

        Ok(SendMsgs {
            messages,
            info: TypeInformation::new(messages_type, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        SendMsgs {
            messages: TypeCheckable::revert(&this.messages),
            info: (),
            position: this.position.clone(),
        }
    }
}

impl TypeCheckable for CreateEvnt<()> {
    type Typed = CreateEvnt<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let CreateEvnt {
            event, position, ..
        } = self;

        let event_type = ctx.env.resolve(&event.name, &event.position)?;
        assert_type_equiv(&Type::event(), &event_type.type_id, &position)?;

        let event = add_type_to_ident(event, event_type.clone(), ctx);

        Ok(CreateEvnt {
            event,
            info: TypeInformation::new(event_type, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        CreateEvnt {
            event: TypeCheckable::revert(&this.event),
            info: (),
            position: this.position.clone(),
        }
    }
}

impl TypeCheckable for Throw<()> {
    type Typed = Throw<TypeInformation>;

    fn check(self, _ctx: &mut Context) -> TypeResult<Self::Typed> {
        Err(TypeCheckError::NotImplemented(
            NotImplemented {
                construct: "throw".into(),
            },
            self.position,
        ))
    }

    fn revert(this: &Self::Typed) -> Self {
        Throw {
            info: (),
            position: this.position.clone(),
        }
    }
}
