use crate::{
    ast::{MessageEntry, MessageExpr, MessagePayload},
    typechecker::{
        context::Context,
        error::{BadMessageField, NonSerializable, TypeCheckError},
        types::{literal_type, QualifiedType, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for MessageExpr<()> {
    type Typed = MessageExpr<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let MessageExpr {
            entries, position, ..
        } = self;

        let host = ctx.host.clone();

        // the header fields decide whether this is a message or an event
        let kind = host.payload_kind(entries.iter().map(|entry| entry.field.as_str()));

        for (header, expected) in host.mandatory_headers(kind) {
            if !entries.iter().any(|entry| entry.field == *header) {
                return Err(TypeCheckError::BadMessageField(
                    BadMessageField {
                        field: header.clone(),
                        expected: expected.clone(),
                        got: None,
                    },
                    position,
                ));
            }
        }

        let mut typed_entries = vec![];
        for entry in entries {
            let MessageEntry {
                field,
                payload,
                position: entry_position,
            } = entry;

            let (payload, payload_type) = match payload {
                MessagePayload::Tag(tag) => (MessagePayload::Tag(tag), Type::string()),
                MessagePayload::Lit(lit) => {
                    let ty = literal_type(&lit);
                    (MessagePayload::Lit(lit), ty)
                }
                MessagePayload::Var(id) => {
                    let id = id.check(ctx)?;
                    let ty = id.info.ty().clone();
                    (MessagePayload::Var(id), ty)
                }
            };

            if let Some(expected) = host.header_type(kind, &field) {
                // mandatory headers have fixed types
                if !expected.does_eq(&payload_type) {
                    return Err(TypeCheckError::BadMessageField(
                        BadMessageField {
                            field,
                            expected: expected.clone(),
                            got: Some(payload_type),
                        },
                        entry_position,
                    ));
                }
            } else if !payload_type.is_serializable() {
                return Err(TypeCheckError::NonSerializable(
                    NonSerializable { ty: payload_type },
                    entry_position,
                ));
            }

            typed_entries.push(MessageEntry {
                field,
                payload,
                position: entry_position,
            });
        }

        Ok(MessageExpr {
            entries: typed_entries,
            info: TypeInformation::new(QualifiedType::plain(kind.result_type()), ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let MessageExpr {
            entries, position, ..
        } = this;

        MessageExpr {
            entries: entries
                .iter()
                .map(|entry| MessageEntry {
                    field: entry.field.clone(),
                    payload: match &entry.payload {
                        MessagePayload::Tag(tag) => MessagePayload::Tag(tag.clone()),
                        MessagePayload::Lit(lit) => MessagePayload::Lit(lit.clone()),
                        MessagePayload::Var(id) => MessagePayload::Var(TypeCheckable::revert(id)),
                    },
                    position: entry.position.clone(),
                })
                .collect(),
            info: (),
            position: position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::{
        Id, IntWidth, Literal, MessageEntry, MessageExpr, MessagePayload, Span,
    };
    use crate::typechecker::{
        context::Context,
        error::{BadMessageField, TypeCheckError},
        types::{QualifiedType, Type},
        TypeCheckable,
    };

    fn sender_ctx() -> Context {
        let mut ctx = Context::default();
        ctx.env.add("_sender", QualifiedType::plain(Type::address()));
        ctx
    }

    fn message(entries: Vec<MessageEntry<()>>) -> MessageExpr<()> {
        MessageExpr {
            entries,
            info: (),
            position: Span::default(),
        }
    }

    fn uint128_zero() -> MessagePayload<()> {
        MessagePayload::Lit(Literal::UintLit(IntWidth::W128, "0".into()))
    }

    #[test]
    fn test_well_formed_message() -> Result<(), Box<dyn Error>> {
        let mut ctx = sender_ctx();

        let msg = message(vec![
            MessageEntry::new("_tag", MessagePayload::Tag("".into())),
            MessageEntry::new("_recipient", MessagePayload::Var(Id::new("_sender"))),
            MessageEntry::new("_amount", uint128_zero()),
            MessageEntry::new(
                "status",
                MessagePayload::Lit(Literal::StringLit("foo".into())),
            ),
        ])
        .check(&mut ctx)?;

        assert_eq!(*msg.info.ty(), Type::msg());

        Ok(())
    }

    #[test]
    fn test_event_payload() -> Result<(), Box<dyn Error>> {
        let mut ctx = sender_ctx();

        let evt = message(vec![
            MessageEntry::new(
                "_eventname",
                MessagePayload::Lit(Literal::StringLit("Transferred".into())),
            ),
            MessageEntry::new("amount", uint128_zero()),
        ])
        .check(&mut ctx)?;

        assert_eq!(*evt.info.ty(), Type::event());

        Ok(())
    }

    #[test]
    fn test_amount_with_wrong_width() {
        let mut ctx = sender_ctx();
        ctx.env
            .add("num1", QualifiedType::plain(Type::int(IntWidth::W32)));

        let res = message(vec![
            MessageEntry::new("_tag", MessagePayload::Tag("".into())),
            MessageEntry::new("_recipient", MessagePayload::Var(Id::new("_sender"))),
            MessageEntry::new("_amount", MessagePayload::Var(Id::new("num1"))),
            MessageEntry::new(
                "status",
                MessagePayload::Lit(Literal::StringLit("foo".into())),
            ),
        ])
        .check(&mut ctx);

        assert_eq!(
            res,
            Err(TypeCheckError::BadMessageField(
                BadMessageField {
                    field: "_amount".into(),
                    expected: Type::uint128(),
                    got: Some(Type::int(IntWidth::W32)),
                },
                Span::default()
            ))
        );
    }

    #[test]
    fn test_tag_with_adt_value() {
        let mut ctx = sender_ctx();
        ctx.env.add("zero", QualifiedType::plain(Type::nat_adt()));

        let res = message(vec![
            MessageEntry::new("_tag", MessagePayload::Var(Id::new("zero"))),
            MessageEntry::new("_recipient", MessagePayload::Var(Id::new("_sender"))),
            MessageEntry::new("_amount", uint128_zero()),
            MessageEntry::new(
                "status",
                MessagePayload::Lit(Literal::StringLit("foo".into())),
            ),
        ])
        .check(&mut ctx);

        assert_eq!(
            res,
            Err(TypeCheckError::BadMessageField(
                BadMessageField {
                    field: "_tag".into(),
                    expected: Type::string(),
                    got: Some(Type::nat_adt()),
                },
                Span::default()
            ))
        );
    }

    #[test]
    fn test_recipient_too_short() {
        let mut ctx = sender_ctx();

        let res = message(vec![
            MessageEntry::new("_tag", MessagePayload::Tag("".into())),
            MessageEntry::new(
                "_recipient",
                MessagePayload::Lit(Literal::ByStrXLit(vec![0xab, 0xad])),
            ),
            MessageEntry::new("_amount", uint128_zero()),
            MessageEntry::new(
                "status",
                MessagePayload::Lit(Literal::StringLit("foo".into())),
            ),
        ])
        .check(&mut ctx);

        assert_eq!(
            res,
            Err(TypeCheckError::BadMessageField(
                BadMessageField {
                    field: "_recipient".into(),
                    expected: Type::address(),
                    got: Some(Type::bystr_x(2)),
                },
                Span::default()
            ))
        );
    }

    #[test]
    fn test_tag_with_block_number() {
        let mut ctx = sender_ctx();

        let res = message(vec![
            MessageEntry::new("_tag", MessagePayload::Lit(Literal::BNumLit("100".into()))),
            MessageEntry::new("_recipient", MessagePayload::Var(Id::new("_sender"))),
            MessageEntry::new("_amount", uint128_zero()),
        ])
        .check(&mut ctx);

        assert_eq!(
            res,
            Err(TypeCheckError::BadMessageField(
                BadMessageField {
                    field: "_tag".into(),
                    expected: Type::string(),
                    got: Some(Type::bnum()),
                },
                Span::default()
            ))
        );
    }

    #[test]
    fn test_missing_mandatory_header() {
        let mut ctx = sender_ctx();

        let res = message(vec![
            MessageEntry::new("_tag", MessagePayload::Tag("".into())),
            MessageEntry::new("_amount", uint128_zero()),
        ])
        .check(&mut ctx);

        assert_eq!(
            res,
            Err(TypeCheckError::BadMessageField(
                BadMessageField {
                    field: "_recipient".into(),
                    expected: Type::address(),
                    got: None,
                },
                Span::default()
            ))
        );
    }

    #[test]
    fn test_map_payload_is_rejected() {
        let mut ctx = sender_ctx();
        ctx.env.add(
            "backers",
            QualifiedType::plain(Type::map_of(Type::address(), Type::uint128())),
        );

        let res = message(vec![
            MessageEntry::new("_tag", MessagePayload::Tag("".into())),
            MessageEntry::new("_recipient", MessagePayload::Var(Id::new("_sender"))),
            MessageEntry::new("_amount", uint128_zero()),
            MessageEntry::new("backers", MessagePayload::Var(Id::new("backers"))),
        ])
        .check(&mut ctx);

        assert!(matches!(res, Err(TypeCheckError::NonSerializable(..))));
    }
}
