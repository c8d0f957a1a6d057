use crate::{
    ast::{ConstructorPattern, Pattern, WildcardPattern},
    typechecker::{
        context::Context,
        error::{ArityMismatch, TypeCheckError},
        types::{QualifiedType, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

use super::expression::id::add_type_to_ident;

/// Type a pattern against the scrutinee it matches. Returns the typed
/// pattern together with the bindings it introduces, in document order
/// (leftmost binder first); environments are built from this list as-is.
pub(crate) fn assign_types_for_pattern(
    pattern: Pattern<()>,
    scrutinee: &Type,
    ctx: &Context,
) -> TypeResult<(Pattern<TypeInformation>, Vec<(String, QualifiedType)>)> {
    match pattern {
        Pattern::Wildcard(WildcardPattern { position, .. }) => Ok((
            Pattern::Wildcard(WildcardPattern {
                info: TypeInformation::new(QualifiedType::plain(scrutinee.clone()), ctx),
                position,
            }),
            vec![],
        )),
        Pattern::Binder(id) => {
            let type_id = QualifiedType::plain(scrutinee.clone());
            let binding = (id.name.clone(), type_id.clone());

            Ok((
                Pattern::Binder(add_type_to_ident(id, type_id, ctx)),
                vec![binding],
            ))
        }
        Pattern::Constructor(ConstructorPattern {
            name,
            args,
            position,
            ..
        }) => {
            let adts = ctx.adts.clone();
            let arg_types = adts.constr_pattern_arg_types(scrutinee, &name, &position)?;

            if arg_types.len() != args.len() {
                return Err(TypeCheckError::ArityMismatch(
                    ArityMismatch::new(
                        format!("constructor pattern '{name}'"),
                        arg_types.len(),
                        args.len(),
                    ),
                    position,
                ));
            }

            let mut typed_args = vec![];
            let mut bindings = vec![];
            for (sub_pattern, arg_type) in args.into_iter().zip(&arg_types) {
                let (typed, mut sub_bindings) =
                    assign_types_for_pattern(sub_pattern, arg_type, ctx)?;
                typed_args.push(typed);
                bindings.append(&mut sub_bindings);
            }

            Ok((
                Pattern::Constructor(ConstructorPattern {
                    name,
                    args: typed_args,
                    info: TypeInformation::new(QualifiedType::plain(scrutinee.clone()), ctx),
                    position,
                }),
                bindings,
            ))
        }
    }
}

pub(crate) fn revert_pattern(pattern: &Pattern<TypeInformation>) -> Pattern<()> {
    match pattern {
        Pattern::Wildcard(WildcardPattern { position, .. }) => {
            Pattern::Wildcard(WildcardPattern {
                info: (),
                position: position.clone(),
            })
        }
        Pattern::Binder(id) => Pattern::Binder(TypeCheckable::revert(id)),
        Pattern::Constructor(ConstructorPattern {
            name,
            args,
            position,
            ..
        }) => Pattern::Constructor(ConstructorPattern {
            name: name.clone(),
            args: args.iter().map(revert_pattern).collect(),
            info: (),
            position: position.clone(),
        }),
    }
}
