use crate::{
    ast::{MatchClause, MatchExpr},
    typechecker::{
        context::Context,
        error::{EmptyMatch, TypeCheckError},
        typed_ast::pattern::{assign_types_for_pattern, revert_pattern},
        types::assert_type_equiv,
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for MatchExpr<()> {
    type Typed = MatchExpr<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let MatchExpr {
            scrutinee,
            clauses,
            position,
            ..
        } = self;

        if clauses.is_empty() {
            return Err(TypeCheckError::EmptyMatch(EmptyMatch, position));
        }

        let scrutinee = scrutinee.check(ctx)?;
        let scrutinee_type = scrutinee.info.ty().clone();

        let mut typed_clauses = vec![];
        let mut match_type = None;

        for clause in clauses {
            let MatchClause {
                pattern,
                body,
                position: clause_position,
            } = clause;

            // each branch sees the bindings of its own pattern only
            let mut branch_ctx = ctx.clone();
            let (pattern, bindings) =
                assign_types_for_pattern(pattern, &scrutinee_type, &branch_ctx)?;
            branch_ctx.env.add_all(bindings);

            let body = body.check(&mut branch_ctx)?;

            match &match_type {
                None => match_type = Some(body.get_info().type_id),
                Some(expected) => {
                    assert_type_equiv(&expected.type_id, body.get_info().ty(), &body.position())?;
                }
            }

            typed_clauses.push(MatchClause {
                pattern,
                body,
                position: clause_position,
            });
        }

        let Some(match_type) = match_type else {
            unreachable!("no branch type recorded for a non-empty match");
        };

        Ok(MatchExpr {
            scrutinee,
            clauses: typed_clauses,
            info: TypeInformation::new(match_type, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let MatchExpr {
            scrutinee,
            clauses,
            position,
            ..
        } = this;

        MatchExpr {
            scrutinee: TypeCheckable::revert(scrutinee),
            clauses: clauses
                .iter()
                .map(|clause| MatchClause {
                    pattern: revert_pattern(&clause.pattern),
                    body: TypeCheckable::revert(&clause.body),
                    position: clause.position.clone(),
                })
                .collect(),
            info: (),
            position: position.clone(),
        }
    }
}
