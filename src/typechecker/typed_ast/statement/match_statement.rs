use crate::{
    ast::{MatchStatement, StatementMatchClause},
    typechecker::{
        context::Context,
        error::{EmptyMatch, TypeCheckError},
        typed_ast::pattern::{assign_types_for_pattern, revert_pattern},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

impl TypeCheckable for MatchStatement<()> {
    type Typed = MatchStatement<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let MatchStatement {
            scrutinee,
            clauses,
            position,
            ..
        } = self;

        if clauses.is_empty() {
            return Err(TypeCheckError::EmptyMatch(EmptyMatch, position));
        }

        let scrutinee = scrutinee.check(ctx)?;
        let scrutinee_type = scrutinee.info.type_id.clone();

        let mut typed_clauses = vec![];
        for clause in clauses {
            let StatementMatchClause {
                pattern,
                body,
                position: clause_position,
            } = clause;

            // branch bindings and statement extensions stay inside the
            // branch; the suffix after the match sees none of them
            let mut branch_ctx = ctx.clone();
            let (pattern, bindings) =
                assign_types_for_pattern(pattern, &scrutinee_type.type_id, &branch_ctx)?;
            branch_ctx.env.add_all(bindings);

            let mut typed_body = vec![];
            for statement in body {
                typed_body.push(statement.check(&mut branch_ctx)?);
            }

            typed_clauses.push(StatementMatchClause {
                pattern,
                body: typed_body,
                position: clause_position,
            });
        }

        Ok(MatchStatement {
            scrutinee,
            clauses: typed_clauses,
            info: TypeInformation::new(scrutinee_type, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let MatchStatement {
            scrutinee,
            clauses,
            position,
            ..
        } = this;

        MatchStatement {
            scrutinee: TypeCheckable::revert(scrutinee),
            clauses: clauses
                .iter()
                .map(|clause| StatementMatchClause {
                    pattern: revert_pattern(&clause.pattern),
                    body: clause.body.iter().map(TypeCheckable::revert).collect(),
                    position: clause.position.clone(),
                })
                .collect(),
            info: (),
            position: position.clone(),
        }
    }
}
