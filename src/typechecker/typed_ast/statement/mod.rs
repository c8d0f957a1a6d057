mod bind;
mod load;
mod map_access;
mod match_statement;
mod messaging;
mod read_from_bc;
mod store;

use crate::{
    ast::Statement,
    typechecker::{context::Context, TypeCheckable, TypeInformation, TypeResult},
};

/// Statements thread the context: a statement may extend the pure
/// environment, and the extension is visible to the statements after it in
/// the same block.
impl TypeCheckable for Statement<()> {
    type Typed = Statement<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        match self {
            Statement::Load(load) => Ok(Statement::Load(load.check(ctx)?)),
            Statement::Store(store) => Ok(Statement::Store(store.check(ctx)?)),
            Statement::Bind(bind) => Ok(Statement::Bind(bind.check(ctx)?)),
            Statement::MapUpdate(map_update) => Ok(Statement::MapUpdate(map_update.check(ctx)?)),
            Statement::MapGet(map_get) => Ok(Statement::MapGet(map_get.check(ctx)?)),
            Statement::ReadFromBC(read) => Ok(Statement::ReadFromBC(read.check(ctx)?)),
            Statement::Match(match_statement) => {
                Ok(Statement::Match(match_statement.check(ctx)?))
            }
            Statement::AcceptPayment(accept) => Ok(Statement::AcceptPayment(accept.check(ctx)?)),
            Statement::SendMsgs(send) => Ok(Statement::SendMsgs(send.check(ctx)?)),
            Statement::CreateEvnt(event) => Ok(Statement::CreateEvnt(event.check(ctx)?)),
            Statement::Throw(throw) => Ok(Statement::Throw(throw.check(ctx)?)),
        }
    }

    fn revert(this: &Self::Typed) -> Self {
        match this {
            Statement::Load(load) => Statement::Load(TypeCheckable::revert(load)),
            Statement::Store(store) => Statement::Store(TypeCheckable::revert(store)),
            Statement::Bind(bind) => Statement::Bind(TypeCheckable::revert(bind)),
            Statement::MapUpdate(map_update) => {
                Statement::MapUpdate(TypeCheckable::revert(map_update))
            }
            Statement::MapGet(map_get) => Statement::MapGet(TypeCheckable::revert(map_get)),
            Statement::ReadFromBC(read) => Statement::ReadFromBC(TypeCheckable::revert(read)),
            Statement::Match(match_statement) => {
                Statement::Match(TypeCheckable::revert(match_statement))
            }
            Statement::AcceptPayment(accept) => {
                Statement::AcceptPayment(TypeCheckable::revert(accept))
            }
            Statement::SendMsgs(send) => Statement::SendMsgs(TypeCheckable::revert(send)),
            Statement::CreateEvnt(event) => Statement::CreateEvnt(TypeCheckable::revert(event)),
            Statement::Throw(throw) => Statement::Throw(TypeCheckable::revert(throw)),
        }
    }
}
