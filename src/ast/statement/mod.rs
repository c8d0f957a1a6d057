mod bind;
mod load;
mod map_access;
mod match_statement;
mod messaging;
mod read_from_bc;
mod store;

pub use self::bind::*;
pub use self::load::*;
pub use self::map_access::*;
pub use self::match_statement::*;
pub use self::messaging::*;
pub use self::read_from_bc::*;
pub use self::store::*;

use serde::{Deserialize, Serialize};

use super::Span;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement<T> {
    Load(Load<T>),
    Store(Store<T>),
    Bind(Bind<T>),
    MapUpdate(MapUpdate<T>),
    MapGet(MapGet<T>),
    ReadFromBC(ReadFromBC<T>),
    Match(MatchStatement<T>),
    AcceptPayment(AcceptPayment<T>),
    SendMsgs(SendMsgs<T>),
    CreateEvnt(CreateEvnt<T>),
    Throw(Throw<T>),
}

impl<T> Statement<T>
where
    T: Clone,
{
    pub fn get_info(&self) -> T {
        match self {
            Statement::Load(Load { info, .. }) => info.clone(),
            Statement::Store(Store { info, .. }) => info.clone(),
            Statement::Bind(Bind { info, .. }) => info.clone(),
            Statement::MapUpdate(MapUpdate { info, .. }) => info.clone(),
            Statement::MapGet(MapGet { info, .. }) => info.clone(),
            Statement::ReadFromBC(ReadFromBC { info, .. }) => info.clone(),
            Statement::Match(MatchStatement { info, .. }) => info.clone(),
            Statement::AcceptPayment(AcceptPayment { info, .. }) => info.clone(),
            Statement::SendMsgs(SendMsgs { info, .. }) => info.clone(),
            Statement::CreateEvnt(CreateEvnt { info, .. }) => info.clone(),
            Statement::Throw(Throw { info, .. }) => info.clone(),
        }
    }

    pub fn position(&self) -> Span {
        match self {
            Statement::Load(Load { position, .. }) => position.clone(),
            Statement::Store(Store { position, .. }) => position.clone(),
            Statement::Bind(Bind { position, .. }) => position.clone(),
            Statement::MapUpdate(MapUpdate { position, .. }) => position.clone(),
            Statement::MapGet(MapGet { position, .. }) => position.clone(),
            Statement::ReadFromBC(ReadFromBC { position, .. }) => position.clone(),
            Statement::Match(MatchStatement { position, .. }) => position.clone(),
            Statement::AcceptPayment(AcceptPayment { position, .. }) => position.clone(),
            Statement::SendMsgs(SendMsgs { position, .. }) => position.clone(),
            Statement::CreateEvnt(CreateEvnt { position, .. }) => position.clone(),
            Statement::Throw(Throw { position, .. }) => position.clone(),
        }
    }
}
