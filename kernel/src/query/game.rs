use crate::entity::{Game, GameId};
use crate::KernelError;

/// Catalog read side. Rental creation counts open rentals against the fetched
/// `stock_total`, so implementations must keep the returned game row stable
/// for the rest of the surrounding transaction; concurrent creations of the
/// same game have to serialize on it.
#[async_trait::async_trait]
pub trait GameQuery<Connection>: 'static + Sync + Send {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &GameId,
    ) -> error_stack::Result<Option<Game>, KernelError>;
}

pub trait DependOnGameQuery<Connection>: 'static + Sync + Send {
    type GameQuery: GameQuery<Connection>;
    fn game_query(&self) -> &Self::GameQuery;
}
