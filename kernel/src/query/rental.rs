use crate::entity::{GameId, Rental, RentalId, RentalListing};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalQuery<Connection>: 'static + Sync + Send {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError>;

    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<RentalListing>, KernelError>;

    /// Rentals of the game that have not been returned yet.
    async fn count_open_by_game(
        &self,
        con: &mut Connection,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnRentalQuery<Connection>: 'static + Sync + Send {
    type RentalQuery: RentalQuery<Connection>;
    fn rental_query(&self) -> &Self::RentalQuery;
}
