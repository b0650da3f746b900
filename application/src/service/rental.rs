use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    CustomerQuery, DependOnCustomerQuery, DependOnGameQuery, DependOnRentalQuery, GameQuery,
    RentalQuery,
};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    CustomerId, DaysRented, GameId, RentDate, Rental, RentalId, ReturnDate,
};
use kernel::KernelError;

use crate::transfer::{
    CancelRentalDto, CreateRentalDto, RentalDto, RentalListingDto, ReturnRentalDto,
};

#[async_trait::async_trait]
pub trait GetRentalService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnRentalQuery<Connection>
{
    async fn list_rentals(&self) -> error_stack::Result<Vec<RentalListingDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rentals = self.rental_query().find_all(&mut connection).await?;

        Ok(rentals.into_iter().map(RentalListingDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnRentalQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait RentGameService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGameQuery<Connection>
    + DependOnCustomerQuery<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
{
    async fn rent_game(&self, dto: CreateRentalDto) -> error_stack::Result<RentalDto, KernelError> {
        if dto.days_rented <= 0 {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("daysRented must be a positive integer"));
        }

        let mut connection = self.database_connection().transact().await?;

        let game_id = GameId::new(dto.game_id);
        let game = self
            .game_query()
            .find_by_id(&mut connection, &game_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Referential)
                    .attach_printable(format!("game {} does not exist", dto.game_id))
            })?;

        let customer_id = CustomerId::new(dto.customer_id);
        self.customer_query()
            .find_by_id(&mut connection, &customer_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Referential)
                    .attach_printable(format!("customer {} does not exist", dto.customer_id))
            })?;

        // The game row stays stable for the rest of this transaction, so the
        // count cannot race past stock_total with a concurrent creation.
        let open_rentals = self
            .rental_query()
            .count_open_by_game(&mut connection, &game_id)
            .await?;
        if open_rentals >= i64::from(*game.stock_total().as_ref()) {
            return Err(Report::new(KernelError::OutOfStock)
                .attach_printable(format!("all copies of game {} are rented out", dto.game_id)));
        }

        let rental = Rental::open(
            RentalId::new(Uuid::new_v4()),
            customer_id,
            game_id,
            RentDate::today(),
            DaysRented::new(dto.days_rented),
            game.price_per_day(),
        );
        self.rental_modifier()
            .create(&mut connection, &rental)
            .await?;
        connection.commit().await?;

        Ok(RentalDto::from(rental))
    }
}

impl<Connection: Transaction + Send, T> RentGameService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGameQuery<Connection>
        + DependOnCustomerQuery<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ReturnGameService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
{
    async fn return_game(&self, dto: ReturnRentalDto) -> error_stack::Result<RentalDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rental_id = RentalId::new(dto.rental_id);
        let rental = self
            .rental_query()
            .find_by_id(&mut connection, &rental_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("rental {} does not exist", dto.rental_id))
            })?;

        let closed = rental.close(ReturnDate::today())?;
        self.rental_modifier()
            .update(&mut connection, &closed)
            .await?;
        connection.commit().await?;

        Ok(RentalDto::from(closed))
    }
}

impl<Connection: Transaction + Send, T> ReturnGameService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait CancelRentalService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
{
    async fn cancel_rental(&self, dto: CancelRentalDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rental_id = RentalId::new(dto.rental_id);
        let rental = self
            .rental_query()
            .find_by_id(&mut connection, &rental_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("rental {} does not exist", dto.rental_id))
            })?;

        if rental.is_open() {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable("rental has not been returned yet"));
        }

        self.rental_modifier()
            .delete(&mut connection, &rental_id)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> CancelRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
{
}
