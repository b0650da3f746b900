use sqlx::PgConnection;
use time::Date;
use tracing::debug;
use uuid::Uuid;

use kernel::interface::query::{DependOnRentalQuery, RentalQuery};
use kernel::interface::update::{DependOnRentalModifier, RentalModifier};
use kernel::prelude::entity::{
    CustomerId, CustomerName, DaysRented, DelayFee, GameId, GameName, OriginalPrice, RentDate,
    Rental, RentalId, RentalListing, ReturnDate,
};
use kernel::KernelError;

use crate::database::postgres::{PgTransaction, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<PgTransaction> for PostgresRentalRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PgTransaction,
    ) -> error_stack::Result<Vec<RentalListing>, KernelError> {
        PgRentalInternal::find_all(con).await
    }

    async fn count_open_by_game(
        &self,
        con: &mut PgTransaction,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError> {
        PgRentalInternal::count_open_by_game(con, game_id).await
    }
}

impl DependOnRentalQuery<PgTransaction> for PostgresDatabase {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &PostgresRentalRepository
    }
}

#[async_trait::async_trait]
impl RentalModifier<PgTransaction> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::create(con, rental).await
    }

    async fn update(
        &self,
        con: &mut PgTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::update(con, rental).await
    }

    async fn delete(
        &self,
        con: &mut PgTransaction,
        rental_id: &RentalId,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::delete(con, rental_id).await
    }
}

impl DependOnRentalModifier<PgTransaction> for PostgresDatabase {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &PostgresRentalRepository
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: Uuid,
    customer_id: Uuid,
    game_id: Uuid,
    rent_date: Date,
    days_rented: i32,
    original_price: i64,
    return_date: Option<Date>,
    delay_fee: Option<i64>,
}

impl From<RentalRow> for Rental {
    fn from(row: RentalRow) -> Self {
        Rental::new(
            RentalId::new(row.id),
            CustomerId::new(row.customer_id),
            GameId::new(row.game_id),
            RentDate::new(row.rent_date),
            DaysRented::new(row.days_rented),
            OriginalPrice::new(row.original_price),
            row.return_date.map(ReturnDate::new),
            row.delay_fee.map(DelayFee::new),
        )
    }
}

#[derive(sqlx::FromRow)]
struct RentalListingRow {
    id: Uuid,
    customer_id: Uuid,
    game_id: Uuid,
    rent_date: Date,
    days_rented: i32,
    original_price: i64,
    return_date: Option<Date>,
    delay_fee: Option<i64>,
    customer_name: String,
    game_name: String,
}

impl From<RentalListingRow> for RentalListing {
    fn from(row: RentalListingRow) -> Self {
        let rental = Rental::new(
            RentalId::new(row.id),
            CustomerId::new(row.customer_id),
            GameId::new(row.game_id),
            RentDate::new(row.rent_date),
            DaysRented::new(row.days_rented),
            OriginalPrice::new(row.original_price),
            row.return_date.map(ReturnDate::new),
            row.delay_fee.map(DelayFee::new),
        );
        RentalListing::new(
            rental,
            CustomerName::new(row.customer_name),
            GameName::new(row.game_name),
        )
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                customer_id,
                game_id,
                rent_date,
                days_rented,
                original_price,
                return_date,
                delay_fee
            FROM
                rentals
            WHERE
                id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Rental::from))
    }

    async fn find_all(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<RentalListing>, KernelError> {
        let rows = sqlx::query_as::<_, RentalListingRow>(
            // language=postgresql
            r#"
            SELECT
                rentals.id,
                rentals.customer_id,
                rentals.game_id,
                rentals.rent_date,
                rentals.days_rented,
                rentals.original_price,
                rentals.return_date,
                rentals.delay_fee,
                customers.name AS customer_name,
                games.name AS game_name
            FROM
                rentals
                JOIN customers ON customers.id = rentals.customer_id
                JOIN games ON games.id = rentals.game_id
            ORDER BY
                rentals.rent_date, rentals.id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(RentalListing::from).collect())
    }

    async fn count_open_by_game(
        con: &mut PgConnection,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError> {
        let count = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            SELECT
                COUNT(*)
            FROM
                rentals
            WHERE
                game_id = $1 AND return_date IS NULL
            "#,
        )
        .bind(game_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(count)
    }

    async fn create(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO rentals (id, customer_id, game_id, rent_date, days_rented,
                                 original_price, return_date, delay_fee)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.customer_id().as_ref())
        .bind(rental.game_id().as_ref())
        .bind(rental.rent_date().as_ref())
        .bind(rental.days_rented().as_ref())
        .bind(rental.original_price().as_ref())
        .bind(rental.return_date().as_ref().map(|date| *date.as_ref()))
        .bind(rental.delay_fee().as_ref().map(|fee| *fee.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        debug!("rental {} created", rental.id().as_ref());
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE rentals
            SET
                return_date = $2,
                delay_fee = $3
            WHERE
                id = $1
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.return_date().as_ref().map(|date| *date.as_ref()))
        .bind(rental.delay_fee().as_ref().map(|fee| *fee.as_ref()))
        .execute(con)
        .await
        .convert_error()?;
        debug!("rental {} closed", rental.id().as_ref());
        Ok(())
    }

    async fn delete(
        con: &mut PgConnection,
        rental_id: &RentalId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM rentals
            WHERE id = $1
            "#,
        )
        .bind(rental_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        debug!("rental {} deleted", rental_id.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::Rng;
    use time::macros::date;
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{GameQuery, RentalQuery};
    use kernel::interface::update::{
        CategoryModifier, CustomerModifier, GameModifier, RentalModifier,
    };
    use kernel::prelude::entity::{
        Birthday, Category, CategoryId, CategoryName, Cpf, Customer, CustomerId, CustomerName,
        DaysRented, Game, GameId, GameImage, GameName, PhoneNumber, PricePerDay, RentDate, Rental,
        RentalId, ReturnDate, StockTotal,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresCategoryRepository, PostgresCustomerRepository, PostgresDatabase,
        PostgresGameRepository, PostgresRentalRepository,
    };

    fn random_cpf() -> String {
        let mut rng = rand::thread_rng();
        (0..11)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let category_id = CategoryId::new(Uuid::new_v4());
        let category = Category::new(
            category_id.clone(),
            CategoryName::new(format!("strategy-{}", Uuid::new_v4())),
        );
        PostgresCategoryRepository.create(&mut con, &category).await?;

        let game_id = GameId::new(Uuid::new_v4());
        let game = Game::new(
            game_id.clone(),
            GameName::new("Titan Gambit"),
            GameImage::new("http://example.com/titan-gambit.jpg"),
            StockTotal::new(1),
            category_id,
            PricePerDay::new(1500),
        );
        PostgresGameRepository.create(&mut con, &game).await?;

        let customer_id = CustomerId::new(Uuid::new_v4());
        let customer = Customer::new(
            customer_id.clone(),
            CustomerName::new("name"),
            PhoneNumber::new("21998899222"),
            Cpf::new(random_cpf()),
            Birthday::new(date!(1992 - 07 - 14)),
        );
        PostgresCustomerRepository
            .create(&mut con, &customer)
            .await?;

        let fetched = PostgresGameRepository.find_by_id(&mut con, &game_id).await?;
        assert_eq!(fetched, Some(game));

        let rental = Rental::open(
            RentalId::new(Uuid::new_v4()),
            customer_id,
            game_id.clone(),
            RentDate::new(date!(2024 - 03 - 01)),
            DaysRented::new(3),
            &PricePerDay::new(1500),
        );
        PostgresRentalRepository.create(&mut con, &rental).await?;

        let open = PostgresRentalRepository
            .count_open_by_game(&mut con, &game_id)
            .await?;
        assert_eq!(open, 1);

        let found = PostgresRentalRepository
            .find_by_id(&mut con, rental.id())
            .await?;
        assert_eq!(found, Some(rental.clone()));

        let closed = rental.close(ReturnDate::new(date!(2024 - 03 - 06)))?;
        PostgresRentalRepository.update(&mut con, &closed).await?;

        let open = PostgresRentalRepository
            .count_open_by_game(&mut con, &game_id)
            .await?;
        assert_eq!(open, 0);

        let found = PostgresRentalRepository
            .find_by_id(&mut con, closed.id())
            .await?;
        assert_eq!(found, Some(closed.clone()));

        let listings = PostgresRentalRepository.find_all(&mut con).await?;
        assert!(listings
            .iter()
            .any(|listing| listing.rental().id() == closed.id()));

        PostgresRentalRepository.delete(&mut con, closed.id()).await?;
        let found = PostgresRentalRepository
            .find_by_id(&mut con, closed.id())
            .await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }
}
