use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::{DependOnGameQuery, GameQuery};
use kernel::interface::update::{DependOnGameModifier, GameModifier};
use kernel::prelude::entity::{
    CategoryId, Game, GameId, GameImage, GameName, PricePerDay, StockTotal,
};
use kernel::KernelError;

use crate::database::postgres::{PgTransaction, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresGameRepository;

#[async_trait::async_trait]
impl GameQuery<PgTransaction> for PostgresGameRepository {
    async fn find_by_id(
        &self,
        con: &mut PgTransaction,
        id: &GameId,
    ) -> error_stack::Result<Option<Game>, KernelError> {
        PgGameInternal::find_by_id(con, id).await
    }
}

impl DependOnGameQuery<PgTransaction> for PostgresDatabase {
    type GameQuery = PostgresGameRepository;
    fn game_query(&self) -> &Self::GameQuery {
        &PostgresGameRepository
    }
}

#[async_trait::async_trait]
impl GameModifier<PgTransaction> for PostgresGameRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        game: &Game,
    ) -> error_stack::Result<(), KernelError> {
        PgGameInternal::create(con, game).await
    }
}

impl DependOnGameModifier<PgTransaction> for PostgresDatabase {
    type GameModifier = PostgresGameRepository;
    fn game_modifier(&self) -> &Self::GameModifier {
        &PostgresGameRepository
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: Uuid,
    name: String,
    image: String,
    stock_total: i32,
    category_id: Uuid,
    price_per_day: i64,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game::new(
            GameId::new(row.id),
            GameName::new(row.name),
            GameImage::new(row.image),
            StockTotal::new(row.stock_total),
            CategoryId::new(row.category_id),
            PricePerDay::new(row.price_per_day),
        )
    }
}

pub(in crate::database) struct PgGameInternal;

impl PgGameInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &GameId,
    ) -> error_stack::Result<Option<Game>, KernelError> {
        // FOR UPDATE holds the row until the transaction ends, so concurrent
        // rentals of the same game serialize their availability checks.
        let row = sqlx::query_as::<_, GameRow>(
            // language=postgresql
            r#"
            SELECT
                id,
                name,
                image,
                stock_total,
                category_id,
                price_per_day
            FROM
                games
            WHERE
                id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Game::from))
    }

    async fn create(con: &mut PgConnection, game: &Game) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO games (id, name, image, stock_total, category_id, price_per_day)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(game.id().as_ref())
        .bind(game.name().as_ref())
        .bind(game.image().as_ref())
        .bind(game.stock_total().as_ref())
        .bind(game.category_id().as_ref())
        .bind(game.price_per_day().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
