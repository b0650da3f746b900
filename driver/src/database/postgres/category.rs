use sqlx::PgConnection;

use kernel::interface::update::{CategoryModifier, DependOnCategoryModifier};
use kernel::prelude::entity::Category;
use kernel::KernelError;

use crate::database::postgres::{PgTransaction, PostgresDatabase};
use crate::error::ConvertError;

pub struct PostgresCategoryRepository;

#[async_trait::async_trait]
impl CategoryModifier<PgTransaction> for PostgresCategoryRepository {
    async fn create(
        &self,
        con: &mut PgTransaction,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        PgCategoryInternal::create(con, category).await
    }
}

impl DependOnCategoryModifier<PgTransaction> for PostgresDatabase {
    type CategoryModifier = PostgresCategoryRepository;
    fn category_modifier(&self) -> &Self::CategoryModifier {
        &PostgresCategoryRepository
    }
}

pub(in crate::database) struct PgCategoryInternal;

impl PgCategoryInternal {
    async fn create(
        con: &mut PgConnection,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO categories (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(category.id().as_ref())
        .bind(category.name().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
