use crate::entity::Category;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CategoryModifier<Connection>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        category: &Category,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCategoryModifier<Connection>: 'static + Sync + Send {
    type CategoryModifier: CategoryModifier<Connection>;
    fn category_modifier(&self) -> &Self::CategoryModifier;
}
