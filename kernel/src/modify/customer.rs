use crate::entity::Customer;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CustomerModifier<Connection>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCustomerModifier<Connection>: 'static + Sync + Send {
    type CustomerModifier: CustomerModifier<Connection>;
    fn customer_modifier(&self) -> &Self::CustomerModifier;
}
