mod birthday;
mod cpf;
mod id;
mod name;
mod phone;

pub use self::{birthday::*, cpf::*, id::*, name::*, phone::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
    phone: PhoneNumber,
    cpf: Cpf,
    birthday: Birthday,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: CustomerName,
        phone: PhoneNumber,
        cpf: Cpf,
        birthday: Birthday,
    ) -> Self {
        Self {
            id,
            name,
            phone,
            cpf,
            birthday,
        }
    }
}
