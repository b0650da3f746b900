use kernel::prelude::entity::{DestructRental, DestructRentalListing, Rental, RentalListing};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RentalDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub game_id: Uuid,
    pub rent_date: Date,
    pub days_rented: i32,
    pub original_price: i64,
    pub return_date: Option<Date>,
    pub delay_fee: Option<i64>,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
            id,
            customer_id,
            game_id,
            rent_date,
            days_rented,
            original_price,
            return_date,
            delay_fee,
        } = value.into_destruct();
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            game_id: game_id.into(),
            rent_date: rent_date.into(),
            days_rented: days_rented.into(),
            original_price: original_price.into(),
            return_date: return_date.map(Into::into),
            delay_fee: delay_fee.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RentalListingDto {
    pub rental: RentalDto,
    pub customer_name: String,
    pub game_name: String,
}

impl From<RentalListing> for RentalListingDto {
    fn from(value: RentalListing) -> Self {
        let DestructRentalListing {
            rental,
            customer_name,
            game_name,
        } = value.into_destruct();
        Self {
            rental: RentalDto::from(rental),
            customer_name: customer_name.into(),
            game_name: game_name.into(),
        }
    }
}

#[derive(Debug)]
pub struct CreateRentalDto {
    pub customer_id: Uuid,
    pub game_id: Uuid,
    pub days_rented: i32,
}

pub struct ReturnRentalDto {
    pub rental_id: Uuid,
}

pub struct CancelRentalDto {
    pub rental_id: Uuid,
}
