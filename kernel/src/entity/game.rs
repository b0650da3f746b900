mod id;
mod image;
mod name;
mod price_per_day;
mod stock_total;

pub use self::{id::*, image::*, name::*, price_per_day::*, stock_total::*};
use crate::entity::CategoryId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// A title in the lending catalog. Immutable once created; rentals only read
/// its price and stock.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Game {
    id: GameId,
    name: GameName,
    image: GameImage,
    stock_total: StockTotal,
    category_id: CategoryId,
    price_per_day: PricePerDay,
}

impl Game {
    pub fn new(
        id: GameId,
        name: GameName,
        image: GameImage,
        stock_total: StockTotal,
        category_id: CategoryId,
        price_per_day: PricePerDay,
    ) -> Self {
        Self {
            id,
            name,
            image,
            stock_total,
            category_id,
            price_per_day,
        }
    }
}
