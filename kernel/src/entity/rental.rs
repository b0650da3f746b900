mod days_rented;
mod delay_fee;
mod id;
mod original_price;
mod rent_date;
mod return_date;

pub use self::{
    days_rented::*, delay_fee::*, id::*, original_price::*, rent_date::*, return_date::*,
};
use crate::entity::{CustomerId, CustomerName, GameId, GameName, PricePerDay};
use crate::KernelError;
use destructure::Destructure;
use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::References;

/// A rental agreement. `original_price` is frozen at creation; `return_date`
/// and `delay_fee` are written together exactly once when the game comes back.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Rental {
    id: RentalId,
    customer_id: CustomerId,
    game_id: GameId,
    rent_date: RentDate,
    days_rented: DaysRented,
    original_price: OriginalPrice,
    return_date: Option<ReturnDate>,
    delay_fee: Option<DelayFee>,
}

impl Rental {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RentalId,
        customer_id: CustomerId,
        game_id: GameId,
        rent_date: RentDate,
        days_rented: DaysRented,
        original_price: OriginalPrice,
        return_date: Option<ReturnDate>,
        delay_fee: Option<DelayFee>,
    ) -> Self {
        Self {
            id,
            customer_id,
            game_id,
            rent_date,
            days_rented,
            original_price,
            return_date,
            delay_fee,
        }
    }

    /// Starts a new open rental, charging `price_per_day` for every rented day
    /// up front.
    pub fn open(
        id: RentalId,
        customer_id: CustomerId,
        game_id: GameId,
        rent_date: RentDate,
        days_rented: DaysRented,
        price_per_day: &PricePerDay,
    ) -> Self {
        let original_price = OriginalPrice::charge(price_per_day, &days_rented);
        Self {
            id,
            customer_id,
            game_id,
            rent_date,
            days_rented,
            original_price,
            return_date: None,
            delay_fee: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }

    pub fn due_date(&self) -> time::Date {
        self.rent_date.due_date(&self.days_rented)
    }

    /// Records the return. Days past the due date are charged at the daily
    /// rate derived from the frozen price; an on-time or early return leaves
    /// the fee unset. Rejects rentals that were already returned.
    pub fn close(self, returned_on: ReturnDate) -> error_stack::Result<Self, KernelError> {
        if self.return_date.is_some() {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable("rental was already returned"));
        }
        let late_days = returned_on.days_past(self.due_date());
        let delay_fee = (late_days > 0)
            .then(|| DelayFee::new(self.original_price.daily_rate(&self.days_rented) * late_days));
        Ok(Self {
            return_date: Some(returned_on),
            delay_fee,
            ..self
        })
    }
}

/// A rental joined with the names a listing shows.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct RentalListing {
    rental: Rental,
    customer_name: CustomerName,
    game_name: GameName,
}

impl RentalListing {
    pub fn new(rental: Rental, customer_name: CustomerName, game_name: GameName) -> Self {
        Self {
            rental,
            customer_name,
            game_name,
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use crate::entity::{
        CustomerId, DaysRented, GameId, PricePerDay, RentDate, Rental, RentalId, ReturnDate,
    };
    use crate::KernelError;

    fn rental(rent_date: time::Date, days: i32, price_per_day: i64) -> Rental {
        Rental::open(
            RentalId::new(Uuid::new_v4()),
            CustomerId::new(Uuid::new_v4()),
            GameId::new(Uuid::new_v4()),
            RentDate::new(rent_date),
            DaysRented::new(days),
            &PricePerDay::new(price_per_day),
        )
    }

    #[test]
    fn charges_price_per_day_for_every_rented_day() {
        let rental = rental(date!(2024 - 01 - 10), 3, 1000);
        assert_eq!(rental.original_price().as_ref(), &3000);
        assert!(rental.is_open());
        assert_eq!(rental.due_date(), date!(2024 - 01 - 13));
    }

    #[test]
    fn on_time_return_carries_no_fee() {
        let rental = rental(date!(2024 - 01 - 10), 3, 1000);
        let closed = rental
            .close(ReturnDate::new(date!(2024 - 01 - 13)))
            .unwrap();
        assert!(!closed.is_open());
        assert_eq!(closed.return_date().as_ref().unwrap().as_ref(), &date!(2024 - 01 - 13));
        assert_eq!(closed.delay_fee(), &None);
    }

    #[test]
    fn early_return_keeps_full_price_without_fee() {
        let rental = rental(date!(2024 - 01 - 10), 5, 700);
        let closed = rental
            .close(ReturnDate::new(date!(2024 - 01 - 11)))
            .unwrap();
        assert_eq!(closed.original_price().as_ref(), &3500);
        assert_eq!(closed.delay_fee(), &None);
    }

    #[test]
    fn late_return_charges_daily_rate_per_late_day() {
        // price 1000/day over 3 days, two days late: fee = (3000 / 3) * 2
        let rental = rental(date!(2024 - 01 - 10), 3, 1000);
        let closed = rental
            .close(ReturnDate::new(date!(2024 - 01 - 15)))
            .unwrap();
        assert_eq!(closed.delay_fee().as_ref().unwrap().as_ref(), &2000);
        assert_eq!(closed.original_price().as_ref(), &3000);
    }

    #[test]
    fn closing_twice_is_rejected() {
        let rental = rental(date!(2024 - 01 - 10), 3, 1000);
        let closed = rental
            .close(ReturnDate::new(date!(2024 - 01 - 14)))
            .unwrap();
        let fee_before = closed.delay_fee().clone();
        let report = closed
            .clone()
            .close(ReturnDate::new(date!(2024 - 02 - 01)))
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidState
        ));
        // the first close remains the only charge
        assert_eq!(closed.delay_fee(), &fee_before);
    }
}
