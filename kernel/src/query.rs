mod customer;
mod game;
mod rental;

pub use self::{customer::*, game::*, rental::*};
