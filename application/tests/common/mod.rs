use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    CustomerQuery, DependOnCustomerQuery, DependOnGameQuery, DependOnRentalQuery, GameQuery,
    RentalQuery,
};
use kernel::interface::update::{
    CategoryModifier, CustomerModifier, DependOnCategoryModifier, DependOnCustomerModifier,
    DependOnGameModifier, DependOnRentalModifier, GameModifier, RentalModifier,
};
use kernel::prelude::entity::{
    Category, CategoryId, Customer, CustomerId, CustomerName, Game, GameId, GameName, Rental,
    RentalId, RentalListing,
};
use kernel::KernelError;

/// In-memory stand-in for the Postgres store. The transaction handle owns the
/// lock over the whole state, which serializes rental creation the same way
/// the game row lock does in Postgres. Writes apply immediately; every
/// lifecycle service performs its single write right before commit, so a
/// transaction dropped on an error path has written nothing.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
pub struct State {
    categories: HashMap<CategoryId, Category>,
    games: HashMap<GameId, Game>,
    customers: HashMap<CustomerId, Customer>,
    rentals: HashMap<RentalId, Rental>,
}

impl MemoryDatabase {
    pub async fn seed_category(&self, category: Category) {
        self.state
            .lock()
            .await
            .categories
            .insert(category.id().clone(), category);
    }

    pub async fn seed_game(&self, game: Game) {
        self.state.lock().await.games.insert(game.id().clone(), game);
    }

    pub async fn seed_customer(&self, customer: Customer) {
        self.state
            .lock()
            .await
            .customers
            .insert(customer.id().clone(), customer);
    }

    pub async fn seed_rental(&self, rental: Rental) {
        self.state
            .lock()
            .await
            .rentals
            .insert(rental.id().clone(), rental);
    }

    pub async fn rental(&self, id: &RentalId) -> Option<Rental> {
        self.state.lock().await.rentals.get(id).cloned()
    }

    pub async fn rental_count(&self) -> usize {
        self.state.lock().await.rentals.len()
    }
}

pub struct MemoryTransaction(OwnedMutexGuard<State>);

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<MemoryTransaction> for MemoryDatabase {
    async fn transact(&self) -> error_stack::Result<MemoryTransaction, KernelError> {
        Ok(MemoryTransaction(self.state.clone().lock_owned().await))
    }
}

pub struct MemoryRepository;

#[async_trait::async_trait]
impl GameQuery<MemoryTransaction> for MemoryRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &GameId,
    ) -> error_stack::Result<Option<Game>, KernelError> {
        Ok(con.0.games.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl CustomerQuery<MemoryTransaction> for MemoryRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &CustomerId,
    ) -> error_stack::Result<Option<Customer>, KernelError> {
        Ok(con.0.customers.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl RentalQuery<MemoryTransaction> for MemoryRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        Ok(con.0.rentals.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<RentalListing>, KernelError> {
        let state = &con.0;
        let listings = state
            .rentals
            .values()
            .cloned()
            .map(|rental| {
                let customer_name = state
                    .customers
                    .get(rental.customer_id())
                    .map(|customer| customer.name().clone())
                    .unwrap_or_else(|| CustomerName::new("unknown"));
                let game_name = state
                    .games
                    .get(rental.game_id())
                    .map(|game| game.name().clone())
                    .unwrap_or_else(|| GameName::new("unknown"));
                RentalListing::new(rental, customer_name, game_name)
            })
            .collect();
        Ok(listings)
    }

    async fn count_open_by_game(
        &self,
        con: &mut MemoryTransaction,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError> {
        let open = con
            .0
            .rentals
            .values()
            .filter(|rental| rental.game_id() == game_id && rental.is_open())
            .count();
        Ok(open as i64)
    }
}

#[async_trait::async_trait]
impl RentalModifier<MemoryTransaction> for MemoryRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        con.0.rentals.insert(rental.id().clone(), rental.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        con.0.rentals.insert(rental.id().clone(), rental.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        rental_id: &RentalId,
    ) -> error_stack::Result<(), KernelError> {
        con.0.rentals.remove(rental_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl CategoryModifier<MemoryTransaction> for MemoryRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        category: &Category,
    ) -> error_stack::Result<(), KernelError> {
        con.0
            .categories
            .insert(category.id().clone(), category.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl GameModifier<MemoryTransaction> for MemoryRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        game: &Game,
    ) -> error_stack::Result<(), KernelError> {
        con.0.games.insert(game.id().clone(), game.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl CustomerModifier<MemoryTransaction> for MemoryRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        customer: &Customer,
    ) -> error_stack::Result<(), KernelError> {
        con.0
            .customers
            .insert(customer.id().clone(), customer.clone());
        Ok(())
    }
}

impl DependOnGameQuery<MemoryTransaction> for MemoryDatabase {
    type GameQuery = MemoryRepository;
    fn game_query(&self) -> &Self::GameQuery {
        &MemoryRepository
    }
}

impl DependOnCustomerQuery<MemoryTransaction> for MemoryDatabase {
    type CustomerQuery = MemoryRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &MemoryRepository
    }
}

impl DependOnRentalQuery<MemoryTransaction> for MemoryDatabase {
    type RentalQuery = MemoryRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &MemoryRepository
    }
}

impl DependOnRentalModifier<MemoryTransaction> for MemoryDatabase {
    type RentalModifier = MemoryRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &MemoryRepository
    }
}

impl DependOnCategoryModifier<MemoryTransaction> for MemoryDatabase {
    type CategoryModifier = MemoryRepository;
    fn category_modifier(&self) -> &Self::CategoryModifier {
        &MemoryRepository
    }
}

impl DependOnGameModifier<MemoryTransaction> for MemoryDatabase {
    type GameModifier = MemoryRepository;
    fn game_modifier(&self) -> &Self::GameModifier {
        &MemoryRepository
    }
}

impl DependOnCustomerModifier<MemoryTransaction> for MemoryDatabase {
    type CustomerModifier = MemoryRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &MemoryRepository
    }
}
