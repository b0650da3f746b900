use crate::entity::Game;
use crate::KernelError;

#[async_trait::async_trait]
pub trait GameModifier<Connection>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        game: &Game,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnGameModifier<Connection>: 'static + Sync + Send {
    type GameModifier: GameModifier<Connection>;
    fn game_modifier(&self) -> &Self::GameModifier;
}
