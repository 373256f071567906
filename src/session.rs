#![cfg(feature = "std")]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::game::{AiTurn, Game, GameError, PlayerTurn};

/// Shared handle to a [`Game`] that schedules the computer's reply after a
/// short "thinking" pause.
///
/// Every delayed turn carries the ticket of the game it was scheduled for, so
/// a turn that fires after [`Session::new_game`] leaves the new game alone.
#[derive(Clone)]
pub struct Session {
    game: Arc<Mutex<Game>>,
    think_delay: Duration,
}

impl Session {
    pub fn new(game: Game) -> Self {
        let think_delay = game.config().think_delay;
        Self {
            game: Arc::new(Mutex::new(game)),
            think_delay,
        }
    }

    /// Override the pause before the computer fires.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    pub fn think_delay(&self) -> Duration {
        self.think_delay
    }

    /// Lock the game for direct access.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the game.
    pub fn with_game<T>(&self, f: impl FnOnce(&mut Game) -> T) -> T {
        f(&mut self.lock())
    }

    pub fn new_game(&self) -> Result<(), GameError> {
        self.lock().new_game()
    }

    /// Fire at the enemy board. When the game continues, the computer's
    /// reply is spawned on the tokio runtime and its handle returned.
    pub fn player_fire(
        &self,
        x: usize,
        y: usize,
    ) -> Result<(PlayerTurn, Option<JoinHandle<AiTurn>>), GameError> {
        let (turn, ticket) = self.lock().player_fire(x, y)?;
        let handle = ticket.map(|ticket| {
            let game = Arc::clone(&self.game);
            let delay = self.think_delay;
            tokio::spawn(async move {
                sleep(delay).await;
                let mut game = game.lock().unwrap_or_else(PoisonError::into_inner);
                game.resolve_ai_shot(ticket)
            })
        });
        Ok((turn, handle))
    }
}
