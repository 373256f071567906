//! Game orchestration: phases, turn order, the input lock and end detection.

use core::fmt;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai::{choose_ai_target, AiMemory, Difficulty},
    board::Board,
    common::{BoardError, Coord, ShotResult},
    config::{GameConfig, GameMode, BOARD_CELLS},
    placement::{place_fleet_random, ManualPlacement, Placement},
    ship::Orientation,
};

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Battle,
    GameOver,
}

/// One of the two fleets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

/// Permission for one computer turn, tied to the game it was issued for.
#[derive(Debug, PartialEq, Eq)]
pub struct AiTicket {
    generation: u64,
}

impl AiTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of an accepted player shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTurn {
    pub target: Coord,
    pub result: ShotResult,
    /// Set when this shot ended the game.
    pub winner: Option<Side>,
}

/// Outcome of a computer turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiTurn {
    /// The computer fired; the turn is back with the player unless the game ended.
    Fired {
        target: Coord,
        result: ShotResult,
        winner: Option<Side>,
    },
    /// No target could be resolved; the turn was handed back to the player.
    Failed,
    /// The ticket no longer matches the game state; nothing changed.
    Cancelled,
}

/// Errors returned by Game operations. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// The action is not available in the current phase.
    WrongPhase(Phase),
    NotPlayerTurn,
    /// The computer is still taking its turn.
    InputLocked,
    GameOver,
    PlacementIncomplete,
    FleetComplete,
    NothingToUndo,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase(Phase::Placement) => {
                write!(f, "Finish placement first, then start battle")
            }
            GameError::WrongPhase(Phase::Battle) => write!(f, "The battle has already started"),
            GameError::WrongPhase(Phase::GameOver) | GameError::GameOver => {
                write!(f, "The game is over. Start a new game")
            }
            GameError::NotPlayerTurn => write!(f, "It is not your turn"),
            GameError::InputLocked => write!(f, "Enemy is thinking"),
            GameError::PlacementIncomplete => write!(f, "Place all ships before starting battle"),
            GameError::FleetComplete => write!(f, "All ships placed. Start the battle"),
            GameError::NothingToUndo => write!(f, "No ship to remove"),
        }
    }
}

impl core::error::Error for GameError {}

/// A single-player game session: the player's and computer's boards plus all
/// turn state. Everything is owned here; there is no global state.
pub struct Game {
    config: GameConfig,
    difficulty: Difficulty,
    phase: Phase,
    player_board: Board,
    enemy_board: Board,
    placement: ManualPlacement,
    ai_memory: AiMemory,
    player_turn: bool,
    input_locked: bool,
    winner: Option<Side>,
    generation: u64,
    rng: SmallRng,
}

impl Game {
    /// Create a game and deal the computer's fleet.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => entropy_rng(),
        };
        let mut game = Self {
            difficulty: config.difficulty,
            config,
            phase: Phase::Placement,
            player_board: Board::new(),
            enemy_board: Board::new(),
            placement: ManualPlacement::new(),
            ai_memory: AiMemory::new(),
            player_turn: false,
            input_locked: false,
            winner: None,
            generation: 0,
            rng,
        };
        game.new_game()?;
        Ok(game)
    }

    /// Reset everything and start over. Any outstanding [`AiTicket`] becomes
    /// stale.
    ///
    /// If the computer's fleet cannot be placed the game is left in
    /// [`Phase::GameOver`] with no winner and the error is returned.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.generation += 1;
        self.phase = Phase::Placement;
        self.winner = None;
        self.player_turn = false;
        self.input_locked = false;
        self.ai_memory.reset();
        self.placement = ManualPlacement::new();
        self.player_board = Board::new();
        self.enemy_board = Board::new();

        if let Err(e) = self.deal_fleets() {
            self.phase = Phase::GameOver;
            return Err(e);
        }
        log::info!(
            "new game #{} ({:?} mode, {} difficulty)",
            self.generation,
            self.config.mode,
            self.difficulty
        );
        Ok(())
    }

    fn deal_fleets(&mut self) -> Result<(), GameError> {
        place_fleet_random(&mut self.enemy_board, &mut self.rng)?;
        if self.config.mode == GameMode::Quick {
            self.placement.auto_place_remaining(&mut self.rng)?;
            self.player_board = self.placement.board().clone();
            self.begin_battle();
        }
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the opponent strength; applies from the next computer shot.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log::info!("difficulty set to {}", difficulty);
        self.difficulty = difficulty;
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn enemy_board(&self) -> &Board {
        &self.enemy_board
    }

    pub fn placement(&self) -> &ManualPlacement {
        &self.placement
    }

    pub fn ai_memory(&self) -> &AiMemory {
        &self.ai_memory
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Bumped by every [`Game::new_game`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn require_phase(&self, phase: Phase) -> Result<(), GameError> {
        if self.phase == phase {
            Ok(())
        } else if self.phase == Phase::GameOver {
            Err(GameError::GameOver)
        } else {
            Err(GameError::WrongPhase(self.phase))
        }
    }

    fn sync_player_board(&mut self) {
        self.player_board = self.placement.board().clone();
    }

    pub fn toggle_orientation(&mut self) -> Result<Orientation, GameError> {
        self.require_phase(Phase::Placement)?;
        Ok(self.placement.toggle_orientation())
    }

    /// Place the next queued ship with its origin at (`x`, `y`).
    pub fn place_next_ship(&mut self, x: usize, y: usize) -> Result<Placement, GameError> {
        self.require_phase(Phase::Placement)?;
        let placed = self
            .placement
            .try_place(x, y)?
            .cloned()
            .ok_or(GameError::FleetComplete)?;
        self.sync_player_board();
        log::debug!("placed {} at ({}, {})", placed.label, x, y);
        Ok(placed)
    }

    /// Randomly place every ship the player has not placed yet.
    pub fn auto_place_remaining(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Placement)?;
        self.placement.auto_place_remaining(&mut self.rng)?;
        self.sync_player_board();
        Ok(())
    }

    pub fn undo_placement(&mut self) -> Result<Placement, GameError> {
        self.require_phase(Phase::Placement)?;
        let removed = self.placement.undo().ok_or(GameError::NothingToUndo)?;
        self.sync_player_board();
        Ok(removed)
    }

    pub fn clear_placements(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Placement)?;
        self.placement.clear();
        self.sync_player_board();
        Ok(())
    }

    /// Leave placement once the whole fleet is on the board.
    pub fn start_battle(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Placement)?;
        if !self.placement.is_complete() {
            return Err(GameError::PlacementIncomplete);
        }
        self.begin_battle();
        Ok(())
    }

    fn begin_battle(&mut self) {
        self.phase = Phase::Battle;
        self.player_turn = true;
        self.input_locked = false;
        self.winner = None;
        self.ai_memory.reset();
        log::info!("battle started on {} difficulty", self.difficulty);
    }

    /// Fire at the computer's board. On success the turn passes to the
    /// computer and the returned ticket must be redeemed with
    /// [`Game::resolve_ai_shot`], unless the shot ended the game.
    pub fn player_fire(&mut self, x: usize, y: usize) -> Result<(PlayerTurn, Option<AiTicket>), GameError> {
        self.require_phase(Phase::Battle)?;
        if !self.player_turn {
            return Err(GameError::NotPlayerTurn);
        }
        if self.input_locked {
            return Err(GameError::InputLocked);
        }

        let result = self.enemy_board.fire(x, y)?;
        let target = Coord::new(x, y);
        log::debug!("player fired at {}: {:?}", target, result.kind());

        let winner = self.check_end();
        let ticket = if winner.is_none() {
            self.player_turn = false;
            self.input_locked = true;
            Some(AiTicket {
                generation: self.generation,
            })
        } else {
            None
        };
        Ok((
            PlayerTurn {
                target,
                result,
                winner,
            },
            ticket,
        ))
    }

    /// Take the computer's turn against the player's board.
    pub fn resolve_ai_shot(&mut self, ticket: AiTicket) -> AiTurn {
        if ticket.generation != self.generation
            || self.phase != Phase::Battle
            || self.player_turn
        {
            log::debug!(
                "ignoring AI ticket from game #{} (current #{})",
                ticket.generation,
                self.generation
            );
            return AiTurn::Cancelled;
        }

        let mut fired = None;
        for _ in 0..BOARD_CELLS {
            let Some(target) = choose_ai_target(
                &self.player_board,
                self.difficulty,
                &mut self.ai_memory,
                &mut self.rng,
            ) else {
                break;
            };
            match self.player_board.fire(target.x, target.y) {
                Ok(result) => {
                    fired = Some((target, result));
                    break;
                }
                Err(e) => log::debug!("AI target {} rejected: {}", target, e),
            }
        }

        let Some((target, result)) = fired else {
            log::warn!("AI could not resolve a shot; handing the turn back");
            self.hand_back_turn();
            return AiTurn::Failed;
        };

        self.ai_memory.observe(&self.player_board, target, &result);
        let winner = self.check_end();
        if winner.is_none() {
            self.hand_back_turn();
        }
        AiTurn::Fired {
            target,
            result,
            winner,
        }
    }

    fn hand_back_turn(&mut self) {
        if self.phase != Phase::Battle {
            return;
        }
        self.player_turn = true;
        self.input_locked = false;
    }

    fn check_end(&mut self) -> Option<Side> {
        let winner = if self.enemy_board.all_ships_sunk() {
            Side::Player
        } else if self.player_board.all_ships_sunk() {
            Side::Computer
        } else {
            return None;
        };
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
        self.player_turn = false;
        self.input_locked = false;
        log::info!("game #{} over: {:?} wins", self.generation, winner);
        Some(winner)
    }
}

#[cfg(feature = "std")]
fn entropy_rng() -> SmallRng {
    SmallRng::from_rng(&mut rand::rng())
}

// Without an OS entropy source unseeded games fall back to a fixed seed.
#[cfg(not(feature = "std"))]
fn entropy_rng() -> SmallRng {
    SmallRng::seed_from_u64(0)
}
