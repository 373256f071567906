#![cfg(feature = "std")]

//! Terminal front end: board rendering, command parsing and the interactive
//! game loop.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::{
    ai::Difficulty,
    board::Board,
    common::{parse_coord, Coord, ShotResult},
    config::BOARD_SIZE,
    game::{AiTurn, Game, GameError, Phase, PlayerTurn, Side},
    session::Session,
};

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the next ship (placement) or fire (battle) at a cell.
    Target(Coord),
    Rotate,
    Auto,
    Undo,
    Clear,
    Start,
    New,
    SetDifficulty(Difficulty),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("Empty input".to_string());
    };
    let cmd = match word.to_ascii_lowercase().as_str() {
        "r" | "rotate" => Command::Rotate,
        "auto" => Command::Auto,
        "undo" => Command::Undo,
        "clear" => Command::Clear,
        "start" => Command::Start,
        "new" => Command::New,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        "difficulty" | "diff" => {
            let level = parts
                .next()
                .ok_or("Usage: difficulty <easy|medium|hard|impossible>")?;
            Command::SetDifficulty(level.parse()?)
        }
        _ => Command::Target(parse_coord(word)?),
    };
    Ok(cmd)
}

/// Render one board. With `reveal` unhit ships are drawn as `S`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, "{:>3}", x + 1);
    }
    out.push('\n');
    for y in 0..BOARD_SIZE {
        let _ = write!(out, "  {} ", (b'A' + y as u8) as char);
        for x in 0..BOARD_SIZE {
            let ch = match board.cell(x, y) {
                Some(c) if c.sunk => '#',
                Some(c) if c.shot && c.is_occupied() => 'X',
                Some(c) if c.shot => 'o',
                Some(c) if reveal && c.is_occupied() => 'S',
                _ => '.',
            };
            let _ = write!(out, "{:>3}", ch);
        }
        out.push('\n');
    }
    out
}

/// Both boards, enemy on top, with fleet status for the player.
pub fn render_view(game: &Game) -> String {
    let mut out = String::new();
    out.push_str("Enemy waters:\n");
    out.push_str(&render_board(game.enemy_board(), game.is_over()));
    out.push_str("\nYour fleet:\n");
    out.push_str(&render_board(game.player_board(), true));
    out.push_str("  Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water\n");
    for ship in game.player_board().ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "Active" };
        let _ = writeln!(out, "    {} ({}): {}", ship.label(), ship.length(), status);
    }
    out
}

pub fn describe_player_turn(turn: &PlayerTurn) -> String {
    let at = turn.target;
    match &turn.result {
        ShotResult::Sunk { ship, .. } => format!("You fired at {} and sunk an enemy {}.", at, ship),
        ShotResult::Hit { .. } => format!("You fired at {} and hit a ship.", at),
        ShotResult::Miss { .. } => format!("You fired at {} and missed.", at),
    }
}

pub fn describe_ai_turn(turn: &AiTurn) -> String {
    match turn {
        AiTurn::Fired { target, result, .. } => {
            let suffix = match result {
                ShotResult::Sunk { ship, .. } => format!(" and sunk your {}.", ship),
                ShotResult::Hit { .. } => " and scored a hit.".to_string(),
                ShotResult::Miss { .. } => " and missed.".to_string(),
            };
            format!("Enemy fired at {}{}", target, suffix)
        }
        AiTurn::Failed => "Enemy move failed to resolve.".to_string(),
        AiTurn::Cancelled => "Enemy move was cancelled.".to_string(),
    }
}

pub fn describe_winner(winner: Side, difficulty: Difficulty) -> String {
    match winner {
        Side::Player => "Victory. You destroyed the enemy fleet.".to_string(),
        Side::Computer => format!("Defeat on {} mode. Start a new game.", difficulty),
    }
}

/// What the player should do next.
pub fn placement_hint(game: &Game) -> String {
    match game.phase() {
        Phase::Placement => match game.placement().next_entry() {
            Some(next) => format!(
                "Next ship: {} ({} cells, {}). Enter a cell to place it.",
                next.label,
                next.length,
                game.placement().orientation()
            ),
            None => "Fleet ready. Type 'start' to begin the battle.".to_string(),
        },
        Phase::Battle => "Battle mode active. Enter a cell to fire on enemy waters.".to_string(),
        Phase::GameOver => "Match complete. Type 'new' to place a new fleet.".to_string(),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <cell>        place the next ship / fire at a cell, e.g. C5 or j10");
    println!("  rotate, r     toggle ship orientation (placement)");
    println!("  auto          place the remaining ships randomly (placement)");
    println!("  undo, clear   remove the last ship / all ships (placement)");
    println!("  start         begin the battle once the fleet is placed");
    println!("  difficulty D  easy, medium, hard or impossible");
    println!("  new           start a new game");
    println!("  show          redraw the boards");
    println!("  quit          leave the game");
}

/// Interactive game on stdin/stdout.
pub async fn run_interactive(session: Session) -> anyhow::Result<()> {
    println!("{}", render_view(&session.lock()));
    println!("{}", placement_hint(&session.lock()));
    println!("Type 'help' for commands.");

    let mut lines = io::stdin().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        match apply(&session, command).await {
            Ok(()) => {}
            Err(e) => println!("{}.", e),
        }
    }
    Ok(())
}

async fn apply(session: &Session, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Target(at) => {
            let phase = session.lock().phase();
            if phase == Phase::Placement {
                let placed = session.with_game(|g| g.place_next_ship(at.x, at.y))?;
                println!("Placed {}.", placed.label);
                show(session);
            } else {
                fire(session, at).await?;
            }
        }
        Command::Rotate => {
            let o = session.with_game(Game::toggle_orientation)?;
            println!("Rotate: {}", o);
        }
        Command::Auto => {
            session.with_game(Game::auto_place_remaining)?;
            println!("Fleet auto-deployed. Type 'start' to begin the battle.");
            show(session);
        }
        Command::Undo => {
            let removed = session.with_game(Game::undo_placement)?;
            println!("Removed {}. Place it again.", removed.label);
            show(session);
        }
        Command::Clear => {
            session.with_game(Game::clear_placements)?;
            println!("Cleared your board. Place your fleet again.");
            show(session);
        }
        Command::Start => {
            session.with_game(Game::start_battle)?;
            println!(
                "Battle started. Difficulty: {}. Fire on enemy waters.",
                session.lock().difficulty()
            );
            show(session);
        }
        Command::New => {
            session.new_game()?;
            println!("New game.");
            show(session);
        }
        Command::SetDifficulty(d) => {
            session.with_game(|g| g.set_difficulty(d));
            println!("Difficulty set to {}.", d);
        }
        Command::Show => show(session),
        Command::Help => print_help(),
        Command::Quit => {}
    }
    Ok(())
}

async fn fire(session: &Session, at: Coord) -> anyhow::Result<()> {
    let (turn, pending) = match session.player_fire(at.x, at.y) {
        Ok(r) => r,
        Err(GameError::Board(e)) if e.is_repeated() => {
            println!("That coordinate has already been fired on.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let difficulty = session.lock().difficulty();
    if let Some(winner) = turn.winner {
        println!("{}", describe_player_turn(&turn));
        show(session);
        println!("{}", describe_winner(winner, difficulty));
        return Ok(());
    }
    println!("{} Enemy is thinking...", describe_player_turn(&turn));

    if let Some(handle) = pending {
        let ai_turn = handle.await?;
        show(session);
        match &ai_turn {
            AiTurn::Fired {
                winner: Some(winner),
                ..
            } => {
                println!("{}", describe_ai_turn(&ai_turn));
                println!("{}", describe_winner(*winner, session.lock().difficulty()));
            }
            AiTurn::Cancelled => {}
            _ => println!("{} Your turn.", describe_ai_turn(&ai_turn)),
        }
    }
    Ok(())
}

fn show(session: &Session) {
    let game = session.lock();
    println!("{}", render_view(&game));
    println!("{}", placement_hint(&game));
}
