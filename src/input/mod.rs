//! Mapping raw input to commands.
//!
//! Only the four directions reach the board. Restart and quit are handled
//! by whoever drives the session.

use crate::core::Direction;

/// A command from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Direction for a keyboard event code (`ArrowLeft`, `KeyA`, ...).
///
/// ```
/// use tile_merge::core::Direction;
/// use tile_merge::input::direction_for_key;
///
/// assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
/// assert_eq!(direction_for_key("KeyD"), Some(Direction::Right));
/// assert_eq!(direction_for_key("Space"), None);
/// ```
#[must_use]
pub fn direction_for_key(code: &str) -> Option<Direction> {
    match code {
        "ArrowLeft" | "KeyA" => Some(Direction::Left),
        "ArrowRight" | "KeyD" => Some(Direction::Right),
        "ArrowUp" | "KeyW" => Some(Direction::Up),
        "ArrowDown" | "KeyS" => Some(Direction::Down),
        _ => None,
    }
}

/// Parse one line of terminal input.
///
/// Accepts WASD, vi keys (`h j k l`), direction words, and key codes.
/// `n`/`r` restart, `q` quits. Case and surrounding space are ignored.
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    let trimmed = input.trim();
    if let Some(dir) = direction_for_key(trimmed) {
        return Some(Command::Move(dir));
    }
    let command = match trimmed.to_ascii_lowercase().as_str() {
        "a" | "h" | "left" => Command::Move(Direction::Left),
        "d" | "l" | "right" => Command::Move(Direction::Right),
        "w" | "k" | "up" => Command::Move(Direction::Up),
        "s" | "j" | "down" => Command::Move(Direction::Down),
        "n" | "r" | "new" | "restart" => Command::Restart,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}
