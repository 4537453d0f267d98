use std::fmt;

use crate::input::{KeyState, LogicalKey};

/// Symbolic direction derived from the held arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    Up,
}

impl Direction {
    /// All directions in ascending pitch order.
    pub const ALL: [Direction; 8] = [
        Direction::None,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Right => "right",
            Self::DownRight => "down-right",
            Self::Down => "down",
            Self::DownLeft => "down-left",
            Self::Left => "left",
            Self::UpLeft => "up-left",
            Self::Up => "up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Resolve the held arrow keys to a direction.
///
/// First match wins: right+down, left+down, left+up, right, down, left, up.
/// Right+up has no diagonal and resolves to right.
pub fn resolve(keys: &KeyState) -> Direction {
    resolve_arrows(
        keys.is_pressed(LogicalKey::Up),
        keys.is_pressed(LogicalKey::Down),
        keys.is_pressed(LogicalKey::Left),
        keys.is_pressed(LogicalKey::Right),
    )
}

fn resolve_arrows(up: bool, down: bool, left: bool, right: bool) -> Direction {
    if right && down {
        Direction::DownRight
    } else if left && down {
        Direction::DownLeft
    } else if left && up {
        Direction::UpLeft
    } else if right {
        Direction::Right
    } else if down {
        Direction::Down
    } else if left {
        Direction::Left
    } else if up {
        Direction::Up
    } else {
        Direction::None
    }
}
