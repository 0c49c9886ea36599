//! Player identities.

use std::fmt;
use std::ops::Not;

/// One of the two players. The numeric id (1 or 2) is the encoding used by hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Both players in id order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Return the host-facing id (1 or 2).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Return the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Decode a host-facing id. Returns `None` for anything but 1 or 2.
    pub const fn from_id(id: i64) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
