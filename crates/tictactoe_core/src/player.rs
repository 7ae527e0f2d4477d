//! The two players of a session.

use crate::types::Marker;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Seat a player occupies. The first player always plays X and moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSlot {
    /// Player 1.
    First,
    /// Player 2.
    Second,
}

impl PlayerSlot {
    /// Marker assigned to this seat.
    pub fn marker(self) -> Marker {
        match self {
            PlayerSlot::First => Marker::X,
            PlayerSlot::Second => Marker::O,
        }
    }

    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }

    /// Seat for a 1-based player number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerSlot::First),
            2 => Some(PlayerSlot::Second),
            _ => None,
        }
    }

    /// 1-based player number.
    pub fn number(self) -> u8 {
        match self {
            PlayerSlot::First => 1,
            PlayerSlot::Second => 2,
        }
    }

    /// Name used when none is given.
    pub fn default_name(self) -> String {
        format!("Player {}", self.number())
    }
}

/// A player: name, fixed marker and the rounds won this match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    #[getter(skip)]
    slot: PlayerSlot,
    /// Display name.
    name: String,
    #[getter(skip)]
    wins: u32,
}

impl Player {
    /// Creates a player for `slot`, falling back to the default name when
    /// `name` is blank.
    #[instrument]
    pub fn new(slot: PlayerSlot, name: &str) -> Self {
        Self {
            slot,
            name: normalize_name(slot, name),
            wins: 0,
        }
    }

    /// Seat of this player.
    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    /// Marker of this player, fixed by the seat.
    pub fn marker(&self) -> Marker {
        self.slot.marker()
    }

    /// Rounds won.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Lightweight view for callers.
    pub fn to_ref(&self) -> PlayerRef {
        PlayerRef::new(self.slot, self.name.clone(), self.marker())
    }

    #[instrument(skip(self), fields(slot = ?self.slot))]
    pub(crate) fn rename(&mut self, name: &str) {
        self.name = normalize_name(self.slot, name);
        debug!(name = %self.name, "Player renamed");
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn clear_wins(&mut self) {
        self.wins = 0;
    }
}

fn normalize_name(slot: PlayerSlot, name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        slot.default_name()
    } else {
        trimmed.to_string()
    }
}

/// Player identity as reported to the presentation layer.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema, derive_new::new,
)]
pub struct PlayerRef {
    /// Seat.
    pub slot: PlayerSlot,
    /// Display name.
    pub name: String,
    /// Marker.
    pub marker: Marker,
}
