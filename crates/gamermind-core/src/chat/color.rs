//! Presentation colors for chat messages.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Presentation color tag attached to every chat message.
///
/// Human authors draw a pseudo-random color from the 8-entry palette at
/// join time. Gray sits outside the palette and is reserved for join
/// announcements; it is never assigned to an author.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChatColor {
    Cyan,
    Purple,
    Pink,
    Green,
    Yellow,
    Orange,
    Blue,
    Red,
    Gray,
}

impl ChatColor {
    /// The fixed palette authors are assigned from.
    pub const PALETTE: [ChatColor; 8] = [
        ChatColor::Cyan,
        ChatColor::Purple,
        ChatColor::Pink,
        ChatColor::Green,
        ChatColor::Yellow,
        ChatColor::Orange,
        ChatColor::Blue,
        ChatColor::Red,
    ];

    /// Picks a pseudo-random palette color for a joining author.
    pub fn random_palette<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::PALETTE[rng.gen_range(0..Self::PALETTE.len())]
    }
}
