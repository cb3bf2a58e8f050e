//! Counting modes and expiry behaviour.

use serde::{Deserialize, Serialize};

/// The two duration presets a countdown can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Focused work period.
    #[default]
    Work,
    /// Rest period between work periods.
    Break,
}

impl Mode {
    /// All modes, in display order.
    pub const ALL: [Self; 2] = [Self::Work, Self::Break];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }

    /// The mode that is not this one.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What the countdown does once it reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryPolicy {
    /// Clamp at zero, stop, and report completion.
    #[default]
    Stop,
    /// Keep counting below zero; completion is reported once at zero.
    Overrun,
}

impl std::fmt::Display for ExpiryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Overrun => write!(f, "overrun"),
        }
    }
}
