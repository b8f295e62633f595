//! Domain records built from IFPA responses.
//!
//! # Design
//! Records are only ever constructed by `mapper`, which guarantees that a
//! `Player` always has a non-empty id. Fields are private and exposed through
//! accessors so that guarantee cannot be broken after construction.

use serde::Serialize;

/// A player profile, as returned by `player/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub(crate) id: String,
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) country_code: Option<String>,
    pub(crate) country_name: Option<String>,
    pub(crate) initials: Option<String>,
    pub(crate) age: Option<i64>,
    pub(crate) is_excluded: Option<bool>,
    pub(crate) is_ifpa_registered: Option<bool>,
    pub(crate) stats: Option<PlayerStats>,
}

impl Player {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country_name.as_deref()
    }

    pub fn initials(&self) -> Option<&str> {
        self.initials.as_deref()
    }

    pub fn age(&self) -> Option<i64> {
        self.age
    }

    /// Whether the player is excluded from rankings.
    pub fn is_excluded(&self) -> Option<bool> {
        self.is_excluded
    }

    pub fn is_ifpa_registered(&self) -> Option<bool> {
        self.is_ifpa_registered
    }

    pub fn stats(&self) -> Option<&PlayerStats> {
        self.stats.as_ref()
    }
}

/// Ranking statistics for a player. Unranked players have every field absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayerStats {
    pub(crate) wppr_rank: Option<i64>,
    pub(crate) rating_rank: Option<i64>,
    pub(crate) rating_value: Option<f64>,
}

impl PlayerStats {
    pub fn wppr_rank(&self) -> Option<i64> {
        self.wppr_rank
    }

    pub fn rating_rank(&self) -> Option<i64> {
        self.rating_rank
    }

    pub fn rating_value(&self) -> Option<f64> {
        self.rating_value
    }
}
