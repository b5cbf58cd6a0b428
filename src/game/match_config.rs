use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

use crate::board::chess_types::Color;
use crate::search::search_job::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Cpu,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "HUMAN"),
            PlayerKind::Cpu => write!(f, "CPU"),
        }
    }
}

/// Search presets for CPU players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn search_config(self) -> SearchConfig {
        let (max_depth, seconds) = match self {
            Difficulty::Easy => (2, 2),
            Difficulty::Normal => (3, 5),
            Difficulty::Hard => (4, 10),
        };
        SearchConfig {
            max_depth,
            time_budget: Duration::from_secs(seconds),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub search: SearchConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Cpu,
            search: Difficulty::default().search_config(),
        }
    }
}

impl MatchConfig {
    pub fn cpu_vs_cpu(search: SearchConfig) -> Self {
        Self {
            white: PlayerKind::Cpu,
            black: PlayerKind::Cpu,
            search,
        }
    }

    #[inline]
    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}
