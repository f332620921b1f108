//! Selection among equally scored moves

use std::{fmt, str::FromStr};

use rand::{Rng, prelude::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::Error;

/// How a search node picks one move out of its tie set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Uniform random choice over every move sharing the best score
    #[default]
    Uniform,
    /// The first move that reached the best score, in search order
    FirstFound,
}

impl TieBreak {
    /// Pick a move from `tied`; `None` only when `tied` is empty
    pub fn choose<R: Rng + ?Sized>(self, tied: &[usize], rng: &mut R) -> Option<usize> {
        match self {
            TieBreak::Uniform => tied.choose(rng).copied(),
            TieBreak::FirstFound => tied.first().copied(),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TieBreak::Uniform => "uniform",
            TieBreak::FirstFound => "first",
        })
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "uniform" | "random" => Ok(TieBreak::Uniform),
            "first" | "first-found" | "first_found" => Ok(TieBreak::FirstFound),
            _ => Err(Error::InvalidConfiguration {
                message: format!("unknown tie-break '{input}'. Expected one of: uniform, first"),
            }),
        }
    }
}
