use crate::{backtracking, bottom_up, top_down};
use anyhow::{anyhow, Result};
use knapsack_challenges::knapsack::{Instance, Solution};
use std::{fmt, str::FromStr};

/// Strategy used to compute the optimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    Backtracking,
    TopDown,
    BottomUp,
}

impl Version {
    pub const ALL: [Version; 3] = [Version::Backtracking, Version::TopDown, Version::BottomUp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Backtracking => "backtracking",
            Version::TopDown => "top_down",
            Version::BottomUp => "bottom_up",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::ALL
            .into_iter()
            .find(|version| version.as_str() == s)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown version '{}'. Expected one of: {}",
                    s,
                    Version::ALL
                        .iter()
                        .map(Version::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

pub fn get_algorithm(version: Version) -> fn(&Instance) -> Solution {
    match version {
        Version::Backtracking => backtracking::solve_challenge,
        Version::TopDown => top_down::solve_challenge,
        Version::BottomUp => bottom_up::solve_challenge,
    }
}

pub fn solve(version: Version, instance: &Instance) -> Solution {
    get_algorithm(version)(instance)
}
