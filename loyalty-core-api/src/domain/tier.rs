use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Membership rank. Variants are declared lowest first, so the derived
/// ordering matches the upgrade path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Normal,
    Gold,
    Platinum,
    Diamond,
}

impl Tier {
    /// Every tier, lowest first.
    pub const ALL: [Tier; 4] = [Tier::Normal, Tier::Gold, Tier::Platinum, Tier::Diamond];

    /// The tier a member upgrades into, `None` at the top.
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::Normal => Some(Tier::Gold),
            Tier::Gold => Some(Tier::Platinum),
            Tier::Platinum => Some(Tier::Diamond),
            Tier::Diamond => None,
        }
    }

    pub fn is_top(self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Normal => "Normal",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(Tier::Normal),
            "Gold" => Ok(Tier::Gold),
            "Platinum" => Ok(Tier::Platinum),
            "Diamond" => Ok(Tier::Diamond),
            _ => Err(()),
        }
    }
}
