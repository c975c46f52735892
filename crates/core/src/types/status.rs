//! Closed-set classification enums for plants.

use serde::{Deserialize, Serialize};

/// Plant category.
///
/// The catalog and personal collections both draw from this fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Succulent,
    Fern,
    Flowering,
    Tropical,
    Bonsai,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Succulent,
        Self::Fern,
        Self::Flowering,
        Self::Tropical,
        Self::Bonsai,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Succulent => write!(f, "succulent"),
            Self::Fern => write!(f, "fern"),
            Self::Flowering => write!(f, "flowering"),
            Self::Tropical => write!(f, "tropical"),
            Self::Bonsai => write!(f, "bonsai"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "succulent" => Ok(Self::Succulent),
            "fern" => Ok(Self::Fern),
            "flowering" => Ok(Self::Flowering),
            "tropical" => Ok(Self::Tropical),
            "bonsai" => Ok(Self::Bonsai),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// How demanding a plant is to keep alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CareLevel {
    #[default]
    Easy,
    Moderate,
    Difficult,
}

impl std::fmt::Display for CareLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Moderate => write!(f, "moderate"),
            Self::Difficult => write!(f, "difficult"),
        }
    }
}

impl std::str::FromStr for CareLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "difficult" => Ok(Self::Difficult),
            _ => Err(format!("invalid care level: {s}")),
        }
    }
}
