use std::fmt;

use serde::{Deserialize, Serialize};

/// Public-facing rank band. Serialized as its display key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Singularity Class")]
    SingularityClass,
    #[serde(rename = "Visionary Elite")]
    VisionaryElite,
    #[serde(rename = "Top 1% Elite")]
    TopOnePercentElite,
    #[serde(rename = "World Class")]
    WorldClass,
    #[serde(rename = "High Achiever")]
    HighAchiever,
    #[serde(rename = "Global Middle Class")]
    GlobalMiddleClass,
    #[serde(rename = "Aspiring Global")]
    AspiringGlobal,
    #[serde(rename = "Global Citizen")]
    GlobalCitizen,
}

impl Tier {
    /// All tiers, rarest first.
    pub const ALL: [Tier; 8] = [
        Tier::SingularityClass,
        Tier::VisionaryElite,
        Tier::TopOnePercentElite,
        Tier::WorldClass,
        Tier::HighAchiever,
        Tier::GlobalMiddleClass,
        Tier::AspiringGlobal,
        Tier::GlobalCitizen,
    ];

    /// Display key, also used as the i18n lookup key by the presentation layer.
    pub fn key(self) -> &'static str {
        match self {
            Self::SingularityClass => "Singularity Class",
            Self::VisionaryElite => "Visionary Elite",
            Self::TopOnePercentElite => "Top 1% Elite",
            Self::WorldClass => "World Class",
            Self::HighAchiever => "High Achiever",
            Self::GlobalMiddleClass => "Global Middle Class",
            Self::AspiringGlobal => "Aspiring Global",
            Self::GlobalCitizen => "Global Citizen",
        }
    }

    /// Hex display color.
    pub fn color(self) -> &'static str {
        match self {
            Self::SingularityClass => "#ff00ff",
            Self::VisionaryElite => "#ff0055",
            Self::TopOnePercentElite | Self::HighAchiever => "#00f3ff",
            Self::WorldClass => "#ffd700",
            Self::GlobalMiddleClass => "#4cd137",
            Self::AspiringGlobal => "#fbc531",
            Self::GlobalCitizen => "#a0a0a0",
        }
    }

    /// Parse a display key back into a tier.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.key() == key)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
