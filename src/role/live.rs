use crate::error::LivePolitenessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Politeness of an `aria-live` region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaLivePoliteness {
    #[default]
    Off,
    Polite,
    Assertive,
}

impl AriaLivePoliteness {
    pub fn as_str(self) -> &'static str {
        match self {
            AriaLivePoliteness::Off => "off",
            AriaLivePoliteness::Polite => "polite",
            AriaLivePoliteness::Assertive => "assertive",
        }
    }
}

impl FromStr for AriaLivePoliteness {
    type Err = LivePolitenessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "off" => Ok(AriaLivePoliteness::Off),
            "polite" => Ok(AriaLivePoliteness::Polite),
            "assertive" => Ok(AriaLivePoliteness::Assertive),
            other => Err(LivePolitenessError(other.to_string())),
        }
    }
}

impl fmt::Display for AriaLivePoliteness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
