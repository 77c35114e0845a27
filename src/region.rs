//! The data centers hosting the pCloud API
//!
//! An account belongs to one region and has to be reached through its endpoint.

use std::str::FromStr;

/// Base url of the API in Europe
pub const EU_REGION: &str = "https://eapi.pcloud.com";
/// Base url of the API in the United States
pub const US_REGION: &str = "https://api.pcloud.com";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Region {
    #[default]
    Europe,
    UnitedStates,
}

impl Region {
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Europe => EU_REGION,
            Self::UnitedStates => US_REGION,
        }
    }

    /// Reads the region from the `PCLOUD_REGION` environment variable.
    ///
    /// Falls back to [`Region::Europe`] when the variable is missing or unknown.
    pub fn from_env() -> Self {
        std::env::var("PCLOUD_REGION")
            .ok()
            .and_then(|value| match value.parse() {
                Ok(region) => Some(region),
                Err(err) => {
                    tracing::warn!("{err}, using the default region");
                    None
                }
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown region {0:?}")]
pub struct UnknownRegion(String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eu" | "europe" => Ok(Self::Europe),
            "us" | "united-states" => Ok(Self::UnitedStates),
            _ => Err(UnknownRegion(s.to_string())),
        }
    }
}
