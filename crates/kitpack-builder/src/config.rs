//! Builder configuration.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{BuildError, BuildResult};

pub const DEFAULT_EXTENSION: &str = ".yaml";
pub const ENV_EXTENSION: &str = "KITPACK_EXTENSION";
pub const ENV_PATCHSET_POLICY: &str = "KITPACK_PATCHSET_POLICY";

/// How a patchset entry that sets both `patch` and `source` is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum PatchsetPolicy {
    /// Apply whichever is present; the inline patch goes first when both are.
    #[default]
    #[display("independent")]
    Independent,
    /// Reject entries that set both.
    #[display("exclusive")]
    Exclusive,
}

impl FromStr for PatchsetPolicy {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "independent" => Ok(Self::Independent),
            "exclusive" => Ok(Self::Exclusive),
            other => Err(BuildError::InvalidConfig {
                field: "patchset policy".to_string(),
                message: format!("unknown policy: {other}"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuilderConfig {
    /// Suffix appended to base and patchset sources before loading.
    pub extension: String,
    pub patchset_policy: PatchsetPolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            patchset_policy: PatchsetPolicy::default(),
        }
    }
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `KITPACK_EXTENSION` and `KITPACK_PATCHSET_POLICY`.
    pub fn from_env() -> BuildResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BuildResult<Self> {
        let mut config = Self::default();
        if let Some(extension) = lookup(ENV_EXTENSION) {
            config.extension = extension;
        }
        if let Some(policy) = lookup(ENV_PATCHSET_POLICY) {
            config.patchset_policy = policy.parse()?;
        }
        Ok(config)
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_patchset_policy(mut self, policy: PatchsetPolicy) -> Self {
        self.patchset_policy = policy;
        self
    }

    /// The locator handed to the loader for a declared source.
    pub fn locator_for(&self, source: &str) -> String {
        format!("{source}{}", self.extension)
    }
}
