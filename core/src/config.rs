//! Where the roster lives: API root plus cohort name.

use std::env;

pub const DEFAULT_API_ROOT: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2404-FTB-MT-WEB-PT";

pub const API_ROOT_VAR: &str = "PUPPYBOWL_API_ROOT";
pub const COHORT_VAR: &str = "PUPPYBOWL_COHORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_root: String,
    pub cohort: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
        }
    }
}

impl Config {
    pub fn new(api_root: impl Into<String>, cohort: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            cohort: cohort.into(),
        }
    }

    /// Compiled-in defaults, overridden by `PUPPYBOWL_API_ROOT` and
    /// `PUPPYBOWL_COHORT` when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(root) = lookup(API_ROOT_VAR).filter(|v| !v.trim().is_empty()) {
            config.api_root = root;
        }
        if let Some(cohort) = lookup(COHORT_VAR).filter(|v| !v.trim().is_empty()) {
            config.cohort = cohort;
        }
        config
    }

    /// `{api_root}/{cohort}`, the prefix every endpoint hangs off.
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.api_root.trim_end_matches('/'), self.cohort)
    }
}
