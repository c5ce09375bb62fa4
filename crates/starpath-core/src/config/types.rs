use serde::{Deserialize, Serialize};

use crate::search::{Algorithm, SearchOptions, DEFAULT_TOLERANCE};

fn default_true() -> bool {
    true
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// Starpath configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarpathConfig {
    /// Flags applied to graph documents that do not set them
    #[serde(default)]
    pub graph: GraphDefaults,

    /// Search engine settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Default graph construction flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefaults {
    #[serde(default)]
    pub directed: bool,
    #[serde(default = "default_true")]
    pub weighted: bool,
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: true,
        }
    }
}

/// Search engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Engine used when none is requested explicitly
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Relative tolerance for deciding cost ties
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Fail dijkstra on graphs with negative weights instead of searching anyway
    #[serde(default = "default_true")]
    pub reject_negative_weights: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            tolerance: DEFAULT_TOLERANCE,
            reject_negative_weights: true,
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            tolerance: self.tolerance,
            reject_negative_weights: self.reject_negative_weights,
        }
    }
}
