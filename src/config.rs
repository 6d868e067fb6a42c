//! Configuration for tunnel computation

use std::fmt;

/// Configuration for the verification tunnel engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelConfig {
    /// Age in whole years at which a person moves from the minor tier to
    /// the adult tier
    pub adult_age: u32,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self { adult_age: 18 }
    }
}

impl fmt::Display for TunnelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tunnel Configuration:")?;
        writeln!(f, "  Adult Age Threshold: {}", self.adult_age)?;
        Ok(())
    }
}

impl TunnelConfig {
    /// Create a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
