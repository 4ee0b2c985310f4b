//! Engine tuning parameters.
//!
//! Grid dimensions are compile-time constants in the types crate; the values
//! here may differ per engine instance.

use crate::types::{GRAVITY_INTERVAL_MS, LINE_CLEAR_BONUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Gravity fires once this many milliseconds have been exceeded
    pub gravity_interval_ms: u32,
    /// Points per cleared row
    pub line_clear_bonus: u32,
}

impl EngineConfig {
    pub fn with_gravity_interval_ms(mut self, ms: u32) -> Self {
        self.gravity_interval_ms = ms;
        self
    }

    pub fn with_line_clear_bonus(mut self, points: u32) -> Self {
        self.line_clear_bonus = points;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gravity_interval_ms: GRAVITY_INTERVAL_MS,
            line_clear_bonus: LINE_CLEAR_BONUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let cfg = EngineConfig::default()
            .with_gravity_interval_ms(250)
            .with_line_clear_bonus(100);
        assert_eq!(cfg.gravity_interval_ms, 250);
        assert_eq!(cfg.line_clear_bonus, 100);
        assert_eq!(EngineConfig::default().gravity_interval_ms, 1000);
    }
}
