//! Site configuration.
//!
//! Motion timings and contact details can be overridden by embedding a JSON
//! block in the host page:
//!
//! ```html
//! <script id="fieldlab-config" type="application/json">
//!   { "motion": { "hero_scroll_ms": 1800, "intro": "signal_sweep" } }
//! </script>
//! ```
//!
//! Every field is optional. Missing fields take the defaults below.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::{DEFAULT_CONTACT_EMAIL, INTRO_CHIPS};
use crate::error::{FieldLabError, FieldLabResult};
use crate::stagger::StaggerPlan;

/// DOM id of the embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "fieldlab-config";

/// Which intro section follows the hero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroVariant {
    /// Revealed paragraph with chips lit in sequence
    #[default]
    Chips,
    /// Pinned radial sweep revealing three sentences
    SignalSweep,
    /// Pinned dot grid with lines drawn between key phrases
    SensorGrid,
}

impl IntroVariant {
    pub fn label(&self) -> &'static str {
        match self {
            IntroVariant::Chips => "chips",
            IntroVariant::SignalSweep => "signal sweep",
            IntroVariant::SensorGrid => "sensor grid",
        }
    }
}

/// Timings and thresholds for the scroll/reveal engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Hero "Scroll down" animation length
    pub hero_scroll_ms: u64,
    /// Intro "Continue" animation length
    pub continue_scroll_ms: u64,
    pub intro_threshold: f64,
    pub fields_threshold: f64,
    pub chip_count: usize,
    pub chip_start_ms: u64,
    pub chip_step_ms: u64,
    /// Treat the visitor as preferring reduced motion regardless of the
    /// browser setting
    pub force_reduced_motion: bool,
    pub intro: IntroVariant,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            hero_scroll_ms: 2200,
            continue_scroll_ms: 2200,
            intro_threshold: 0.35,
            fields_threshold: 0.2,
            chip_count: INTRO_CHIPS.len(),
            chip_start_ms: 1000,
            chip_step_ms: 700,
            force_reduced_motion: false,
            intro: IntroVariant::Chips,
        }
    }
}

impl MotionConfig {
    pub fn hero_scroll(&self) -> Duration {
        Duration::from_millis(self.hero_scroll_ms)
    }

    pub fn continue_scroll(&self) -> Duration {
        Duration::from_millis(self.continue_scroll_ms)
    }

    /// Stagger plan for the intro chips.
    pub fn chip_plan(&self) -> StaggerPlan {
        StaggerPlan::new(
            self.chip_count,
            Duration::from_millis(self.chip_start_ms),
            Duration::from_millis(self.chip_step_ms),
        )
    }

    fn validate(&self) -> FieldLabResult<()> {
        for (name, value) in [
            ("intro_threshold", self.intro_threshold),
            ("fields_threshold", self.fields_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FieldLabError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("hero_scroll_ms", self.hero_scroll_ms),
            ("continue_scroll_ms", self.continue_scroll_ms),
        ] {
            if value == 0 {
                return Err(FieldLabError::InvalidConfig(format!("{} must be positive", name)));
            }
        }
        if self.chip_count > INTRO_CHIPS.len() {
            return Err(FieldLabError::InvalidConfig(format!(
                "chip_count must be at most {}, got {}",
                INTRO_CHIPS.len(),
                self.chip_count
            )));
        }
        Ok(())
    }
}

/// Top-level site configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub motion: MotionConfig,
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON configuration block.
    pub fn from_json(json: &str) -> FieldLabResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.motion.validate()?;
        if !config.contact_email.contains('@') {
            return Err(FieldLabError::InvalidConfig(format!(
                "contact_email '{}' is not an address",
                config.contact_email
            )));
        }
        Ok(config)
    }

    /// `mailto:` link for the footer call to action.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.motion.hero_scroll(), Duration::from_millis(2200));
        assert_eq!(config.motion.intro_threshold, 0.35);
        assert_eq!(config.motion.fields_threshold, 0.2);
        assert_eq!(config.motion.intro, IntroVariant::Chips);
        assert_eq!(config.mailto(), "mailto:shakoorlab.danforth@gmail.com");

        let plan = config.motion.chip_plan();
        assert_eq!(plan.count, 5);
        assert_eq!(plan.offset(4), Duration::from_millis(3800));
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(
            r#"{ "motion": { "hero_scroll_ms": 1500, "intro": "sensor_grid" } }"#,
        )
        .unwrap();
        assert_eq!(config.motion.hero_scroll_ms, 1500);
        assert_eq!(config.motion.continue_scroll_ms, 2200);
        assert_eq!(config.motion.intro, IntroVariant::SensorGrid);
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let err = SiteConfig::from_json(r#"{ "motion": { "fields_threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, FieldLabError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = SiteConfig::from_json(r#"{ "motion": { "continue_scroll_ms": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("continue_scroll_ms"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SiteConfig::from_json("{ motion").unwrap_err();
        assert!(matches!(err, FieldLabError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_email() {
        assert!(SiteConfig::from_json(r#"{ "contact_email": "nobody" }"#).is_err());
    }

    #[test]
    fn test_intro_variant_label() {
        assert_eq!(IntroVariant::SignalSweep.label(), "signal sweep");
    }
}
