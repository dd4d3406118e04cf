use serde::{Deserialize, Serialize};

/// Verbosity at which [`TracingSink`](crate::TracingSink) emits individual
/// conflict entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    Trace,
    Debug,
    Info,
    Warn,
}

impl ReportLevel {
    /// The matching `tracing` level.
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
        }
    }
}

/// Configuration for conflict reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum number of entries listed per category. Remaining entries are
    /// only counted.
    pub max_listed: usize,
    /// Level used for individual conflict entries.
    pub level: ReportLevel,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_listed: 20,
            level: ReportLevel::Info,
        }
    }
}

impl ReportConfig {
    /// List every entry, however many there are.
    pub fn unlimited() -> Self {
        Self {
            max_listed: usize::MAX,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ReportConfig::default();
        assert_eq!(c.max_listed, 20);
        assert_eq!(c.level, ReportLevel::Info);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let c: ReportConfig = serde_json::from_str(r#"{"level": "warn"}"#).unwrap();
        assert_eq!(c.level, ReportLevel::Warn);
        assert_eq!(c.max_listed, 20);
    }

    #[test]
    fn level_maps_to_tracing() {
        assert_eq!(ReportLevel::Debug.as_tracing(), tracing::Level::DEBUG);
        assert_eq!(ReportLevel::Warn.as_tracing(), tracing::Level::WARN);
    }
}
