//! Space configuration and validation.

use std::error::Error;
use std::fmt;

use latch_arena::ArenaError;

/// Configuration for a freshly constructed [`crate::Space`]'s arena.
///
/// `validate()` checks structural invariants before the space is built,
/// front-loading misconfiguration into a single explicit error rather
/// than discovering it mid-run.
#[derive(Clone, Copy, Debug)]
pub struct SpaceConfig {
    /// Size in bytes of each arena segment. Default: 4096.
    pub segment_size: usize,
    /// Maximum number of segments the arena may grow to. Default: 64.
    pub max_segments: u16,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            segment_size: 4096,
            max_segments: 64,
        }
    }
}

impl SpaceConfig {
    /// Check structural invariants, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segment_size == 0 {
            return Err(ConfigError::ZeroSegmentSize);
        }
        if self.max_segments == 0 {
            return Err(ConfigError::ZeroMaxSegments);
        }
        Ok(())
    }
}

/// Errors detected during [`SpaceConfig::validate`] or while allocating
/// from the space's arena.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// `segment_size` was zero.
    ZeroSegmentSize,
    /// `max_segments` was zero.
    ZeroMaxSegments,
    /// The arena rejected an allocation or region request.
    Arena(ArenaError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSegmentSize => write!(f, "segment_size must be at least 1"),
            ConfigError::ZeroMaxSegments => write!(f, "max_segments must be at least 1"),
            ConfigError::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        ConfigError::Arena(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(SpaceConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_segment_size_is_rejected() {
        let cfg = SpaceConfig {
            segment_size: 0,
            ..SpaceConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSegmentSize));
    }

    #[test]
    fn zero_max_segments_is_rejected() {
        let cfg = SpaceConfig {
            max_segments: 0,
            ..SpaceConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroMaxSegments));
    }
}
