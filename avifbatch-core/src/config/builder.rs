// ============================================================================
// avifbatch-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for EncodeConfig
//
// Fluent construction of EncodeConfig with defaults for every field. The CLI
// starts from a builder seeded with the config file and layers flags on top.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for EncodeConfig

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::{Accounting, EncodeConfig, EncodeMode};
use crate::error::CoreResult;

/// Builder for creating EncodeConfig instances.
///
/// # Examples
///
/// ```rust
/// use avifbatch_core::config::{EncodeConfigBuilder, EncodeMode};
///
/// let config = EncodeConfigBuilder::new()
///     .binpath("/usr/local/bin/avif")
///     .quality(30)
///     .speed(4)
///     .delete_larger(true)
///     .mode(EncodeMode::Standard)
///     .build()
///     .unwrap();
/// assert_eq!(config.quality, Some(30));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EncodeConfigBuilder {
    config: EncodeConfig,
}

impl EncodeConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing configuration, e.g. one loaded from a file.
    pub fn from_config(config: EncodeConfig) -> Self {
        Self { config }
    }

    pub fn binpath(mut self, binpath: impl Into<PathBuf>) -> Self {
        self.config.binpath = binpath.into();
        self
    }

    pub fn quality(mut self, quality: i32) -> Self {
        self.config.quality = Some(quality);
        self
    }

    pub fn speed(mut self, speed: i32) -> Self {
        self.config.speed = Some(speed);
        self
    }

    pub fn delete_larger(mut self, delete: bool) -> Self {
        self.config.delete_larger = delete;
        self
    }

    pub fn delete_larger_than_reference(mut self, enable: bool) -> Self {
        self.config.delete_larger_than_reference = enable;
        self
    }

    /// Sets the reference extension. A leading dot is dropped.
    pub fn reference_extension(mut self, extension: &str) -> Self {
        self.config.reference_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn mode(mut self, mode: EncodeMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn accounting(mut self, accounting: Accounting) -> Self {
        self.config.accounting = accounting;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> CoreResult<EncodeConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Returns the configuration without validating it.
    ///
    /// Out-of-range values are then caught by the argument builder, which
    /// aborts the batch before the first encoder runs.
    pub fn build_unchecked(self) -> EncodeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_builder_layers_over_existing_config() {
        let base = EncodeConfig {
            quality: Some(20),
            delete_larger: true,
            ..Default::default()
        };
        let config = EncodeConfigBuilder::from_config(base)
            .speed(6)
            .reference_extension(".png")
            .build()
            .unwrap();
        assert_eq!(config.quality, Some(20));
        assert_eq!(config.speed, Some(6));
        assert!(config.delete_larger);
        assert_eq!(config.reference_extension, "png");
    }

    #[test]
    fn test_build_rejects_out_of_range_values() {
        let result = EncodeConfigBuilder::new().quality(64).build();
        assert!(matches!(result, Err(CoreError::Config(_))));

        let unchecked = EncodeConfigBuilder::new().speed(12).build_unchecked();
        assert_eq!(unchecked.speed, Some(12));
    }
}
