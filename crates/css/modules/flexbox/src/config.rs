//! Runtime configuration for flex layout.
//!
//! Configuration can be loaded from environment variables or constructed
//! programmatically and handed to `FlexFormattingContext::with_config`.

use std::env;

/// Flags controlling output precision and debug dumps of flex layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlexLayoutConfig {
    /// Snap final item sizes and offsets to 1/64 px layout units
    pub snap_to_layout_units: bool,
    /// Log every flex line and its items after a definitive layout
    pub dump_flex_lines: bool,
}

impl FlexLayoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `VALOR_FLEX_SNAP`: Set to "1" to snap geometry to layout units (default: disabled)
    /// - `VALOR_FLEX_DUMP`: Set to "1" to dump flex lines (default: disabled)
    ///
    /// # Returns
    ///
    /// A new `FlexLayoutConfig` populated from environment variables
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            snap_to_layout_units: flag_enabled(env::var("VALOR_FLEX_SNAP").ok().as_deref()),
            dump_flex_lines: flag_enabled(env::var("VALOR_FLEX_DUMP").ok().as_deref()),
        }
    }
}

fn flag_enabled(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1" | "true" | "on"))
}
