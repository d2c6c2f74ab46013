//! Error types for widget setup and browser binding operations.
//!
//! None of these reach the host: callers log them and fall back to partial
//! data (empty catalog, no selection).

use thiserror::Error;

/// Primary error type for the tile group widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Host context payload could not be decoded.
    #[error("invalid host context")]
    InvalidContext {
        /// Decoding error detail.
        source: serde_json::Error,
    },
    /// Requested tile dimension is below the supported minimum.
    #[error("tile {dimension} too small")]
    TileTooSmall {
        /// Dimension that failed validation (`width` or `height`).
        dimension: &'static str,
        /// Requested size in pixels.
        value: u32,
        /// Exclusive lower bound in pixels.
        minimum: u32,
    },
    /// A browser API call failed.
    #[cfg(target_arch = "wasm32")]
    #[error("dom operation failed")]
    Dom {
        /// Operation identifier.
        operation: &'static str,
        /// Stringified JavaScript error.
        detail: String,
    },
}

/// Convenience alias for widget results.
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_too_small_names_dimension() {
        let err = WidgetError::TileTooSmall {
            dimension: "width",
            value: 10,
            minimum: 60,
        };
        assert_eq!(err.to_string(), "tile width too small");
    }

    #[test]
    fn invalid_context_exposes_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WidgetError::InvalidContext { source };
        assert!(std::error::Error::source(&err).is_some());
    }
}
