//! Widget configuration: tile sizing and the group's accessible name.
//!
//! # Design
//! - Defaults match the shipped stylesheet (120 x 110 px tiles).
//! - Host overrides are optional; invalid ones are logged and ignored.

use serde_json::Value;
use tracing::warn;

use crate::error::{WidgetError, WidgetResult};
use crate::host::HostParameters;

/// Default tile width in pixels.
pub const DEFAULT_TILE_WIDTH: u32 = 120;
/// Default tile height in pixels.
pub const DEFAULT_TILE_HEIGHT: u32 = 110;
/// Tile widths must exceed this many pixels.
pub const MIN_TILE_WIDTH: u32 = 60;
/// Tile heights must exceed this many pixels.
pub const MIN_TILE_HEIGHT: u32 = 80;
/// Accessible name announced for the radio group.
pub const DEFAULT_GROUP_LABEL: &str = "Warranty Type";

/// Pixel dimensions applied to every tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSize {
    width: u32,
    height: u32,
}

impl TileSize {
    /// Validate and build a tile size.
    ///
    /// # Errors
    /// Returns [`WidgetError::TileTooSmall`] when either dimension does not
    /// exceed its minimum.
    pub fn new(width: u32, height: u32) -> WidgetResult<Self> {
        if width <= MIN_TILE_WIDTH {
            return Err(WidgetError::TileTooSmall {
                dimension: "width",
                value: width,
                minimum: MIN_TILE_WIDTH,
            });
        }
        if height <= MIN_TILE_HEIGHT {
            return Err(WidgetError::TileTooSmall {
                dimension: "height",
                value: height,
                minimum: MIN_TILE_HEIGHT,
            });
        }
        Ok(Self { width, height })
    }

    /// Tile width in pixels.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Tile height in pixels.
    #[must_use]
    pub const fn height(self) -> u32 {
        self.height
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_TILE_WIDTH,
            height: DEFAULT_TILE_HEIGHT,
        }
    }
}

/// Presentation settings for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGroupConfig {
    /// Size shared by all tiles.
    pub tile_size: TileSize,
    /// `aria-label` of the radio group.
    pub group_label: String,
}

impl Default for TileGroupConfig {
    fn default() -> Self {
        Self {
            tile_size: TileSize::default(),
            group_label: DEFAULT_GROUP_LABEL.to_string(),
        }
    }
}

impl TileGroupConfig {
    /// Replace the group's accessible name.
    #[must_use]
    pub fn with_group_label(mut self, label: impl Into<String>) -> Self {
        self.group_label = label.into();
        self
    }

    /// Replace the tile size.
    #[must_use]
    pub const fn with_tile_size(mut self, tile_size: TileSize) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Apply host sizing overrides. Each dimension applies independently when
    /// it passes [`TileSize::new`]; anything else keeps the current size.
    #[must_use]
    pub fn with_parameters(self, parameters: &HostParameters) -> Self {
        let width = pixel_override("width", parameters.tile_width.as_ref().map(|p| &p.raw));
        let height = pixel_override("height", parameters.tile_height.as_ref().map(|p| &p.raw));
        let mut config = self;
        if let Some(width) = width {
            let height = config.tile_size.height;
            config = config.resize(TileSize::new(width, height));
        }
        if let Some(height) = height {
            let width = config.tile_size.width;
            config = config.resize(TileSize::new(width, height));
        }
        config
    }

    fn resize(self, size: WidgetResult<TileSize>) -> Self {
        match size {
            Ok(size) => self.with_tile_size(size),
            Err(err) => {
                warn!(error = %err, "ignoring tile size override");
                self
            }
        }
    }
}

fn pixel_override(dimension: &'static str, raw: Option<&Value>) -> Option<u32> {
    let raw = raw.filter(|value| !value.is_null())?;
    let parsed = raw.as_u64().and_then(|value| u32::try_from(value).ok());
    if parsed.is_none() {
        warn!(dimension, value = %raw, "ignoring non-numeric tile size override");
    }
    parsed
}
