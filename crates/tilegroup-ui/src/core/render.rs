//! Pure projection of the catalog and selection into a tile tree.
//!
//! # Design
//! - Rendering is a function of its inputs only; equal inputs give equal trees.
//! - Exactly one tile is a tab stop (roving tabindex): the checked tile, or the
//!   first tile when nothing in the catalog is checked.

use std::fmt::Write;

use crate::config::{TileGroupConfig, TileSize};
use crate::core::catalog::{OptionCatalog, OptionValue};
use crate::core::icon::{IconVariant, resolve_icon};

/// ARIA role carried by every tile.
pub const TILE_ROLE: &str = "radio";
/// ARIA role of the tile container.
pub const GROUP_ROLE: &str = "radiogroup";
/// `data-role` marker used to locate tiles in the mounted markup.
pub const TILE_MARKER: &str = "tile";
/// CSS selector matching any mounted tile.
pub const TILE_SELECTOR: &str = r#"[data-role="tile"]"#;

/// Renderable projection of one option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualTile {
    /// Option value.
    pub value: OptionValue,
    /// Display label.
    pub label: String,
    /// Icon resolved from the label.
    pub icon: IconVariant,
    /// Whether this tile is the committed selection.
    pub checked: bool,
    /// Whether this tile is the group's single tab stop.
    pub focusable: bool,
    /// Tile dimensions.
    pub size: TileSize,
}

/// Rendered radio group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGroupView {
    /// Accessible name of the group.
    pub label: String,
    /// Tiles in display order.
    pub tiles: Vec<VisualTile>,
}

impl TileGroupView {
    /// Tiles currently marked checked.
    pub fn checked_tiles(&self) -> impl Iterator<Item = &VisualTile> {
        self.tiles.iter().filter(|tile| tile.checked)
    }

    /// The group's tab stop, absent only for an empty group.
    #[must_use]
    pub fn focusable_tile(&self) -> Option<&VisualTile> {
        self.tiles.iter().find(|tile| tile.focusable)
    }

    /// Serialize to the markup mounted in the host container.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut markup = String::new();
        let _ = write!(
            markup,
            r#"<div class="tile-group" role="{GROUP_ROLE}" aria-label="{}">"#,
            escape_html(&self.label)
        );
        for tile in &self.tiles {
            write_tile(&mut markup, tile);
        }
        markup.push_str("</div>");
        markup
    }
}

fn write_tile(markup: &mut String, tile: &VisualTile) {
    let class = if tile.checked {
        "tile selected"
    } else {
        "tile"
    };
    let tabindex = if tile.focusable { "0" } else { "-1" };
    let _ = write!(
        markup,
        concat!(
            r#"<button type="button" class="{class}" "#,
            r#"style="--tile-w:{width}px;--tile-h:{height}px" "#,
            r#"data-role="{marker}" data-value="{value}" role="{role}" "#,
            r#"aria-checked="{checked}" tabindex="{tabindex}">"#,
            r#"<span class="icon" aria-hidden="true">{icon}</span>"#,
            r#"<span class="text">{label}</span>"#,
            r#"<span class="ring" aria-hidden="true"></span>"#,
            "</button>"
        ),
        class = class,
        width = tile.size.width(),
        height = tile.size.height(),
        marker = TILE_MARKER,
        value = tile.value,
        role = TILE_ROLE,
        checked = tile.checked,
        tabindex = tabindex,
        icon = tile.icon.svg(),
        label = escape_html(&tile.label),
    );
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Builds [`TileGroupView`]s with a fixed presentation config.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewRenderer {
    config: TileGroupConfig,
}

impl ViewRenderer {
    /// Renderer for the given presentation config.
    #[must_use]
    pub const fn new(config: TileGroupConfig) -> Self {
        Self { config }
    }

    /// Presentation config in use.
    #[must_use]
    pub const fn config(&self) -> &TileGroupConfig {
        &self.config
    }

    /// Project the catalog and selection into a tile tree.
    #[must_use]
    pub fn render(&self, catalog: &OptionCatalog, selected: Option<OptionValue>) -> TileGroupView {
        let stop = selected
            .and_then(|value| catalog.position(value))
            .unwrap_or(0);
        let tiles = catalog
            .iter()
            .enumerate()
            .map(|(index, option)| VisualTile {
                value: option.value,
                label: option.label.clone(),
                icon: resolve_icon(&option.label),
                checked: selected == Some(option.value),
                focusable: index == stop,
                size: self.config.tile_size,
            })
            .collect();
        TileGroupView {
            label: self.config.group_label.clone(),
            tiles,
        }
    }
}
