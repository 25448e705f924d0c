//! Sprite Fusion tilemap documents.
//!
//! A map is a list of layers of square tiles. Layers flagged as `collider`
//! block movement; the `entities` layer is never drawn and carries markers
//! such as the player spawn point in tile attributes.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Deserializer};

use super::rect::Rect;
use crate::error::Result;

/// Name of the layer holding entity markers.
pub const ENTITIES_LAYER: &str = "entities";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileMap {
    pub tile_size: u32,
    pub map_width: u32,
    pub map_height: u32,
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(default)]
    pub collider: bool,
    #[serde(default)]
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tile {
    /// Index into the spritesheet, row-major.
    #[serde(deserialize_with = "tile_id")]
    pub id: u32,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

// Sprite Fusion writes ids as strings ("12"); accept numbers too.
fn tile_id<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(id) => Ok(id),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl Tile {
    /// Returns the string attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(serde_json::Value::as_str)
    }
}

impl TileMap {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Map size in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        let tile = self.tile_size as f32;
        Vec2::new(self.map_width as f32 * tile, self.map_height as f32 * tile)
    }

    /// One rectangle per tile on every collider layer.
    pub fn collision_rects(&self) -> Vec<Rect> {
        let size = self.tile_size as f32;
        self.layers
            .iter()
            .filter(|layer| layer.collider)
            .flat_map(|layer| layer.tiles.iter())
            .map(|tile| Rect::new(tile.x as f32 * size, tile.y as f32 * size, size, size))
            .collect()
    }

    /// Pixel position of the first `player_spawn` entity, or the origin.
    pub fn player_spawn(&self) -> Vec2 {
        let size = self.tile_size as f32;
        self.layers
            .iter()
            .filter(|layer| layer.name == ENTITIES_LAYER)
            .flat_map(|layer| layer.tiles.iter())
            .find(|tile| tile.attribute("type") == Some("player_spawn"))
            .map(|tile| Vec2::new(tile.x as f32 * size, tile.y as f32 * size))
            .unwrap_or(Vec2::ZERO)
    }

    /// Drawable layers, bottom layer first.
    pub fn draw_order(&self) -> impl Iterator<Item = &Layer> {
        self.layers
            .iter()
            .rev()
            .filter(|layer| layer.name != ENTITIES_LAYER)
    }

    /// Spritesheet region for tile `id` in a sheet `columns` tiles wide.
    pub fn source_rect(&self, id: u32, columns: u32) -> Rect {
        let size = self.tile_size as f32;
        let columns = columns.max(1);
        Rect::new(
            (id % columns) as f32 * size,
            (id / columns) as f32 * size,
            size,
            size,
        )
    }
}
