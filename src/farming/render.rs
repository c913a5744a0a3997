//! Visual synchronisation systems that keep sprites in step with the tile map.
//!
//! Only tiles inside the camera's view have entities. Crops are always
//! drawn; the highlight outline follows the tile under the player.

use bevy::prelude::*;
use std::collections::HashMap;
use crate::config::GameConfig;
use crate::shared::*;
use super::crop_stage_color;

const Z_TILE: f32 = 0.0;
const Z_OVERLAY: f32 = 0.5;
const Z_CROP: f32 = 1.0;
const Z_HIGHLIGHT: f32 = 2.0;

#[derive(Component, Debug, Clone)]
pub struct TileSprite;

#[derive(Component, Debug, Clone)]
pub struct CropSprite {
    pub origin: (i32, i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Component, Debug, Clone)]
pub struct HighlightEdge(pub Edge);

#[derive(Debug, Clone, Copy)]
struct RenderedTile {
    kind: TileKind,
    base: Entity,
    overlay: Option<Entity>,
}

/// Entities currently standing in for map tiles and crops.
#[derive(Resource, Default, Debug)]
pub struct RenderedTiles {
    tiles: HashMap<(i32, i32), RenderedTile>,
    crops: HashMap<(i32, i32), Entity>,
}

impl RenderedTiles {
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn crop_count(&self) -> usize {
        self.crops.len()
    }
}

fn screen_size(config: &GameConfig) -> Vec2 {
    Vec2::new(config.screen_width as f32, config.screen_height as f32)
}

/// Base colour of a tile. Trees and flowers sit on grass.
pub fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Grass | TileKind::Tree | TileKind::Flower(_) => Color::srgb(0.36, 0.66, 0.30),
        TileKind::EdgeUp
        | TileKind::EdgeDown
        | TileKind::EdgeLeft
        | TileKind::EdgeRight
        | TileKind::EdgeUpLeft
        | TileKind::EdgeUpRight
        | TileKind::EdgeDownLeft
        | TileKind::EdgeDownRight => Color::srgb(0.30, 0.56, 0.25),
        TileKind::CornerNorthEast
        | TileKind::CornerNorthWest
        | TileKind::CornerSouthEast
        | TileKind::CornerSouthWest => Color::srgb(0.26, 0.50, 0.22),
        TileKind::Dirt => Color::srgb(0.45, 0.32, 0.20),
    }
}

/// Overlay colour and size as a fraction of the tile.
fn overlay_style(kind: TileKind) -> Option<(Color, f32)> {
    match kind {
        TileKind::Tree => Some((Color::srgb(0.12, 0.36, 0.14), 0.85)),
        TileKind::Flower(flower) => {
            let color = match flower {
                FlowerKind::Daisy => Color::srgb(0.95, 0.95, 0.90),
                FlowerKind::Poppy => Color::srgb(0.90, 0.20, 0.20),
                FlowerKind::Tulip => Color::srgb(0.95, 0.60, 0.80),
                FlowerKind::Bluebell => Color::srgb(0.40, 0.50, 0.95),
            };
            Some((color, 0.3))
        }
        _ => None,
    }
}

fn despawn_tile(commands: &mut Commands, tile: RenderedTile) {
    commands.entity(tile.base).despawn();
    if let Some(overlay) = tile.overlay {
        commands.entity(overlay).despawn();
    }
}

/// Spawn entities for newly visible tiles, despawn those that scrolled
/// out or changed kind, and move the rest with the camera.
pub fn sync_tile_sprites(
    mut commands: Commands,
    config: Res<GameConfig>,
    tilemap: Res<TileMap>,
    camera: Res<WorldCamera>,
    mut rendered: ResMut<RenderedTiles>,
    mut transforms: Query<&mut Transform, With<TileSprite>>,
) {
    let screen = screen_size(&config);
    let (tile_w, tile_h) = tilemap.tile_size();
    let (cols, rows) = tilemap.visible_range(camera.world_view_rect());

    let stale: Vec<(i32, i32)> = rendered
        .tiles
        .iter()
        .filter(|&(&(c, r), tile)| {
            !cols.contains(&c) || !rows.contains(&r) || tilemap.tile(c, r) != Some(tile.kind)
        })
        .map(|(&pos, _)| pos)
        .collect();
    for pos in stale {
        if let Some(tile) = rendered.tiles.remove(&pos) {
            despawn_tile(&mut commands, tile);
        }
    }

    for r in rows {
        for c in cols.clone() {
            let Some(kind) = tilemap.tile(c, r) else {
                continue;
            };
            let (x, y) = tilemap.tile_to_world(c, r);
            let on_screen = camera.apply(PixelRect::new(x, y, tile_w, tile_h));
            let base_pos = screen_to_translation(on_screen, screen, Z_TILE);
            let overlay_pos = base_pos.with_z(Z_OVERLAY);

            if let Some(tile) = rendered.tiles.get(&(c, r)) {
                if let Ok(mut transform) = transforms.get_mut(tile.base) {
                    transform.translation = base_pos;
                }
                if let Some(overlay) = tile.overlay {
                    if let Ok(mut transform) = transforms.get_mut(overlay) {
                        transform.translation = overlay_pos;
                    }
                }
                continue;
            }

            let size = Vec2::new(tile_w as f32, tile_h as f32);
            let base = commands
                .spawn((
                    Sprite {
                        color: tile_color(kind),
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::from_translation(base_pos),
                    TileSprite,
                ))
                .id();
            let overlay = overlay_style(kind).map(|(color, scale)| {
                commands
                    .spawn((
                        Sprite {
                            color,
                            custom_size: Some(size * scale),
                            ..default()
                        },
                        Transform::from_translation(overlay_pos),
                        TileSprite,
                    ))
                    .id()
            });
            rendered.tiles.insert((c, r), RenderedTile { kind, base, overlay });
        }
    }
}

/// Keep one sprite per crop, coloured by growth stage.
pub fn sync_crop_sprites(
    mut commands: Commands,
    config: Res<GameConfig>,
    tilemap: Res<TileMap>,
    camera: Res<WorldCamera>,
    mut rendered: ResMut<RenderedTiles>,
    mut crop_query: Query<(&CropSprite, &mut Transform, &mut Sprite)>,
) {
    let screen = screen_size(&config);
    let (tile_w, tile_h) = tilemap.tile_size();
    let crops: HashMap<(i32, i32), &Crop> = tilemap.crops().map(|c| (c.origin, c)).collect();

    for (marker, mut transform, mut sprite) in &mut crop_query {
        let Some(crop) = crops.get(&marker.origin) else {
            continue;
        };
        let (x, y) = crop.origin;
        let on_screen = camera.apply(PixelRect::new(x, y, tile_w, tile_h));
        transform.translation = screen_to_translation(on_screen, screen, Z_CROP);
        sprite.color = crop_stage_color(crop.kind, crop.stage);
    }

    for (&origin, crop) in &crops {
        if rendered.crops.contains_key(&origin) {
            continue;
        }
        let on_screen = camera.apply(PixelRect::new(origin.0, origin.1, tile_w, tile_h));
        let entity = commands
            .spawn((
                Sprite {
                    color: crop_stage_color(crop.kind, crop.stage),
                    custom_size: Some(Vec2::new(tile_w as f32, tile_h as f32) * 0.8),
                    ..default()
                },
                Transform::from_translation(screen_to_translation(on_screen, screen, Z_CROP)),
                CropSprite { origin },
            ))
            .id();
        rendered.crops.insert(origin, entity);
    }
}

pub fn spawn_highlight(mut commands: Commands, existing: Query<Entity, With<HighlightEdge>>) {
    if !existing.is_empty() {
        return;
    }
    for edge in [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right] {
        commands.spawn((
            Sprite {
                color: Color::srgb(1.0, 1.0, 0.0),
                custom_size: Some(Vec2::ZERO),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, Z_HIGHLIGHT),
            Visibility::Hidden,
            HighlightEdge(edge),
        ));
    }
}

/// Strip of `rect` that forms one side of an inset outline.
fn edge_rect(rect: PixelRect, edge: Edge, thickness: i32) -> PixelRect {
    match edge {
        Edge::Top => PixelRect::new(rect.left, rect.top, rect.width, thickness),
        Edge::Bottom => PixelRect::new(rect.left, rect.bottom() - thickness, rect.width, thickness),
        Edge::Left => PixelRect::new(rect.left, rect.top, thickness, rect.height),
        Edge::Right => PixelRect::new(rect.right() - thickness, rect.top, thickness, rect.height),
    }
}

/// Outline the tile under the player's centre, if it is on the map.
pub fn sync_highlight(
    config: Res<GameConfig>,
    tilemap: Res<TileMap>,
    camera: Res<WorldCamera>,
    player: Query<&PlayerBody, With<Player>>,
    mut edges: Query<(&HighlightEdge, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let screen = screen_size(&config);
    let target = player.get_single().ok().and_then(|body| {
        let center = body.center();
        let (c, r) = tilemap.world_to_tile(center.x, center.y);
        tilemap.in_bounds(c, r).then_some((c, r))
    });

    for (edge, mut transform, mut sprite, mut visibility) in &mut edges {
        let Some((c, r)) = target else {
            *visibility = Visibility::Hidden;
            continue;
        };
        let (x, y) = tilemap.tile_to_world(c, r);
        let (tile_w, tile_h) = tilemap.tile_size();
        let tile = camera.apply(PixelRect::new(x, y, tile_w, tile_h));
        let strip = edge_rect(tile, edge.0, HIGHLIGHT_THICKNESS as i32);
        transform.translation = screen_to_translation(strip, screen, Z_HIGHLIGHT);
        sprite.custom_size = Some(Vec2::new(strip.width as f32, strip.height as f32));
        *visibility = Visibility::Inherited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_rects_are_inset() {
        let tile = PixelRect::new(64, 128, 64, 64);
        assert_eq!(edge_rect(tile, Edge::Top, 3), PixelRect::new(64, 128, 64, 3));
        assert_eq!(edge_rect(tile, Edge::Bottom, 3), PixelRect::new(64, 189, 64, 3));
        assert_eq!(edge_rect(tile, Edge::Left, 3), PixelRect::new(64, 128, 3, 64));
        assert_eq!(edge_rect(tile, Edge::Right, 3), PixelRect::new(125, 128, 3, 64));
    }

    #[test]
    fn test_only_overlays_have_overlay_style() {
        assert!(overlay_style(TileKind::Tree).is_some());
        assert!(overlay_style(TileKind::Flower(FlowerKind::Poppy)).is_some());
        assert!(overlay_style(TileKind::Grass).is_none());
        assert!(overlay_style(TileKind::Dirt).is_none());
    }
}
