//! Shared components, resources, events, and states for Sprout Patch.
//!
//! This is the type contract. Every domain plugin imports from here, and
//! cross-domain traffic goes through the resources and events below.
//!
//! World coordinates are pixels with the origin at the top-left corner of
//! the world and `y` growing downwards. Only the render layer converts them
//! into Bevy's centred, y-up space.

use bevy::prelude::*;
use std::collections::HashSet;
use std::ops::Range;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE: top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    /// World, player and inventory are being built from `GameConfig`.
    #[default]
    Loading,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

/// Growth stages per crop: young, middle, mature.
pub const CROP_STAGES: u8 = 3;
/// Item names ending in this suffix are plantable seeds.
pub const SEED_SUFFIX: &str = "_seed";
/// Scale applied to each axis when two orthogonal keys are held.
pub const DIAGONAL_FACTOR: f32 = std::f32::consts::FRAC_1_SQRT_2;
pub const PLAYER_SIZE: f32 = 64.0;
/// Walk-cycle length per facing direction.
pub const WALK_FRAMES: usize = 4;
pub const HIGHLIGHT_THICKNESS: f32 = 3.0;

// ═══════════════════════════════════════════════════════════════════════
// GEOMETRY
// ═══════════════════════════════════════════════════════════════════════

/// Integer pixel rectangle in world (or screen) space, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.left + self.width / 2, self.top + self.height / 2)
    }

    /// Move the rectangle so that `center()` returns `center`.
    pub fn set_center(&mut self, center: IVec2) {
        self.left = center.x - self.width / 2;
        self.top = center.y - self.height / 2;
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }
}

/// Bevy translation for the centre of a screen-space rectangle, given a
/// 2D camera at the origin showing `screen` logical pixels.
pub fn screen_to_translation(rect: PixelRect, screen: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        rect.left as f32 + rect.width as f32 / 2.0 - screen.x / 2.0,
        screen.y / 2.0 - (rect.top as f32 + rect.height as f32 / 2.0),
        z,
    )
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Down,
    Left,
    Right,
    Up,
}

#[derive(Component, Debug, Clone, Default)]
pub struct Player;

/// The player's world rectangle. `position` is the top-left corner.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerBody {
    pub position: Vec2,
    pub size: Vec2,
}

impl PlayerBody {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            size: Vec2::splat(PLAYER_SIZE),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Integer rectangle, floored the way a pixel blit would place it.
    pub fn pixel_rect(&self) -> PixelRect {
        PixelRect::new(
            self.position.x.floor() as i32,
            self.position.y.floor() as i32,
            self.size.x as i32,
            self.size.y as i32,
        )
    }
}

#[derive(Component, Debug, Clone)]
pub struct PlayerMovement {
    pub facing: Facing,
    /// Pixels per second, already scaled for diagonals.
    pub velocity: Vec2,
    pub speed: f32,
}

impl Default for PlayerMovement {
    fn default() -> Self {
        Self {
            facing: Facing::Down,
            velocity: Vec2::ZERO,
            speed: 150.0,
        }
    }
}

impl PlayerMovement {
    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }
}

/// Result of a successful `interact` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractOutcome {
    Tilled,
    Planted,
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT
// ═══════════════════════════════════════════════════════════════════════

/// Game actions for the current frame. Written only by the input domain;
/// every other domain reads this instead of raw hardware state.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub interact: bool,
    /// Till the tile under the player.
    pub till: bool,
    /// Plant the selected seed on the tile under the player.
    pub plant: bool,
    pub quit: bool,
    /// Zero-based slot picked with the number keys.
    pub slot_select: Option<usize>,
    /// One entry per mouse-wheel event this frame, in arrival order.
    pub scroll_steps: Vec<f32>,
    /// Screen position of a till click.
    pub cursor_till: Option<Vec2>,
    /// Screen position of a plant click.
    pub cursor_plant: Option<Vec2>,
}

// ═══════════════════════════════════════════════════════════════════════
// CAMERA
// ═══════════════════════════════════════════════════════════════════════

/// Anything the camera can centre on.
pub trait CameraTarget {
    fn bounds(&self) -> PixelRect;
}

impl CameraTarget for PixelRect {
    fn bounds(&self) -> PixelRect {
        *self
    }
}

impl CameraTarget for PlayerBody {
    fn bounds(&self) -> PixelRect {
        self.pixel_rect()
    }
}

/// The visible world rectangle. Translates world rectangles into screen
/// space and clips rendering.
#[derive(Resource, Debug, Clone)]
pub struct WorldCamera {
    rect: PixelRect,
    world_width: i32,
    world_height: i32,
}

impl Default for WorldCamera {
    fn default() -> Self {
        Self::new(800, 600, 1600, 1600)
    }
}

impl WorldCamera {
    pub fn new(screen_width: i32, screen_height: i32, world_width: i32, world_height: i32) -> Self {
        Self {
            rect: PixelRect::new(0, 0, screen_width, screen_height),
            world_width,
            world_height,
        }
    }

    /// Centre on `target`, then clamp each axis to
    /// `[0, world - viewport]`. A world smaller than the viewport pins the
    /// axis at 0.
    pub fn update<T: CameraTarget + ?Sized>(&mut self, target: &T) {
        self.rect.set_center(target.bounds().center());
        self.rect.left = self.rect.left.min(self.world_width - self.rect.width).max(0);
        self.rect.top = self.rect.top.min(self.world_height - self.rect.height).max(0);
    }

    pub fn apply(&self, rect: PixelRect) -> PixelRect {
        rect.moved(-self.rect.left, -self.rect.top)
    }

    pub fn world_view_rect(&self) -> PixelRect {
        self.rect
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + Vec2::new(self.rect.left as f32, self.rect.top as f32)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySlot {
    pub name: String,
    pub count: u32,
}

/// Fixed row of slots. A name occupies at most one slot at a time.
#[derive(Resource, Debug, Clone)]
pub struct Inventory {
    slots: Vec<Option<InventorySlot>>,
    selected: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Inventory {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count.max(1)],
            selected: 0,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<InventorySlot>] {
        &self.slots
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&InventorySlot> {
        self.slots[self.selected].as_ref()
    }

    /// Stack onto an existing slot holding `name`, else take the first
    /// empty slot. Returns false when the inventory is full or the stack
    /// would overflow.
    pub fn add_item(&mut self, name: &str, amount: u32) -> bool {
        if amount == 0 {
            return false;
        }
        if let Some(slot) = self.slots.iter_mut().flatten().find(|s| s.name == name) {
            return match slot.count.checked_add(amount) {
                Some(count) => {
                    slot.count = count;
                    true
                }
                None => false,
            };
        }
        match self.slots.iter_mut().find(|s| s.is_none()) {
            Some(empty) => {
                *empty = Some(InventorySlot {
                    name: name.to_string(),
                    count: amount,
                });
                true
            }
            None => false,
        }
    }

    /// Take `amount` from the first slot holding `name`, clearing the slot
    /// once it runs out. Returns false if no slot holds `name`.
    pub fn remove_item(&mut self, name: &str, amount: u32) -> bool {
        let Some(index) = self
            .slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|s| s.name == name))
        else {
            return false;
        };
        if let Some(stack) = self.slots[index].as_mut() {
            if amount < stack.count {
                stack.count -= amount;
                return true;
            }
        }
        self.slots[index] = None;
        true
    }

    pub fn consume_selected(&mut self, amount: u32) -> bool {
        let Some(name) = self.selected_item().map(|s| s.name.clone()) else {
            return false;
        };
        self.remove_item(&name, amount)
    }

    pub fn count(&self, name: &str) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.name == name)
            .map(|s| s.count)
            .sum()
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.slots.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + self.slots.len() - 1) % self.slots.len();
    }

    /// Wheel up (positive) moves the cursor back, wheel down moves it forward.
    pub fn scroll(&mut self, delta: f32) {
        if delta > 0.0 {
            self.select_previous();
        } else if delta < 0.0 {
            self.select_next();
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.slots.len() {
            self.selected = index;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FARMING
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropKind {
    Tomato,
    Carrot,
}

impl CropKind {
    pub const ALL: [CropKind; 2] = [CropKind::Tomato, CropKind::Carrot];

    pub fn name(self) -> &'static str {
        match self {
            CropKind::Tomato => "tomato",
            CropKind::Carrot => "carrot",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// `carrot_seed` → `Carrot`. Anything without the seed suffix is `None`.
    pub fn from_seed_item(item: &str) -> Option<Self> {
        item.strip_suffix(SEED_SUFFIX).and_then(Self::from_name)
    }

    /// Accepts both seed items and the crop items themselves.
    pub fn from_item(item: &str) -> Option<Self> {
        Self::from_seed_item(item).or_else(|| Self::from_name(item))
    }
}

/// A planted crop. Grows one stage every `growth_speed` updates until it
/// is mature; it never regresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crop {
    pub kind: CropKind,
    pub stage: u8,
    pub growth_timer: u32,
    pub growth_speed: u32,
    /// Top-left world pixel of the owning tile.
    pub origin: (i32, i32),
}

impl Crop {
    pub fn new(kind: CropKind, origin: (i32, i32), growth_speed: u32) -> Self {
        Self {
            kind,
            stage: 0,
            growth_timer: 0,
            growth_speed,
            origin,
        }
    }

    /// One growth tick. Counted per call, not per second.
    pub fn update(&mut self) {
        self.growth_timer = self.growth_timer.saturating_add(1);
        if self.growth_timer >= self.growth_speed && self.stage < CROP_STAGES - 1 {
            self.stage += 1;
            self.growth_timer = 0;
        }
    }

    pub fn is_mature(&self) -> bool {
        self.stage == CROP_STAGES - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowerKind {
    Daisy,
    Poppy,
    Tulip,
    Bluebell,
}

impl FlowerKind {
    pub const ALL: [FlowerKind; 4] = [
        FlowerKind::Daisy,
        FlowerKind::Poppy,
        FlowerKind::Tulip,
        FlowerKind::Bluebell,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    EdgeUp,
    EdgeDown,
    EdgeLeft,
    EdgeRight,
    EdgeUpLeft,
    EdgeUpRight,
    EdgeDownLeft,
    EdgeDownRight,
    CornerNorthEast,
    CornerNorthWest,
    CornerSouthEast,
    CornerSouthWest,
    Dirt,
    Tree,
    Flower(FlowerKind),
}

impl TileKind {
    pub fn is_tillable(self) -> bool {
        matches!(self, TileKind::Grass | TileKind::Flower(_))
    }
}

/// The world grid plus everything growing on it.
#[derive(Resource, Debug, Clone)]
pub struct TileMap {
    /// Row-major: `tiles[row * cols + col]`.
    tiles: Vec<TileKind>,
    cols: i32,
    rows: i32,
    tile_width: i32,
    tile_height: i32,
    tilled: HashSet<(i32, i32)>,
    /// Live crops in planting order.
    crops: Vec<Crop>,
    growth_speed: u32,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new(1600, 1600, 64, 64)
    }
}

impl TileMap {
    /// An all-grass map covering `world_width × world_height` pixels.
    pub fn new(world_width: i32, world_height: i32, tile_width: i32, tile_height: i32) -> Self {
        let tile_width = tile_width.max(1);
        let tile_height = tile_height.max(1);
        let cols = (world_width / tile_width).max(1);
        let rows = (world_height / tile_height).max(1);
        Self {
            tiles: vec![TileKind::Grass; (cols * rows) as usize],
            cols,
            rows,
            tile_width,
            tile_height,
            tilled: HashSet::new(),
            crops: Vec::new(),
            growth_speed: 120,
        }
    }

    /// Build from predefined rows. Short rows are padded with grass.
    pub fn from_tiles(rows: &[Vec<TileKind>], tile_width: i32, tile_height: i32) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0).max(1) as i32;
        let row_count = rows.len().max(1) as i32;
        let mut map = Self::new(cols * tile_width, row_count * tile_height, tile_width, tile_height);
        for (r, row) in rows.iter().enumerate() {
            for (c, &kind) in row.iter().enumerate() {
                map.set_tile(c as i32, r as i32, kind);
            }
        }
        map
    }

    pub fn with_growth_speed(mut self, growth_speed: u32) -> Self {
        self.growth_speed = growth_speed;
        self
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn tile_size(&self) -> (i32, i32) {
        (self.tile_width, self.tile_height)
    }

    /// Pixel extent covered by whole tiles.
    pub fn world_size(&self) -> (i32, i32) {
        (self.cols * self.tile_width, self.rows * self.tile_height)
    }

    pub fn in_bounds(&self, c: i32, r: i32) -> bool {
        (0..self.cols).contains(&c) && (0..self.rows).contains(&r)
    }

    pub fn tile(&self, c: i32, r: i32) -> Option<TileKind> {
        self.in_bounds(c, r)
            .then(|| self.tiles[(r * self.cols + c) as usize])
    }

    pub fn set_tile(&mut self, c: i32, r: i32, kind: TileKind) {
        if self.in_bounds(c, r) {
            self.tiles[(r * self.cols + c) as usize] = kind;
        }
    }

    pub fn tile_to_world(&self, c: i32, r: i32) -> (i32, i32) {
        (c * self.tile_width, r * self.tile_height)
    }

    pub fn world_to_tile(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.tile_width as f32).floor() as i32,
            (y / self.tile_height as f32).floor() as i32,
        )
    }

    pub fn is_tillable(&self, c: i32, r: i32) -> bool {
        self.tile(c, r).is_some_and(TileKind::is_tillable)
    }

    pub fn is_tilled(&self, c: i32, r: i32) -> bool {
        self.tilled.contains(&(c, r))
    }

    /// Turn grass or a flower into dirt. Returns false (and does nothing)
    /// for anything else, including tiles that are already dirt.
    pub fn till(&mut self, c: i32, r: i32) -> bool {
        if !self.is_tillable(c, r) {
            return false;
        }
        self.set_tile(c, r, TileKind::Dirt);
        self.tilled.insert((c, r));
        true
    }

    /// Plant on a tilled tile nobody has planted on yet.
    pub fn plant(&mut self, c: i32, r: i32, kind: CropKind) -> bool {
        let origin = self.tile_to_world(c, r);
        if !self.tilled.contains(&(c, r)) || self.crops.iter().any(|crop| crop.origin == origin) {
            return false;
        }
        self.crops.push(Crop::new(kind, origin, self.growth_speed));
        true
    }

    pub fn crop_at(&self, c: i32, r: i32) -> Option<&Crop> {
        let origin = self.tile_to_world(c, r);
        self.crops.iter().find(|crop| crop.origin == origin)
    }

    pub fn crops(&self) -> impl Iterator<Item = &Crop> {
        self.crops.iter()
    }

    /// Advance every crop by one tick.
    pub fn update_crops(&mut self) {
        for crop in &mut self.crops {
            crop.update();
        }
    }

    /// Column and row ranges of the tiles intersecting `view`, clipped to
    /// the map.
    pub fn visible_range(&self, view: PixelRect) -> (Range<i32>, Range<i32>) {
        let start_col = view.left.div_euclid(self.tile_width).max(0);
        let end_col = (view.right().div_euclid(self.tile_width) + 1).min(self.cols);
        let start_row = view.top.div_euclid(self.tile_height).max(0);
        let end_row = (view.bottom().div_euclid(self.tile_height) + 1).min(self.rows);
        (start_col..end_col, start_row..end_row)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS: cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileAction {
    Till,
    /// Plant whatever seed is selected in the inventory.
    PlantSelected,
}

/// A till or plant request aimed at a specific tile. Sent by the player
/// domain, resolved by the farming domain.
#[derive(Event, Debug, Clone, Copy)]
pub struct TileActionEvent {
    pub col: i32,
    pub row: i32,
    pub action: TileAction,
}
