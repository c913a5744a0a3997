use bevy::prelude::*;
use crate::config::GameConfig;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// MARKER COMPONENTS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Component)]
pub struct HotbarRoot;

#[derive(Component)]
pub struct HotbarSlot {
    pub index: usize,
}

/// First letter of the item in a slot.
#[derive(Component)]
pub struct HotbarBadge {
    pub index: usize,
}

/// Coloured square standing in for the item icon.
#[derive(Component)]
pub struct HotbarSwatch {
    pub index: usize,
}

const SLOT_BG: Color = Color::srgba(0.5, 0.5, 0.5, 0.8);
const SLOT_BORDER: Color = Color::srgba(0.25, 0.25, 0.25, 0.9);
const SELECTED_BORDER: Color = Color::srgb(1.0, 1.0, 0.0);

/// Swatch colour for an item: the ripe crop colour for crops and seeds.
pub fn item_color(name: &str) -> Color {
    match CropKind::from_item(name) {
        Some(kind) => crate::farming::crop_stage_color(kind, CROP_STAGES - 1),
        None => Color::srgb(0.8, 0.8, 0.8),
    }
}

/// Upper-cased first character of the item name.
pub fn badge_text(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

// ═══════════════════════════════════════════════════════════════════════
// SPAWN
// ═══════════════════════════════════════════════════════════════════════

pub fn spawn_hotbar(
    mut commands: Commands,
    config: Res<GameConfig>,
    existing: Query<Entity, With<HotbarRoot>>,
) {
    if !existing.is_empty() {
        return;
    }
    let slot_size = config.slot_size;

    commands
        .spawn((
            HotbarRoot,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(0.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|hotbar| {
            for i in 0..config.slot_count.max(1) {
                hotbar
                    .spawn((
                        HotbarSlot { index: i },
                        Node {
                            width: Val::Px(slot_size),
                            height: Val::Px(slot_size),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            flex_direction: FlexDirection::Column,
                            border: UiRect::all(Val::Px(HIGHLIGHT_THICKNESS)),
                            ..default()
                        },
                        BackgroundColor(SLOT_BG),
                        BorderColor(SLOT_BORDER),
                    ))
                    .with_children(|slot| {
                        slot.spawn((
                            HotbarSwatch { index: i },
                            Node {
                                width: Val::Px(slot_size * 0.4),
                                height: Val::Px(slot_size * 0.4),
                                ..default()
                            },
                            BackgroundColor(Color::NONE),
                            Visibility::Hidden,
                        ));
                        slot.spawn((
                            HotbarBadge { index: i },
                            Text::new(""),
                            TextFont {
                                font_size: slot_size * 0.25,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
            }
        });
}

// ═══════════════════════════════════════════════════════════════════════
// UPDATE
// ═══════════════════════════════════════════════════════════════════════

pub fn update_hotbar(
    inventory: Res<Inventory>,
    mut slot_query: Query<(&HotbarSlot, &mut BorderColor)>,
    mut badge_query: Query<(&HotbarBadge, &mut Text)>,
    mut swatch_query: Query<(&HotbarSwatch, &mut BackgroundColor, &mut Visibility)>,
) {
    for (slot, mut border) in &mut slot_query {
        *border = if slot.index == inventory.selected_index() {
            BorderColor(SELECTED_BORDER)
        } else {
            BorderColor(SLOT_BORDER)
        };
    }

    let item_in = |index: usize| {
        inventory
            .slots()
            .get(index)
            .and_then(Option::as_ref)
            .map(|slot| slot.name.as_str())
    };

    for (badge, mut text) in &mut badge_query {
        let label = item_in(badge.index).map(badge_text).unwrap_or_default();
        if **text != label {
            **text = label;
        }
    }

    for (swatch, mut bg, mut vis) in &mut swatch_query {
        match item_in(swatch.index) {
            Some(name) => {
                *bg = BackgroundColor(item_color(name));
                *vis = Visibility::Inherited;
            }
            None => *vis = Visibility::Hidden,
        }
    }
}
