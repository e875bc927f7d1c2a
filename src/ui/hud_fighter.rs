//! UI domain: health bars and names for both fighters.

use bevy::prelude::*;

use crate::bout::Bout;
use crate::core::{BoutEntity, side_color};
use crate::fighter::FighterSide;

pub(crate) const HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const HEALTHBAR_HEIGHT: f32 = 25.0;
pub(crate) const HEALTHBAR_TOP: f32 = 40.0;
pub(crate) const HEALTHBAR_MARGIN: f32 = 50.0;
const LABEL_HEIGHT: f32 = 24.0;

/// Marker for one side's HUD container
#[derive(Component, Debug)]
pub struct FighterHealthBarUI(pub FighterSide);

/// Marker for the health bar fill element
#[derive(Component, Debug)]
pub struct FighterHealthBarFill(pub FighterSide);

/// Marker for the "Name: N HP" label
#[derive(Component, Debug)]
pub struct FighterHealthLabel(pub FighterSide);

/// Left edge of a side's bar in arena pixels.
pub(crate) fn healthbar_left(side: FighterSide, arena_width: f32) -> f32 {
    match side {
        FighterSide::Player => HEALTHBAR_MARGIN,
        FighterSide::Opponent => arena_width - HEALTHBAR_MARGIN - HEALTHBAR_WIDTH,
    }
}

pub(crate) fn health_label(name: &str, current: u32) -> String {
    format!("{}: {} HP", name, current)
}

pub(crate) fn spawn_fighter_healthbars(mut commands: Commands, bout: Option<Res<Bout>>) {
    let Some(bout) = bout else {
        return;
    };
    let arena_width = bout.player().tuning().arena.width;

    for side in [FighterSide::Player, FighterSide::Opponent] {
        let fighter = bout.fighter(side);
        commands
            .spawn((
                BoutEntity,
                FighterHealthBarUI(side),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(healthbar_left(side, arena_width)),
                    top: Val::Px(HEALTHBAR_TOP - LABEL_HEIGHT),
                    width: Val::Px(HEALTHBAR_WIDTH),
                    flex_direction: FlexDirection::Column,
                    ..default()
                },
            ))
            .with_children(|parent| {
                parent.spawn((
                    FighterHealthLabel(side),
                    Text::new(health_label(fighter.name(), fighter.health().current)),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Node {
                        height: Val::Px(LABEL_HEIGHT),
                        ..default()
                    },
                ));

                parent
                    .spawn((
                        Node {
                            width: Val::Px(HEALTHBAR_WIDTH),
                            height: Val::Px(HEALTHBAR_HEIGHT),
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                        BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                    ))
                    .with_children(|bar| {
                        bar.spawn((
                            FighterHealthBarFill(side),
                            Node {
                                width: Val::Percent(100.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(side_color(side)),
                        ));
                    });
            });
    }
}

pub(crate) fn update_fighter_healthbars(
    bout: Option<Res<Bout>>,
    mut fills: Query<(&FighterHealthBarFill, &mut Node)>,
    mut labels: Query<(&FighterHealthLabel, &mut Text)>,
) {
    let Some(bout) = bout else {
        return;
    };

    for (fill, mut node) in &mut fills {
        let health = bout.fighter(fill.0).health();
        node.width = Val::Percent(health.percent() * 100.0);
    }

    for (label, mut text) in &mut labels {
        let fighter = bout.fighter(label.0);
        **text = health_label(fighter.name(), fighter.health().current);
    }
}
