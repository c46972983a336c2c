use bevy::prelude::*;

use constants::progress::{PROGRESS_FILL_COLOUR, PROGRESS_TEXT_SIZE, PROGRESS_TRACK_COLOUR};

use super::animator::ProgressFrame;

#[derive(Component)]
pub struct ProgressFill;

#[derive(Component)]
pub struct ProgressAmountText;

/// Native stand-in for the page's progress bar markup.
pub fn spawn_progress_overlay(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(24.0),
            right: Val::Px(24.0),
            bottom: Val::Px(24.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("$0"),
                TextFont {
                    font_size: PROGRESS_TEXT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                ProgressAmountText,
            ));
            parent
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(PROGRESS_TRACK_COLOUR),
                ))
                .with_children(|track| {
                    track.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(PROGRESS_FILL_COLOUR),
                        ProgressFill,
                    ));
                });
        });
}

/// There is no CSS transition natively, so the fill follows the counter.
pub fn apply_progress_to_overlay(
    mut frames: EventReader<ProgressFrame>,
    mut fills: Query<&mut Node, With<ProgressFill>>,
    mut texts: Query<&mut Text, With<ProgressAmountText>>,
) {
    let Some(frame) = frames.read().last() else {
        return;
    };

    let width = (frame.width_percent * frame.fill_fraction()).min(100.0) as f32;
    for mut node in &mut fills {
        node.width = Val::Percent(width);
    }
    for mut text in &mut texts {
        text.0 = frame.amount_text();
    }
}
