use bevy::prelude::*;
use constants::render_settings::{
    PANEL_BACKGROUND, PANEL_TEXT, RESET_CORNER_RADIUS, RESET_FONT_SIZE, RESET_HEIGHT,
    RESET_RIGHT_MARGIN, RESET_TOP_OFFSET, RESET_WIDTH, STATUS_CORNER_RADIUS, STATUS_FONT_SIZE,
    STATUS_SIDE_MARGIN, STATUS_TOP_OFFSET,
};
use constants::ui_text::RESET_BUTTON_LABEL;

use super::state::{DisplayState, ResetButton, StatusLabel};

// Spawns the status label across the top and the hidden reset button top-right
pub fn spawn_placement_ui(mut commands: Commands, display: Res<DisplayState>) {
    commands.spawn((
        StatusLabel,
        Name::new("StatusLabel"),
        Text::new(display.status_text.clone()),
        TextFont {
            font_size: STATUS_FONT_SIZE,
            ..default()
        },
        TextColor(PANEL_TEXT),
        TextLayout::new_with_justify(JustifyText::Center),
        BackgroundColor(PANEL_BACKGROUND),
        BorderRadius::all(Val::Px(STATUS_CORNER_RADIUS)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(STATUS_TOP_OFFSET),
            left: Val::Px(STATUS_SIDE_MARGIN),
            right: Val::Px(STATUS_SIDE_MARGIN),
            padding: UiRect::axes(Val::Px(8.0), Val::Px(6.0)),
            ..default()
        },
        visibility_of(display.status_visible),
    ));

    commands
        .spawn((
            ResetButton,
            Button,
            Name::new("ResetButton"),
            BackgroundColor(PANEL_BACKGROUND),
            BorderRadius::all(Val::Px(RESET_CORNER_RADIUS)),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(RESET_TOP_OFFSET),
                right: Val::Px(RESET_RIGHT_MARGIN),
                width: Val::Px(RESET_WIDTH),
                height: Val::Px(RESET_HEIGHT),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            visibility_of(display.reset_button_visible),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(RESET_BUTTON_LABEL),
                TextFont {
                    font_size: RESET_FONT_SIZE,
                    ..default()
                },
                TextColor(PANEL_TEXT),
            ));
        });
}

// Pushes DisplayState onto the UI entities, only touching what differs
pub fn reflect_display_state(
    display: Res<DisplayState>,
    mut labels: Query<(&mut Text, &mut Visibility), With<StatusLabel>>,
    mut buttons: Query<&mut Visibility, (With<ResetButton>, Without<StatusLabel>)>,
) {
    if !display.is_changed() {
        return;
    }

    for (mut text, mut visibility) in &mut labels {
        if text.0 != display.status_text {
            text.0 = display.status_text.clone();
        }
        visibility.set_if_neq(visibility_of(display.status_visible));
    }

    for mut visibility in &mut buttons {
        visibility.set_if_neq(visibility_of(display.reset_button_visible));
    }
}

fn visibility_of(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}
