use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::{PANEL_BACKGROUND, RESET_HOVERED, RESET_PRESSED};

use super::state::ResetButton;

/// A tap on the AR view, outside any UI button.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScreenTapEvent {
    /// Logical window position, when the input had one.
    pub position: Option<Vec2>,
    pub source: InputSource,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ResetRequestEvent {
    pub source: InputSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
    Button,
    Keyboard,
}

// Left click or touch start anywhere except over a button
pub fn detect_screen_taps(
    mouse_button: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    buttons: Query<&Interaction, With<Button>>,
    mut taps: EventWriter<ScreenTapEvent>,
) {
    if buttons.iter().any(|interaction| *interaction != Interaction::None) {
        return;
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        let position = windows
            .single()
            .ok()
            .and_then(|window| window.cursor_position());
        taps.write(ScreenTapEvent {
            position,
            source: InputSource::Mouse,
        });
    }

    for touch in touches.iter_just_pressed() {
        taps.write(ScreenTapEvent {
            position: Some(touch.position()),
            source: InputSource::Touch,
        });
    }
}

// Reset button sends a reset request, colours follow hover/press
pub fn reset_button_interaction(
    mut q: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<ResetButton>),
    >,
    mut resets: EventWriter<ResetRequestEvent>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                resets.write(ResetRequestEvent {
                    source: InputSource::Button,
                });
                *bg = BackgroundColor(RESET_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(RESET_HOVERED),
            Interaction::None => *bg = BackgroundColor(PANEL_BACKGROUND),
        }
    }
}

/// Space taps, R resets.
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_placement_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut taps: EventWriter<ScreenTapEvent>,
    mut resets: EventWriter<ResetRequestEvent>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        taps.write(ScreenTapEvent {
            position: None,
            source: InputSource::Keyboard,
        });
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        resets.write(ResetRequestEvent {
            source: InputSource::Keyboard,
        });
    }
}

/// Placeholder system for WASM builds where keyboard shortcuts are disabled.
#[cfg(target_arch = "wasm32")]
pub fn handle_placement_keyboard_shortcuts() {
    // The canvas only takes pointer and touch input.
}
