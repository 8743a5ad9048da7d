//! Simulation plugin: drives one [`Game`] from Bevy's schedule.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`keyboard_to_input_system`] rebuilds [`FrameInput`] from Bevy's
//!    keyboard, mouse and cursor state.
//! 2. [`game_act_system`] advances the game by `Time::delta_secs` and ends the
//!    app once the game reaches a terminal status.
//! 3. [`game_draw_system`] repaints the [`FrameBuffer`].
//!
//! The game itself never touches the ECS; tests can drive it directly or fill
//! [`FrameInput`] and run only `game_act_system`.

use crate::config::GameConfig;
use crate::framebuffer::FrameBuffer;
use crate::game::Game;
use crate::input::{FrameInput, GameKey, PointerButton};
use bevy::input::ButtonInput;
use bevy::prelude::*;

/// The running session.  `None` once it has been finalized.
#[derive(Resource, Default)]
pub struct ActiveGame(pub Option<Game>);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<FrameInput>()
            .init_resource::<FrameBuffer>()
            .init_resource::<ActiveGame>()
            .add_systems(Startup, start_game_system)
            .add_systems(
                Update,
                (keyboard_to_input_system, game_act_system, game_draw_system).chain(),
            );
    }
}

/// Build the opening scene from the current [`GameConfig`].
pub fn start_game_system(config: Res<GameConfig>, mut game: ResMut<ActiveGame>) {
    game.0 = Some(Game::initialize(config.clone()));
}

fn game_key(code: KeyCode) -> Option<GameKey> {
    let key = match code {
        KeyCode::Escape => GameKey::Escape,
        KeyCode::Space => GameKey::Space,
        KeyCode::ArrowLeft => GameKey::Left,
        KeyCode::ArrowUp => GameKey::Up,
        KeyCode::ArrowRight => GameKey::Right,
        KeyCode::ArrowDown => GameKey::Down,
        KeyCode::Enter => GameKey::Return,
        KeyCode::KeyA => GameKey::Char('a'),
        KeyCode::KeyD => GameKey::Char('d'),
        KeyCode::KeyQ => GameKey::Char('q'),
        KeyCode::KeyS => GameKey::Char('s'),
        KeyCode::KeyW => GameKey::Char('w'),
        _ => return None,
    };
    Some(key)
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Right),
        _ => None,
    }
}

/// Translate held keys, buttons and the cursor into [`FrameInput`].
///
/// Cursor coordinates are flipped into field order: row from the window's
/// vertical axis, column from its horizontal one.
pub fn keyboard_to_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut input: ResMut<FrameInput>,
) {
    input.clear();
    for key in keys.get_pressed().copied().filter_map(game_key) {
        input.press(key);
    }
    for button in buttons.get_pressed().copied().filter_map(pointer_button) {
        input.press_button(button);
    }
    if let Some(cursor) = windows.iter().next().and_then(Window::cursor_position) {
        input.set_cursor(cursor.y as i32, cursor.x as i32);
    }
}

/// Advance the game one frame; finalize it and request exit once it ends.
pub fn game_act_system(
    time: Res<Time>,
    input: Res<FrameInput>,
    mut game: ResMut<ActiveGame>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(session) = game.0.as_mut() else {
        return;
    };
    let status = session.act(time.delta_secs(), &*input);
    if !status.is_terminal() {
        return;
    }
    if let Some(finished) = game.0.take() {
        finished.finalize();
    }
    exit.write(AppExit::Success);
}

pub fn game_draw_system(game: Res<ActiveGame>, mut frame: ResMut<FrameBuffer>) {
    if let Some(session) = &game.0 {
        session.draw(&mut frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_fire_keys_are_mapped() {
        assert_eq!(game_key(KeyCode::ArrowLeft), Some(GameKey::Left));
        assert_eq!(game_key(KeyCode::Space), Some(GameKey::Space));
        assert_eq!(game_key(KeyCode::KeyQ), Some(GameKey::Char('q')));
        assert_eq!(game_key(KeyCode::F12), None);
    }

    #[test]
    fn extra_mouse_buttons_are_ignored() {
        assert_eq!(pointer_button(MouseButton::Right), Some(PointerButton::Right));
        assert_eq!(pointer_button(MouseButton::Back), None);
    }
}
