use bevy::prelude::*;
use bevy::window::WindowResolution;
use rockfield::config::{self, GameConfig};
use rockfield::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use rockfield::graphics::PresentPlugin;
use rockfield::simulation::{self, SimulationPlugin};

/// Field-sized window with one physical pixel per field pixel on any display.
fn primary_window() -> Window {
    Window {
        title: "Rockfield".into(),
        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT)
            .with_scale_factor_override(1.0),
        resizable: false,
        ..Default::default()
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window()),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_game_config_system overwrites them from
        // assets/game.toml (if present) before the scene is built.
        .insert_resource(GameConfig::default())
        .add_plugins((SimulationPlugin, PresentPlugin))
        .add_systems(
            Startup,
            config::load_game_config_system.before(simulation::start_game_system),
        )
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_matches_the_field_at_unit_scale() {
        let window = primary_window();
        assert_eq!(window.resolution.scale_factor_override(), Some(1.0));
        assert_eq!(window.resolution.physical_width(), SCREEN_WIDTH);
        assert_eq!(window.resolution.physical_height(), SCREEN_HEIGHT);
        assert!(!window.resizable);
    }
}
