//! Presentation: copies the simulation's [`FrameBuffer`] into a texture shown
//! full-window.

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::framebuffer::FrameBuffer;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy_asset::RenderAssetUsages;

/// Handle of the texture the frame buffer is uploaded into.
#[derive(Resource, Debug, Clone)]
pub struct FrameImage(pub Handle<Image>);

pub struct PresentPlugin;

impl Plugin for PresentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameBuffer>()
            .add_systems(Startup, (setup_camera, setup_frame_sprite))
            .add_systems(PostUpdate, present_frame_system);
    }
}

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // The window pins its scale factor to 1, so one world unit is one pixel
    // and a field-sized sprite fills it.
    commands.spawn(Camera2d);
}

/// Create the field-sized texture and the sprite that displays it.
pub fn setup_frame_sprite(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let image = Image::new_fill(
        Extent3d {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, 255],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    let handle = images.add(image);
    commands.spawn(Sprite::from_image(handle.clone()));
    commands.insert_resource(FrameImage(handle));
    info!("Frame texture ready ({SCREEN_WIDTH}x{SCREEN_HEIGHT})");
}

/// Upload this frame's pixels.
pub fn present_frame_system(
    frame: Res<FrameBuffer>,
    target: Option<Res<FrameImage>>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(target) = target else {
        return;
    };
    if !frame.is_changed() {
        return;
    }
    if let Some(image) = images.get_mut(&target.0) {
        image.data = Some(frame.to_rgba8());
    }
}
