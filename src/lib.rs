//! Rockfield: a small asteroid-field arcade game.
//!
//! Every on-screen object is a [`body::Body`] built from a composite of
//! primitive shapes (rectangles, ellipses, right triangles).  Bodies move in a
//! fixed 768 x 1024 field, collide on their bounding boxes and are painted
//! into a software [`framebuffer::FrameBuffer`] that Bevy presents each frame.

pub mod body;
pub mod collision;
pub mod composite;
pub mod config;
pub mod constants;
pub mod context;
pub mod entity;
pub mod error;
pub mod framebuffer;
pub mod game;
pub mod geometry;
pub mod graphics;
pub mod input;
pub mod registry;
pub mod shape;
pub mod simulation;
pub mod snapshot;
