//! Versioned TOML snapshots of a composite shape's member list.
//!
//! A snapshot keeps every member's kind, box, color and orientation in draw
//! order, so a rebuilt composite rasterizes to the same pixels.

use crate::composite::CompositeShape;
use crate::error::{SimError, SimResult};
use crate::shape::{Corner, Primitive, Shape, ShapeData, ShapeKind};
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompositeSnapshot {
    pub version: u32,
    #[serde(default)]
    pub shapes: Vec<ShapeSnapshot>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShapeSnapshot {
    pub kind: ShapeKind,
    pub coordinate: [f32; 2],
    pub size: [f32; 2],
    pub color: u32,
    #[serde(default)]
    pub corner: Corner,
}

impl From<&Shape> for ShapeSnapshot {
    fn from(shape: &Shape) -> Self {
        Self {
            kind: shape.kind(),
            coordinate: shape.coordinate().to_array(),
            size: shape.size().to_array(),
            color: shape.color(),
            corner: shape.corner(),
        }
    }
}

impl From<&ShapeSnapshot> for Shape {
    fn from(snapshot: &ShapeSnapshot) -> Self {
        let data = ShapeData {
            coordinate: Vec2::from_array(snapshot.coordinate),
            size: Vec2::from_array(snapshot.size),
            color: snapshot.color,
            corner: snapshot.corner,
        };
        Shape::from_parts(snapshot.kind, data)
    }
}

impl CompositeSnapshot {
    pub fn capture(composite: &CompositeShape) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            shapes: composite.shapes().iter().map(ShapeSnapshot::from).collect(),
        }
    }

    pub fn restore(&self) -> CompositeShape {
        let mut composite = CompositeShape::new();
        for shape in &self.shapes {
            composite.add_shape(Shape::from(shape));
        }
        composite
    }
}

impl CompositeShape {
    pub fn to_toml(&self) -> SimResult<String> {
        toml::to_string_pretty(&CompositeSnapshot::capture(self))
            .map_err(|err| SimError::SnapshotEncode(err.to_string()))
    }

    pub fn from_toml(contents: &str) -> SimResult<Self> {
        parse_snapshot(contents).map(|snapshot| snapshot.restore())
    }
}

fn parse_snapshot(contents: &str) -> SimResult<CompositeSnapshot> {
    let value: toml::Value = toml::from_str(contents)
        .map_err(|err| SimError::SnapshotDecode(format!("invalid TOML: {err}")))?;

    let version = value
        .get("version")
        .and_then(toml::Value::as_integer)
        .ok_or_else(|| SimError::SnapshotDecode("snapshot version is missing or invalid".into()))?;
    if version != SNAPSHOT_VERSION as i64 {
        return Err(SimError::SnapshotDecode(format!(
            "unsupported snapshot version {} (expected {})",
            version, SNAPSHOT_VERSION
        )));
    }

    value
        .try_into()
        .map_err(|err: toml::de::Error| SimError::SnapshotDecode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::shape::{Circle, Rectangle, RightTriangle};

    fn mixed() -> CompositeShape {
        let mut composite = CompositeShape::new();
        composite.add_shape(Rectangle::new(Vec2::new(40.0, 60.0), Vec2::new(30.0, 80.0), 0x112233));
        composite.add_shape(Circle::new(Vec2::new(50.0, 90.0), Vec2::new(40.0, 24.0), 0x445566));
        composite.add_shape(
            RightTriangle::new(Vec2::new(45.0, 70.0), Vec2::new(20.0, 35.0), 0x778899)
                .with_corner(Corner::TopRight),
        );
        composite
    }

    fn render(composite: &CompositeShape) -> FrameBuffer {
        let mut frame = FrameBuffer::new();
        composite.draw(&mut frame);
        frame
    }

    #[test]
    fn toml_round_trip_redraws_identical_pixels() {
        let original = mixed();
        let text = original.to_toml().expect("encode");
        let restored = CompositeShape::from_toml(&text).expect("decode");

        assert_eq!(restored, original);
        assert!(render(&restored) == render(&original), "pixel mismatch after round trip");
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let text = "version = 7\nshapes = []\n";
        let err = CompositeShape::from_toml(text).unwrap_err();
        assert!(err.to_string().contains("unsupported snapshot version 7"), "{err}");
    }

    #[test]
    fn missing_version_is_rejected() {
        let err = CompositeShape::from_toml("shapes = []\n").unwrap_err();
        assert!(matches!(err, SimError::SnapshotDecode(_)));
    }

    #[test]
    fn corner_defaults_when_absent() {
        let text = r#"
version = 1

[[shapes]]
kind = "RightTriangle"
coordinate = [1.0, 2.0]
size = [3.0, 4.0]
color = 255
"#;
        let composite = CompositeShape::from_toml(text).expect("decode");
        assert_eq!(composite.len(), 1);
        assert_eq!(composite.shape_at(0).corner(), Corner::BottomLeft);
        assert_eq!(composite.shape_at(0).kind(), ShapeKind::RightTriangle);
    }
}
