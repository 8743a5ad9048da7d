//! Inert ship silhouettes in the top-left corner, one per remaining life.

use super::ship::hull_and_nozzle;
use super::EntityKind;
use crate::body::Body;
use crate::constants::LIFE_ICON_POSITIONS;
use bevy::math::Vec2;

pub fn init(at: Vec2) -> Body {
    let (hull, nozzle) = hull_and_nozzle(at);
    let mut body = Body::new(EntityKind::LifeIcon).with_collision(0, 0);
    body.add_shape(hull);
    body.add_shape(nozzle);
    body
}

/// One icon per slot in [`LIFE_ICON_POSITIONS`], left to right.
pub fn row() -> Vec<Body> {
    LIFE_ICON_POSITIONS
        .iter()
        .map(|&(x, y)| init(Vec2::new(x, y)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_icons_left_to_right() {
        let icons = row();
        assert_eq!(icons.len(), 3);
        assert_eq!(icons[0].coordinate(), Vec2::new(10.0, 15.0));
        assert_eq!(icons[2].coordinate(), Vec2::new(10.0, 115.0));
        assert!(icons.iter().all(|i| i.composite().len() == 2 && i.mask() == 0));
    }
}
