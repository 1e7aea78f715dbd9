//! Static level geometry
//!
//! The level is a fixed, ordered list of axis-aligned rectangles. Order
//! matters: the player physics scans items in storage order and the first
//! landing candidate wins.

use glam::Vec2;
use thiserror::Error;

/// An axis-aligned rectangle in world pixels, y growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }
}

/// One piece of level geometry
///
/// Non-blocking items are scenery: they contribute to the world bounding
/// box and get drawn, but never participate in collision.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentItem {
    pub rectangle: Rect,
    pub blocking: bool,
    pub color: [f32; 4],
}

/// Tight axis-aligned box around the whole level, computed once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    pub min: Vec2,
    pub max: Vec2,
}

/// Startup-time level validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    /// An empty level has no bounding box to clamp the camera against
    #[error("level contains no environment items")]
    EmptyLevel,
}

/// Compute the tightest box covering every item's rectangle.
///
/// Blocking flags and colors are irrelevant here; scenery stretches the
/// camera bounds just like platforms do. Fails fast on an empty level
/// rather than handing the camera a degenerate box.
pub fn bounding_box(items: &[EnvironmentItem]) -> Result<BoundingBox2D, LevelError> {
    let first = items.first().ok_or(LevelError::EmptyLevel)?;

    let mut bounds = BoundingBox2D {
        min: first.rectangle.min(),
        max: first.rectangle.max(),
    };
    for item in &items[1..] {
        bounds.min = bounds.min.min(item.rectangle.min());
        bounds.max = bounds.max.max(item.rectangle.max());
    }
    Ok(bounds)
}

const LIGHT_GRAY: [f32; 4] = [0.78, 0.78, 0.78, 1.0];
const GRAY: [f32; 4] = [0.51, 0.51, 0.51, 1.0];

/// The built-in demo level: a backdrop, the ground, and three platforms.
///
/// Compiled-in on purpose; a config loader could produce the same list
/// without touching the simulation.
pub fn demo_level() -> Vec<EnvironmentItem> {
    vec![
        EnvironmentItem {
            rectangle: Rect::new(0.0, 0.0, 1000.0, 400.0),
            blocking: false,
            color: LIGHT_GRAY,
        },
        EnvironmentItem {
            rectangle: Rect::new(0.0, 400.0, 1000.0, 200.0),
            blocking: true,
            color: GRAY,
        },
        EnvironmentItem {
            rectangle: Rect::new(300.0, 200.0, 400.0, 10.0),
            blocking: true,
            color: GRAY,
        },
        EnvironmentItem {
            rectangle: Rect::new(250.0, 300.0, 100.0, 10.0),
            blocking: true,
            color: GRAY,
        },
        EnvironmentItem {
            rectangle: Rect::new(650.0, 300.0, 100.0, 10.0),
            blocking: true,
            color: GRAY,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(x: f32, y: f32, w: f32, h: f32) -> EnvironmentItem {
        EnvironmentItem {
            rectangle: Rect::new(x, y, w, h),
            blocking: true,
            color: GRAY,
        }
    }

    #[test]
    fn test_empty_level_is_rejected() {
        assert_eq!(bounding_box(&[]), Err(LevelError::EmptyLevel));
    }

    #[test]
    fn test_demo_level_bounds() {
        let bounds = bounding_box(&demo_level()).unwrap();
        assert_eq!(bounds.min, glam::Vec2::new(0.0, 0.0));
        assert_eq!(bounds.max, glam::Vec2::new(1000.0, 600.0));
    }

    #[test]
    fn test_non_blocking_items_stretch_bounds() {
        let items = [
            item(0.0, 0.0, 10.0, 10.0),
            EnvironmentItem {
                rectangle: Rect::new(-50.0, -20.0, 5.0, 5.0),
                blocking: false,
                color: LIGHT_GRAY,
            },
        ];
        let bounds = bounding_box(&items).unwrap();
        assert_eq!(bounds.min, glam::Vec2::new(-50.0, -20.0));
        assert_eq!(bounds.max, glam::Vec2::new(10.0, 10.0));
    }

    proptest! {
        /// The bounding box contains every individual rectangle.
        #[test]
        fn prop_bounds_cover_every_rect(
            rects in prop::collection::vec(
                (-2000.0f32..2000.0, -2000.0f32..2000.0, 0.0f32..500.0, 0.0f32..500.0),
                1..32,
            )
        ) {
            let items: Vec<_> = rects
                .iter()
                .map(|&(x, y, w, h)| item(x, y, w, h))
                .collect();
            let bounds = bounding_box(&items).unwrap();
            for it in &items {
                prop_assert!(bounds.min.x <= it.rectangle.x);
                prop_assert!(bounds.min.y <= it.rectangle.y);
                prop_assert!(bounds.max.x >= it.rectangle.x + it.rectangle.width);
                prop_assert!(bounds.max.y >= it.rectangle.y + it.rectangle.height);
            }
        }
    }
}
