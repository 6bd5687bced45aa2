pub mod layout;
pub mod relax;
pub mod stack;

/// A point in canvas space (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Canvas geometry for the role map.
///
/// Placed roles are kept inside `[padding + inset_x, width - padding - inset_x]`
/// horizontally and `[padding + inset_top, height - padding - inset_bottom]`
/// vertically. The bottom inset is larger to leave room for the label drawn
/// under each dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapGeometry {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub inset_x: f32,
    pub inset_top: f32,
    pub inset_bottom: f32,
}

impl Default for MapGeometry {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 750.0,
            padding: 100.0,
            inset_x: 50.0,
            inset_top: 50.0,
            inset_bottom: 60.0,
        }
    }
}

impl MapGeometry {
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn min_x(&self) -> f32 {
        self.padding + self.inset_x
    }

    pub fn max_x(&self) -> f32 {
        self.width - self.padding - self.inset_x
    }

    pub fn min_y(&self) -> f32 {
        self.padding + self.inset_top
    }

    pub fn max_y(&self) -> f32 {
        self.height - self.padding - self.inset_bottom
    }

    /// Clamp a point into the placement bounds.
    ///
    /// `f32::min`/`max` ignore a NaN operand, so a NaN axis lands on the upper
    /// bound instead of leaking out.
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: self.min_x().max(self.max_x().min(p.x)),
            y: self.min_y().max(self.max_y().min(p.y)),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}
