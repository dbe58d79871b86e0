use super::Vec2;

/// Per-corner radii for a rounded rectangle, in pixels.
///
/// Each corner carries an `(x, y)` pair so elliptical corners can be described.
/// Corner order is clockwise from the top-left: top-left, top-right,
/// bottom-right, bottom-left. Flattened, that gives the eight-value layout
/// `[tl.x, tl.y, tr.x, tr.y, br.x, br.y, bl.x, bl.y]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_right: Vec2, bottom_left: Vec2) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform circular radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self::elliptical(r, r)
    }

    /// Same `(rx, ry)` pair on all four corners.
    #[inline]
    pub const fn elliptical(rx: f32, ry: f32) -> Self {
        let v = Vec2::new(rx, ry);
        Self { top_left: v, top_right: v, bottom_right: v, bottom_left: v }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Builds radii from the flattened eight-value layout.
    pub fn from_array(v: [f32; 8]) -> Self {
        Self {
            top_left: Vec2::new(v[0], v[1]),
            top_right: Vec2::new(v[2], v[3]),
            bottom_right: Vec2::new(v[4], v[5]),
            bottom_left: Vec2::new(v[6], v[7]),
        }
    }

    /// Flattened eight-value layout.
    pub fn to_array(self) -> [f32; 8] {
        [
            self.top_left.x,
            self.top_left.y,
            self.top_right.x,
            self.top_right.y,
            self.bottom_right.x,
            self.bottom_right.y,
            self.bottom_left.x,
            self.bottom_left.y,
        ]
    }

    /// Corners in clockwise order starting at the top-left.
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    /// Replaces negative and non-finite components with zero.
    pub fn sanitized(self) -> Self {
        let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let [a, b, c, d, e, f, g, h] = self.to_array();
        Self::from_array([fix(a), fix(b), fix(c), fix(d), fix(e), fix(f), fix(g), fix(h)])
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scaled(self, s: f32) -> Self {
        Self::new(self.top_left * s, self.top_right * s, self.bottom_right * s, self.bottom_left * s)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.to_array().iter().all(|v| *v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_layout_is_clockwise_pairs() {
        let radii = CornerRadii::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(radii.top_right, Vec2::new(3.0, 4.0));
        assert_eq!(radii.bottom_left, Vec2::new(7.0, 8.0));
        assert_eq!(radii.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn sanitized_drops_negative_and_nan() {
        let radii = CornerRadii::from_array([-1.0, f32::NAN, 3.0, f32::INFINITY, 5.0, 6.0, 0.0, 8.0]);
        assert_eq!(radii.sanitized().to_array(), [0.0, 0.0, 3.0, 0.0, 5.0, 6.0, 0.0, 8.0]);
    }

    #[test]
    fn all_fills_every_slot() {
        assert!(CornerRadii::all(12.0).to_array().iter().all(|v| *v == 12.0));
        assert!(CornerRadii::zero().is_zero());
    }
}
