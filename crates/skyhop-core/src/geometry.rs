use serde::{Deserialize, Serialize};

/// Clamp `v` into `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics on `lo > hi`; the upper bound wins.
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// A 2D point or vector in world pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// Axis-aligned rectangle in world pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`×`h` centred on `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }

    /// Whether `other` lies entirely inside `self` (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Finite coordinates and strictly positive size.
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w > 0.0
            && self.h > 0.0
    }
}

/// Axis-aligned overlap, strict on all four comparisons.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp(1.5, 0.0, 3.0), 1.5);
    }

    #[test]
    fn edge_touching_does_not_overlap() {
        let floor = Rect::new(0.0, 500.0, 960.0, 40.0);
        let resting = Rect::new(60.0, 460.0, 28.0, 40.0);
        assert!(!resting.overlaps(&floor));

        let sunk = Rect::new(60.0, 460.5, 28.0, 40.0);
        assert!(sunk.overlaps(&floor));
    }

    #[test]
    fn side_by_side_does_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn overlap_is_symmetric_for_nested_rects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert!(outer.contains_rect(&inner));
        assert!(!inner.contains_rect(&outer));
    }

    #[test]
    fn well_formed_rejects_degenerate() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 1.0, -2.0).is_well_formed());
        assert!(!Rect::new(f32::NAN, 0.0, 1.0, 1.0).is_well_formed());
    }

    #[test]
    fn centered_rect() {
        let r = Rect::centered(100.0, 50.0, 20.0, 10.0);
        assert_eq!(r, Rect::new(90.0, 45.0, 20.0, 10.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn rect() -> impl Strategy<Value = Rect> {
            (-500.0f32..500.0, -500.0f32..500.0, 1.0f32..200.0, 1.0f32..200.0)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        proptest! {
            #[test]
            fn overlap_is_symmetric(a in rect(), b in rect()) {
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }

            #[test]
            fn clamp_stays_in_range(v in -1e6f32..1e6, lo in -100.0f32..0.0, hi in 0.0f32..100.0) {
                let c = clamp(v, lo, hi);
                prop_assert!(c >= lo && c <= hi);
            }
        }
    }
}
