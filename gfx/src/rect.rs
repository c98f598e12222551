use std::ops::Add;

use glam::IVec2;

/// Axis-aligned integer rectangle, exclusive on the outer edge.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Rect {
    p0: IVec2,
    p1: IVec2,
}

impl Rect {
    /// Create a new rectangle. Components of `p1` that are smaller than
    /// `p0`'s are clamped so the rectangle is never inside out.
    pub fn new(p0: impl Into<IVec2>, p1: impl Into<IVec2>) -> Self {
        let (p0, p1) = (p0.into(), p1.into());
        Rect { p0, p1: p1.max(p0) }
    }

    /// Create a rectangle of the given size with its corner at origin.
    pub fn sized(dim: impl Into<IVec2>) -> Self {
        Rect::new(IVec2::ZERO, dim)
    }

    pub fn min(&self) -> IVec2 {
        self.p0
    }

    pub fn max(&self) -> IVec2 {
        self.p1
    }

    pub fn dim(&self) -> IVec2 {
        self.p1 - self.p0
    }

    pub fn width(&self) -> i32 {
        self.p1.x - self.p0.x
    }

    pub fn height(&self) -> i32 {
        self.p1.y - self.p0.y
    }

    pub fn is_empty(&self) -> bool {
        self.p1.x <= self.p0.x || self.p1.y <= self.p0.y
    }

    pub fn contains(&self, p: impl Into<IVec2>) -> bool {
        let p = p.into();
        p.x >= self.p0.x && p.y >= self.p0.y && p.x < self.p1.x && p.y < self.p1.y
    }

    /// Whether `r` fits entirely inside this rectangle.
    pub fn contains_rect(&self, r: &Rect) -> bool {
        r.is_empty()
            || (r.p0.x >= self.p0.x
                && r.p0.y >= self.p0.y
                && r.p1.x <= self.p1.x
                && r.p1.y <= self.p1.y)
    }
}

impl Add<IVec2> for Rect {
    type Output = Rect;

    fn add(self, offset: IVec2) -> Rect {
        Rect {
            p0: self.p0 + offset,
            p1: self.p1 + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::ivec2;

    use super::*;

    #[test]
    fn construction() {
        let r = Rect::new([1, 2], [4, 6]);
        assert_eq!(r.min(), ivec2(1, 2));
        assert_eq!(r.max(), ivec2(4, 6));
        assert_eq!(r.dim(), ivec2(3, 4));
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 4);
        assert!(!r.is_empty());

        // Inside-out input clamps to an empty rectangle.
        assert!(Rect::new([4, 4], [1, 1]).is_empty());
        assert_eq!(Rect::sized([8, 8]).min(), IVec2::ZERO);
    }

    #[test]
    fn containment() {
        let r = Rect::new([0, 0], [10, 5]);
        assert!(r.contains([0, 0]));
        assert!(r.contains([9, 4]));
        assert!(!r.contains([10, 4]));
        assert!(!r.contains([-1, 0]));

        assert!(r.contains_rect(&Rect::new([2, 1], [10, 5])));
        assert!(!r.contains_rect(&Rect::new([2, 1], [11, 5])));
        // Empty rectangles fit anywhere.
        assert!(r.contains_rect(&Rect::new([20, 20], [20, 20])));
    }

    #[test]
    fn offset() {
        let r = Rect::sized([8, 8]) + ivec2(16, 24);
        assert_eq!(r.min(), ivec2(16, 24));
        assert_eq!(r.max(), ivec2(24, 32));
    }
}
