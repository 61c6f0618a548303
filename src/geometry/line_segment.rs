use super::{rect::Rect, site::Site};

/// Representation of a line segment.
#[derive(Debug, Copy, Clone)]
pub struct LineSegment(pub Site, pub Site);

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl LineSegment {
    /// Create a line segment from two sites.
    pub fn new(start: Site, end: Site) -> Self {
        Self(start, end)
    }

    /// Convert the line segment into a rectangle.
    pub fn into_rect(self) -> Rect {
        Rect::from_sites(&self.0, &self.1)
    }

    /// Calculate the intersection of two line segments.
    /// If the intersection is outside the line segments or the line segments are parallel, return None
    /// even if the two line segments are collinear.
    pub fn get_intersection(&self, other: &Self) -> Option<Site> {
        let (x0, y0) = (self.0.x, self.0.y);
        let (x1, y1) = (self.1.x, self.1.y);
        let (x2, y2) = (other.0.x, other.0.y);
        let (x3, y3) = (other.1.x, other.1.y);

        let a1 = y1 - y0;
        let b1 = x0 - x1;
        let c1 = x1 * y0 - x0 * y1;
        let r3 = a1 * x2 + b1 * y2 + c1;
        let r4 = a1 * x3 + b1 * y3 + c1;
        if r3 * r4 > 0.0 {
            return None;
        }

        let a2 = y3 - y2;
        let b2 = x2 - x3;
        let c2 = x3 * y2 - x2 * y3;
        let r1 = a2 * x0 + b2 * y0 + c2;
        let r2 = a2 * x1 + b2 * y1 + c2;
        if r1 * r2 > 0.0 {
            return None;
        }

        let denom = a1 * b2 - a2 * b1;
        if denom == 0.0 {
            return None;
        }
        let x = (b1 * c2 - b2 * c1) / denom;
        let y = (a2 * c1 - a1 * c2) / denom;
        Some(Site::new(x, y))
    }
}
