use crate::geometry::{line_segment::LineSegment, rect::Rect, site::Site};

/// Rotated rectangular footprint of a component on the board.
///
/// Corners are stored in counterclockwise order around the mounting
/// position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    corners: [Site; 4],
}

impl Footprint {
    /// Create a footprint of the given size centered on the site and
    /// rotated by theta (radians).
    pub fn centered(center: Site, width_mm: f64, height_mm: f64, theta: f64) -> Self {
        let (half_w, half_h) = (width_mm / 2.0, height_mm / 2.0);
        let (sin, cos) = theta.sin_cos();
        let corner = |dx: f64, dy: f64| {
            Site::new(
                center.x + dx * cos - dy * sin,
                center.y + dx * sin + dy * cos,
            )
        };
        Self {
            corners: [
                corner(-half_w, -half_h),
                corner(half_w, -half_h),
                corner(half_w, half_h),
                corner(-half_w, half_h),
            ],
        }
    }

    pub fn corners(&self) -> &[Site; 4] {
        &self.corners
    }

    /// Get the four edges in counterclockwise order.
    pub fn edges(&self) -> [LineSegment; 4] {
        [
            LineSegment::new(self.corners[0], self.corners[1]),
            LineSegment::new(self.corners[1], self.corners[2]),
            LineSegment::new(self.corners[2], self.corners[3]),
            LineSegment::new(self.corners[3], self.corners[0]),
        ]
    }

    /// Check if the site is inside the footprint. Edges are inclusive.
    pub fn contains(&self, site: &Site) -> bool {
        // the footprint is convex and counterclockwise, so the site must
        // be on the left of every edge
        self.edges().iter().all(|edge| {
            let cross = (edge.1.x - edge.0.x) * (site.y - edge.0.y)
                - (edge.1.y - edge.0.y) * (site.x - edge.0.x);
            cross >= 0.0
        })
    }

    /// Check if two footprints overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        let edges_cross = self.edges().iter().any(|edge| {
            other
                .edges()
                .iter()
                .any(|other_edge| edge.get_intersection(other_edge).is_some())
        });
        edges_cross
            || other.contains(&self.corners[0])
            || self.contains(&other.corners[0])
    }

    /// Get the axis-aligned bounding box.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_sites_iter(self.corners.iter()).expect("footprint always has corners")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let footprint = Footprint::centered(Site::new(10.0, 10.0), 4.0, 2.0, 0.0);
        assert!(footprint.contains(&Site::new(10.0, 10.0)));
        assert!(footprint.contains(&Site::new(12.0, 11.0)));
        assert!(!footprint.contains(&Site::new(12.1, 10.0)));
        assert!(!footprint.contains(&Site::new(10.0, 11.1)));
    }

    #[test]
    fn test_rotated_bounding_box() {
        let footprint =
            Footprint::centered(Site::new(0.0, 0.0), 2.0, 2.0, std::f64::consts::FRAC_PI_4);
        let bbox = footprint.bounding_box();
        let half_diagonal = 2.0_f64.sqrt();
        assert!((bbox.width() - 2.0 * half_diagonal).abs() < 1e-12);
        assert!((bbox.height() - 2.0 * half_diagonal).abs() < 1e-12);
    }

    #[test]
    fn test_intersects() {
        let a = Footprint::centered(Site::new(0.0, 0.0), 4.0, 4.0, 0.0);
        let b = Footprint::centered(Site::new(3.0, 0.0), 4.0, 4.0, 0.0);
        let c = Footprint::centered(Site::new(10.0, 0.0), 4.0, 4.0, 0.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));

        // fully contained footprint has no edge crossings
        let inner = Footprint::centered(Site::new(0.0, 0.0), 1.0, 1.0, 0.5);
        assert!(a.intersects(&inner));
        assert!(inner.intersects(&a));
    }
}
