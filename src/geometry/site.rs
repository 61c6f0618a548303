use glam::DVec2;
use rstar::{PointDistance, RTreeObject, AABB};

/// Representation of a 2D site on the board, in millimeters.
#[derive(Debug, Copy, Clone)]
pub struct Site {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Site {}

impl PartialOrd for Site {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Site {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let ordering = self.x.total_cmp(&other.x);
        if ordering == std::cmp::Ordering::Equal {
            self.y.total_cmp(&other.y)
        } else {
            ordering
        }
    }
}

impl RTreeObject for Site {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for Site {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        (self.x - point[0]).powi(2) + (self.y - point[1]).powi(2)
    }
}

impl From<Site> for DVec2 {
    fn from(site: Site) -> Self {
        DVec2::new(site.x, site.y)
    }
}

impl Site {
    /// Create a site from x and y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the euclidean distance to the other site.
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_2(other).sqrt()
    }

    /// Calculate the squared euclidean distance to the other site.
    pub fn distance_2(&self, other: &Self) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    /// Calculate the site moved by the angle (radians) and distance.
    pub fn extend(&self, angle: f64, distance: f64) -> Self {
        let x = self.x + angle.cos() * distance;
        let y = self.y + angle.sin() * distance;
        Self::new(x, y)
    }

    /// Calculate the angle to the other site.
    pub fn get_angle(&self, other: &Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx)
    }
}
