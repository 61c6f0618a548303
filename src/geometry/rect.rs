use rstar::{PointDistance, RTreeObject};

use super::site::Site;

/// Representation of an axis-aligned rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Create a rectangle from x, y, width, and height.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two sites.
    pub fn from_sites(start: &Site, end: &Site) -> Self {
        let x = start.x.min(end.x);
        let y = start.y.min(end.y);
        let width = start.x.max(end.x) - x;
        let height = start.y.max(end.y) - y;
        Self::new(x, y, width, height)
    }

    /// Create the smallest rectangle enclosing all of the sites.
    pub fn from_sites_iter<'a>(sites: impl IntoIterator<Item = &'a Site>) -> Option<Self> {
        let mut iter = sites.into_iter();
        let first = iter.next()?;
        let init = Self::from_sites(first, first);
        Some(iter.fold(init, |rect, site| {
            let min = Site::new(rect.x.min(site.x), rect.y.min(site.y));
            let max = Site::new(
                (rect.x + rect.width).max(site.x),
                (rect.y + rect.height).max(site.y),
            );
            Self::from_sites(&min, &max)
        }))
    }

    pub fn min(&self) -> Site {
        Site::new(self.x, self.y)
    }

    pub fn max(&self) -> Site {
        Site::new(self.x + self.width, self.y + self.height)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Check if the site is inside the rectangle. Edges are inclusive.
    pub fn contains(&self, site: &Site) -> bool {
        site.x >= self.x
            && site.x <= self.x + self.width
            && site.y >= self.y
            && site.y <= self.y + self.height
    }
}

impl RTreeObject for Rect {
    type Envelope = rstar::AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        rstar::AABB::from_corners(
            [self.x, self.y],
            [self.x + self.width, self.y + self.height],
        )
    }
}

impl PointDistance for Rect {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let x = point[0].max(self.x).min(self.x + self.width);
        let y = point[1].max(self.y).min(self.y + self.height);
        (x - point[0]).powi(2) + (y - point[1]).powi(2)
    }
}
