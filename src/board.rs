use rstar::RTree;
use tracing::debug;

use crate::error::BoardError;
use crate::geometry::site::Site;

const INCH_MM: f64 = 25.4;

/// Hole pattern of a breadboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// 1/4"-20 holes on a 1 inch grid.
    Imperial1In,
    /// M6 holes on a 25 mm grid. Declared but not supported yet.
    Metric25Mm,
}

/// Provider of the rectangular region that beam points must stay within.
///
/// Implemented by [`Breadboard`]; beams only depend on this trait so that
/// tests and other layout surfaces can supply their own bounds.
pub trait BoardBounds {
    fn width_mm(&self) -> f64;

    fn height_mm(&self) -> f64;

    /// Check if the site is within the bounds. Edges are inclusive.
    fn contains(&self, site: &Site) -> bool {
        site.x >= 0.0 && site.x <= self.width_mm() && site.y >= 0.0 && site.y <= self.height_mm()
    }
}

/// A breadboard with a regular pattern of mounting holes.
///
/// The board is the coordinate frame of a layout: the origin is the bottom
/// left corner and all distances are in millimeters.
#[derive(Debug, Clone)]
pub struct Breadboard {
    width_mm: f64,
    height_mm: f64,
    pattern: Pattern,
    hole_diam_mm: f64,
    margin_mm: f64,
    hole_tree: RTree<Site>,
}

impl Breadboard {
    /// Create a breadboard with the given dimensions and hole pattern.
    pub fn new(width_mm: f64, height_mm: f64, pattern: Pattern) -> Result<Self, BoardError> {
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(BoardError::InvalidDimensions {
                width_mm,
                height_mm,
            });
        }
        let (hole_diam_mm, margin_mm, spacing_mm) = match pattern {
            Pattern::Imperial1In => (0.25 * INCH_MM, 0.5 * INCH_MM, INCH_MM),
            Pattern::Metric25Mm => return Err(BoardError::UnsupportedPattern(pattern)),
        };
        let holes = Self::grid_holes(width_mm, height_mm, margin_mm, spacing_mm);
        debug!(
            width_mm,
            height_mm,
            holes = holes.len(),
            "breadboard created"
        );
        Ok(Self {
            width_mm,
            height_mm,
            pattern,
            hole_diam_mm,
            margin_mm,
            hole_tree: RTree::bulk_load(holes),
        })
    }

    /// Calculate the hole positions of a margin-inset square grid.
    fn grid_holes(width_mm: f64, height_mm: f64, margin_mm: f64, spacing_mm: f64) -> Vec<Site> {
        // half-spacing slack absorbs rounding at the far edge
        let count = |dimension_mm: f64| {
            let span = dimension_mm - 2.0 * margin_mm;
            if span < 0.0 {
                0
            } else {
                ((span + spacing_mm / 2.0) / spacing_mm) as usize + 1
            }
        };
        let mut holes = Vec::new();
        for i in 0..count(width_mm) {
            for j in 0..count(height_mm) {
                let site = Site::new(
                    margin_mm + i as f64 * spacing_mm,
                    margin_mm + j as f64 * spacing_mm,
                );
                if site.x <= width_mm - margin_mm + 1e-9 && site.y <= height_mm - margin_mm + 1e-9 {
                    holes.push(site);
                }
            }
        }
        holes
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn hole_diam_mm(&self) -> f64 {
        self.hole_diam_mm
    }

    pub fn margin_mm(&self) -> f64 {
        self.margin_mm
    }

    /// Get the mounting hole positions.
    pub fn holes_iter(&self) -> impl Iterator<Item = &Site> {
        self.hole_tree.iter()
    }

    /// Get the mounting hole nearest to the site, if the board has any holes.
    pub fn nearest_hole(&self, site: &Site) -> Option<Site> {
        self.hole_tree
            .nearest_neighbor(&[site.x, site.y])
            .copied()
    }
}

impl BoardBounds for Breadboard {
    fn width_mm(&self) -> f64 {
        self.width_mm
    }

    fn height_mm(&self) -> f64 {
        self.height_mm
    }
}
