pub mod footprint;

use crate::geometry::{rect::Rect, site::Site};

use footprint::Footprint;

/// Capability interface of a physical component placed on the board.
///
/// Components are positioned by their mounting pin and carry a separate
/// beam site, the point where the beam meets the optic.
pub trait Component {
    fn name(&self) -> &str;

    /// Get the mounting pin position.
    fn site(&self) -> Site;

    /// Get the point where the beam meets the optic.
    fn beam_site(&self) -> Site;

    /// Get the rotation on the board in radians.
    fn theta(&self) -> f64;

    /// Get the physical footprint on the board.
    fn footprint(&self) -> Footprint;

    /// Get the axis-aligned bounding box of the footprint.
    fn bounding_box(&self) -> Rect {
        self.footprint().bounding_box()
    }

    /// Check if this component's footprint overlaps the other's.
    fn collides_with(&self, other: &dyn Component) -> bool {
        self.footprint().intersects(&other.footprint())
    }
}

/// Rough rectangular footprint of a kinematic mirror mount.
#[derive(Debug, Clone)]
pub struct KinematicMount {
    name: String,
    site: Site,
    beam_site: Site,
    theta: f64,
    width_mm: f64,
    height_mm: f64,
}

impl KinematicMount {
    pub const DEFAULT_WIDTH_MM: f64 = 50.0;
    pub const DEFAULT_HEIGHT_MM: f64 = 30.0;

    /// Create a mount with the default footprint size. The beam site
    /// coincides with the mounting pin until moved with
    /// [`with_beam_site`](Self::with_beam_site).
    pub fn new(name: impl Into<String>, site: Site, theta: f64) -> Self {
        Self {
            name: name.into(),
            site,
            beam_site: site,
            theta,
            width_mm: Self::DEFAULT_WIDTH_MM,
            height_mm: Self::DEFAULT_HEIGHT_MM,
        }
    }

    pub fn with_size(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self
    }

    pub fn with_beam_site(mut self, beam_site: Site) -> Self {
        self.beam_site = beam_site;
        self
    }
}

impl Component for KinematicMount {
    fn name(&self) -> &str {
        &self.name
    }

    fn site(&self) -> Site {
        self.site
    }

    fn beam_site(&self) -> Site {
        self.beam_site
    }

    fn theta(&self) -> f64 {
        self.theta
    }

    fn footprint(&self) -> Footprint {
        Footprint::centered(self.site, self.width_mm, self.height_mm, self.theta)
    }
}
