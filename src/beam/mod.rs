pub mod point;
pub mod spectrum;

use glam::DVec2;
use tracing::debug;

use crate::board::BoardBounds;
use crate::error::BeamError;
use crate::geometry::site::Site;

use point::{BeamPoint, PointId};
use spectrum::{wavelength_to_color, Color};

/// Stroke style used when a beam is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Directions below this norm are treated as degenerate when bisecting.
const NORMAL_EPSILON: f64 = 1e-9;

/// An ordered path of connected points representing a light ray's route
/// across the board.
///
/// The beam owns its points and grows them one at a time through
/// [`begin`](Beam::begin), [`move_to`](Beam::move_to),
/// [`move_by`](Beam::move_by) and [`turn_and_move`](Beam::turn_and_move).
/// Every target position is validated against the board bounds before the
/// chain is touched, so a failed call never leaves a partial point behind.
#[derive(Debug)]
pub struct Beam<'a, B>
where
    B: BoardBounds,
{
    board: &'a B,
    points: Vec<BeamPoint>,
    line_width: f64,
    style: LineStyle,
    wavelength_nm: f64,
    waist_mm: f64,
    color: Option<Color>,
    opacity: f64,
}

impl<'a, B> Beam<'a, B>
where
    B: BoardBounds,
{
    /// Create an empty beam bound to the board.
    pub fn new(board: &'a B) -> Self {
        Self {
            board,
            points: Vec::new(),
            line_width: 1.5,
            style: LineStyle::Dashed,
            wavelength_nm: 493.0,
            waist_mm: 0.25,
            color: None,
            opacity: 1.0,
        }
    }

    pub fn with_wavelength(mut self, wavelength_nm: f64) -> Self {
        self.wavelength_nm = wavelength_nm;
        self
    }

    pub fn with_waist(mut self, waist_mm: f64) -> Self {
        self.waist_mm = waist_mm;
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Override the spectral color with an explicit one.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Start the beam at an absolute position.
    ///
    /// Fails with [`BeamError::AlreadyStarted`] if the beam already has a
    /// point, and with [`BeamError::OutOfBounds`] if the position is
    /// outside the board.
    pub fn begin(&mut self, x: f64, y: f64) -> Result<PointId, BeamError> {
        if !self.points.is_empty() {
            return Err(BeamError::AlreadyStarted);
        }
        let site = self.checked_site(Site::new(x, y))?;
        debug!(x, y, "beam started");
        Ok(self.push_point(BeamPoint::new(site)))
    }

    /// Extend the beam to an absolute position.
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<PointId, BeamError> {
        self.last_site()?;
        let site = self.checked_site(Site::new(x, y))?;
        Ok(self.push_linked_point(BeamPoint::new(site)))
    }

    /// Extend the beam by a relative offset from the last point.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> Result<PointId, BeamError> {
        let last = self.last_site()?;
        let site = self.checked_site(Site::new(last.x + dx, last.y + dy))?;
        Ok(self.push_linked_point(BeamPoint::new(site)))
    }

    /// Extend the beam by a polar move from the last point. The new point
    /// records `theta` as its angle of arrival.
    pub fn turn_and_move(&mut self, theta: f64, dr: f64) -> Result<PointId, BeamError> {
        let last = self.last_site()?;
        let site = self.checked_site(last.extend(theta, dr))?;
        Ok(self.push_linked_point(BeamPoint::with_theta(site, theta)))
    }

    fn last_site(&self) -> Result<Site, BeamError> {
        self.points
            .last()
            .map(|point| point.site())
            .ok_or(BeamError::EmptyChain)
    }

    fn checked_site(&self, site: Site) -> Result<Site, BeamError> {
        if self.board.contains(&site) {
            Ok(site)
        } else {
            Err(BeamError::OutOfBounds {
                x: site.x,
                y: site.y,
            })
        }
    }

    fn push_point(&mut self, point: BeamPoint) -> PointId {
        let id = PointId::new(self.points.len());
        self.points.push(point);
        id
    }

    /// Append a point and link it bidirectionally with the current last
    /// point. The chain must be non-empty.
    fn push_linked_point(&mut self, point: BeamPoint) -> PointId {
        let last_id = PointId::new(self.points.len() - 1);
        let id = self.push_point(point);
        self.points[last_id.as_num()].add_next(id);
        self.points[id.as_num()].add_prev(last_id);
        id
    }

    /// Compute the unit vector bisecting the directions from the point
    /// toward its `prev_index`-th predecessor and its `next_index`-th
    /// successor. This is the outward normal of the optic placed at a
    /// bend.
    ///
    /// Fails with [`BeamError::NoPredecessor`] / [`BeamError::NoSuccessor`]
    /// at chain ends, and with [`BeamError::DegenerateNormal`] when the two
    /// directions cancel out (a straight pass-through or a zero-length
    /// segment).
    pub fn normal_vector(
        &self,
        id: PointId,
        prev_index: usize,
        next_index: usize,
    ) -> Result<DVec2, BeamError> {
        let point = &self.points[id.as_num()];
        let prev_id = *point
            .prevs()
            .get(prev_index)
            .ok_or(BeamError::NoPredecessor)?;
        let next_id = *point.nexts().get(next_index).ok_or(BeamError::NoSuccessor)?;

        let center: DVec2 = point.site().into();
        let toward_prev = DVec2::from(self.points[prev_id.as_num()].site()) - center;
        let toward_next = DVec2::from(self.points[next_id.as_num()].site()) - center;
        if toward_prev.length() < NORMAL_EPSILON || toward_next.length() < NORMAL_EPSILON {
            return Err(BeamError::DegenerateNormal);
        }

        let bisector = toward_prev.normalize() + toward_next.normalize();
        if bisector.length() < NORMAL_EPSILON {
            return Err(BeamError::DegenerateNormal);
        }
        Ok(bisector.normalize())
    }

    /// Get the number of points in the beam.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by id.
    pub fn point(&self, id: PointId) -> Option<&BeamPoint> {
        self.points.get(id.as_num())
    }

    /// Get the last point of the chain.
    pub fn last(&self) -> Option<&BeamPoint> {
        self.points.last()
    }

    /// Get the points in path order.
    pub fn points_iter(&self) -> impl Iterator<Item = (PointId, &BeamPoint)> {
        self.points
            .iter()
            .enumerate()
            .map(|(id, point)| (PointId::new(id), point))
    }

    /// Get the ordered positions of the path, for renderers.
    pub fn path(&self) -> Vec<Site> {
        self.points.iter().map(|point| point.site()).collect()
    }

    /// Resolve the render color: the explicit override if set, otherwise
    /// the spectral color of the wavelength.
    pub fn color(&self) -> Color {
        self.color
            .unwrap_or_else(|| wavelength_to_color(self.wavelength_nm))
    }

    pub fn wavelength_nm(&self) -> f64 {
        self.wavelength_nm
    }

    pub fn waist_mm(&self) -> f64 {
        self.waist_mm
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBounds, Breadboard, Pattern};

    struct FixedBounds {
        width_mm: f64,
        height_mm: f64,
    }

    impl BoardBounds for FixedBounds {
        fn width_mm(&self) -> f64 {
            self.width_mm
        }

        fn height_mm(&self) -> f64 {
            self.height_mm
        }
    }

    fn bounds_100x50() -> FixedBounds {
        FixedBounds {
            width_mm: 100.0,
            height_mm: 50.0,
        }
    }

    #[test]
    fn test_begin_only_once() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        assert!(beam.begin(10.0, 10.0).is_ok());
        assert_eq!(beam.begin(20.0, 20.0), Err(BeamError::AlreadyStarted));
        assert_eq!(beam.len(), 1);
    }

    #[test]
    fn test_moves_require_begin() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        assert_eq!(beam.move_to(10.0, 10.0), Err(BeamError::EmptyChain));
        assert_eq!(beam.move_by(1.0, 1.0), Err(BeamError::EmptyChain));
        assert_eq!(beam.turn_and_move(0.0, 1.0), Err(BeamError::EmptyChain));
        assert!(beam.is_empty());
    }

    #[test]
    fn test_out_of_bounds_leaves_chain_unchanged() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        assert!(matches!(
            beam.begin(-1.0, 10.0),
            Err(BeamError::OutOfBounds { .. })
        ));
        assert!(beam.is_empty());

        beam.begin(10.0, 10.0).unwrap();
        assert!(matches!(
            beam.move_to(101.0, 10.0),
            Err(BeamError::OutOfBounds { .. })
        ));
        assert!(matches!(
            beam.move_by(0.0, 41.0),
            Err(BeamError::OutOfBounds { .. })
        ));
        assert!(matches!(
            beam.turn_and_move(std::f64::consts::PI, 11.0),
            Err(BeamError::OutOfBounds { .. })
        ));
        assert_eq!(beam.len(), 1);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        beam.begin(0.0, 0.0).unwrap();
        assert!(beam.move_to(100.0, 50.0).is_ok());
    }

    #[test]
    fn test_move_by_is_exact() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        beam.begin(12.5, 10.25).unwrap();
        let id = beam.move_by(30.0, 0.75).unwrap();
        assert_eq!(beam.point(id).unwrap().site(), Site::new(42.5, 11.0));
    }

    #[test]
    fn test_turn_and_move_records_theta() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        beam.begin(10.0, 10.0).unwrap();
        let theta = std::f64::consts::FRAC_PI_4;
        let id = beam.turn_and_move(theta, 2.0_f64.sqrt()).unwrap();

        let point = beam.point(id).unwrap();
        assert_eq!(point.theta(), Some(theta));
        assert!((point.site().x - 11.0).abs() < 1e-12);
        assert!((point.site().y - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_chain_linkage_is_bidirectional() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        let first = beam.begin(10.0, 10.0).unwrap();
        let second = beam.move_to(20.0, 10.0).unwrap();
        let third = beam.move_by(0.0, 10.0).unwrap();

        assert_eq!(beam.point(first).unwrap().nexts(), &[second]);
        assert!(beam.point(first).unwrap().prevs().is_empty());
        assert_eq!(beam.point(second).unwrap().prevs(), &[first]);
        assert_eq!(beam.point(second).unwrap().nexts(), &[third]);
        assert_eq!(beam.point(third).unwrap().prevs(), &[second]);
        assert!(beam.point(third).unwrap().nexts().is_empty());
    }

    #[test]
    fn test_normal_vector_at_right_angle_bend() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        beam.begin(0.0, 10.0).unwrap();
        let bend = beam.move_to(10.0, 10.0).unwrap();
        beam.move_to(10.0, 20.0).unwrap();

        // a 45 degree mirror at the bend faces back-left
        let normal = beam.normal_vector(bend, 0, 0).unwrap();
        let expected = DVec2::new(-1.0, 1.0).normalize();
        assert!((normal - expected).length() < 1e-12);
    }

    #[test]
    fn test_normal_vector_requires_adjacency() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        let first = beam.begin(0.0, 10.0).unwrap();
        let last = beam.move_to(10.0, 10.0).unwrap();

        assert_eq!(
            beam.normal_vector(first, 0, 0),
            Err(BeamError::NoPredecessor)
        );
        assert_eq!(beam.normal_vector(last, 0, 0), Err(BeamError::NoSuccessor));
    }

    #[test]
    fn test_normal_vector_degenerate_on_straight_chain() {
        let bounds = bounds_100x50();
        let mut beam = Beam::new(&bounds);
        beam.begin(0.0, 0.0).unwrap();
        let middle = beam.move_to(1.0, 0.0).unwrap();
        beam.move_to(2.0, 0.0).unwrap();

        // opposite arms cancel out, the bisector is undefined
        assert_eq!(
            beam.normal_vector(middle, 0, 0),
            Err(BeamError::DegenerateNormal)
        );
    }

    #[test]
    fn test_color_resolution() {
        let board = Breadboard::new(254.0, 203.2, Pattern::Imperial1In).unwrap();
        let beam = Beam::new(&board).with_wavelength(650.0);
        assert_eq!(beam.color(), Color::new(255, 0, 0));

        let beam = Beam::new(&board)
            .with_wavelength(650.0)
            .with_color(Color::new(1, 2, 3));
        assert_eq!(beam.color(), Color::new(1, 2, 3));
    }
}
