use crate::geometry::site::Site;

/// ID for identifying a point in a beam path.
///
/// Points are owned by the beam; neighbors refer to each other by id
/// instead of holding references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PointId(usize);

impl PointId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    pub(crate) fn as_num(&self) -> usize {
        self.0
    }
}

/// One vertex of a beam path.
///
/// `nexts` and `prevs` are sequences so that a splitter can branch the
/// path later, but the sequential construction API only ever creates
/// chains with at most one link on each side.
#[derive(Debug, Clone)]
pub struct BeamPoint {
    site: Site,
    theta: Option<f64>,
    nexts: Vec<PointId>,
    prevs: Vec<PointId>,
}

impl BeamPoint {
    pub(crate) fn new(site: Site) -> Self {
        Self {
            site,
            theta: None,
            nexts: Vec::new(),
            prevs: Vec::new(),
        }
    }

    pub(crate) fn with_theta(site: Site, theta: f64) -> Self {
        Self {
            theta: Some(theta),
            ..Self::new(site)
        }
    }

    pub fn site(&self) -> Site {
        self.site
    }

    /// Get the angle of arrival in radians.
    /// Only recorded for points created by a polar move.
    pub fn theta(&self) -> Option<f64> {
        self.theta
    }

    /// Get the successor points.
    pub fn nexts(&self) -> &[PointId] {
        &self.nexts
    }

    /// Get the predecessor points.
    pub fn prevs(&self) -> &[PointId] {
        &self.prevs
    }

    /// Append a successor link. Always paired with an `add_prev` call on
    /// the successor; uniqueness is the caller's responsibility.
    pub(crate) fn add_next(&mut self, id: PointId) {
        self.nexts.push(id);
    }

    /// Append a predecessor link.
    pub(crate) fn add_prev(&mut self, id: PointId) {
        self.prevs.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links() {
        let mut point = BeamPoint::new(Site::new(1.0, 2.0));
        assert!(point.nexts().is_empty());
        assert!(point.prevs().is_empty());

        point.add_next(PointId::new(1));
        point.add_prev(PointId::new(0));
        assert_eq!(point.nexts(), &[PointId::new(1)]);
        assert_eq!(point.prevs(), &[PointId::new(0)]);
    }

    #[test]
    fn test_theta_is_only_recorded_when_given() {
        let point = BeamPoint::new(Site::new(0.0, 0.0));
        assert_eq!(point.theta(), None);

        let point = BeamPoint::with_theta(Site::new(0.0, 0.0), 1.25);
        assert_eq!(point.theta(), Some(1.25));
    }
}
