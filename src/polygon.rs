//! Owned control points and the edits allowed on them.
//!
//! [`ControlPolygon`] holds the points of one curve of arbitrary degree,
//! [`PiecewisePolygon`] those of a chain of cubic segments.
//! Both are plain values: edits go through `&mut self` and either succeed completely or
//! fail without touching any point.

use log::{debug, trace};
use nalgebra::{Matrix2x4, Matrix2xX};
use smallvec::SmallVec;

use crate::config::TopologyConfig;
use crate::error::{BezierError, Result};
use crate::nbezier::{check_control_points, BezierCurve, CubicCurve, DynamicCurve};
use crate::sample::{sample_curve, sample_piecewise, Samples};
use crate::Point;

type Points = SmallVec<[Point; 4]>;

/// Control points of a single bezier curve.
///
/// There are always at least 2 points, i.e. the curve is at least linear.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPolygon {
    points: Points,
}

impl ControlPolygon {
    /// Collect control points into a polygon, failing if there are less than 2.
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Result<ControlPolygon> {
        let points: Points = points.into_iter().collect();
        check_control_points(points.len())?;
        Ok(ControlPolygon { points })
    }

    /// The control points in order `P0 ... Pn`
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`, a polygon has at least 2 points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The curve's degree which is one lower then its number of control points
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// The curve's start point
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// The curve's end point
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Human readable name of the curve's degree, e.g. "Cubic"
    pub fn curve_name(&self) -> String {
        match self.degree() {
            1 => "Linear".to_string(),
            2 => "Quadratic".to_string(),
            3 => "Cubic".to_string(),
            4 => "Quartic".to_string(),
            5 => "Quintic".to_string(),
            6 => "Sextic".to_string(),
            7 => "Septic".to_string(),
            8 => "Octic".to_string(),
            degree => format!("Degree {}", degree),
        }
    }

    /// Copy the control points into a curve
    pub fn curve(&self) -> DynamicCurve {
        BezierCurve(Matrix2xX::from_columns(&self.points[..]))
    }

    /// Get the point on the curve at position `t`.
    ///
    /// See [`BezierCurve::castlejau_eval`].
    pub fn evaluate(&self, t: f64) -> Point {
        self.curve().castlejau(t)
    }

    /// Evaluate the curve at `num_points` evenly spaced values of `t`.
    ///
    /// See [`sample_curve`].
    pub fn samples(&self, num_points: usize) -> Result<Samples<nalgebra::Dynamic>> {
        sample_curve(self, num_points)
    }

    /// Replace the point at `index`.
    ///
    /// The new position isn't checked in any way, points may overlap.
    pub fn move_point(&mut self, index: usize, position: Point) -> Result<()> {
        replace_point(&mut self.points, index, position)
    }

    /// Raise the degree by one.
    ///
    /// A new point is inserted right before the end point, halfway between the previous two
    /// points and shifted up by `config.elevation_offset`. The end points stay where they are.
    ///
    /// Unlike a real degree elevation this changes the curve's shape.
    pub fn increase_degree(&mut self, config: &TopologyConfig) {
        let last = self.last();
        let second_last = self.points[self.points.len() - 2];

        let mut new_point = (second_last + last) / 2.0;
        new_point.y += config.elevation_offset;

        self.points.insert(self.points.len() - 1, new_point);
        debug!("Raised degree to {}", self.degree());
    }

    /// Lower the degree by one by removing the point before the end point.
    ///
    /// Fails when the curve is already linear.
    pub fn decrease_degree(&mut self) -> Result<()> {
        if self.points.len() <= 2 {
            return Err(BezierError::InvalidOperation(
                "can't decrease degree below 1 (minimum 2 control points)".to_string(),
            ));
        }
        self.points.remove(self.points.len() - 2);
        debug!("Lowered degree to {}", self.degree());
        Ok(())
    }
}

impl Default for ControlPolygon {
    /// A cubic arch from `(1, 1)` to `(5, 1)`
    fn default() -> Self {
        ControlPolygon {
            points: SmallVec::from_buf([
                Point::new(1.0, 1.0),
                Point::new(2.0, 3.0),
                Point::new(4.0, 3.0),
                Point::new(5.0, 1.0),
            ]),
        }
    }
}

/// Control points of a chain of cubic bezier curves.
///
/// Segment `k` uses the points `3k` to `3k + 3`,
/// so every third point (except the first and last one) is shared by two segments.
/// Moving a shared point moves the end of one segment and the start of the next,
/// the chain can't come apart.
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewisePolygon {
    points: Vec<Point>,
}

impl PiecewisePolygon {
    /// Collect control points into a chain.
    ///
    /// Fails unless there are `3m + 1` points for some `m >= 1`.
    pub fn new<I: IntoIterator<Item = Point>>(points: I) -> Result<PiecewisePolygon> {
        let points: Vec<Point> = points.into_iter().collect();
        if points.len() < 4 || (points.len() - 1) % 3 != 0 {
            return Err(BezierError::InvalidInput(format!(
                "a chain of cubic segments needs 3m + 1 control points, got {}",
                points.len()
            )));
        }
        Ok(PiecewisePolygon { points })
    }

    /// All control points in order, shared points included once
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`, a chain has at least 4 points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of cubic segments
    pub fn segment_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    /// Whether the point at `index` is both the end of one segment and the start of the next
    pub fn is_shared_point(&self, index: usize) -> bool {
        index > 0 && index % 3 == 0 && index < self.points.len() - 1
    }

    /// Whether the point at `index` is the chain's start or end point
    pub fn is_endpoint(&self, index: usize) -> bool {
        index == 0 || index == self.points.len() - 1
    }

    /// Copy the `index`th segment's control points into a curve
    pub fn segment(&self, index: usize) -> Result<CubicCurve> {
        let count = self.segment_count();
        if index >= count {
            return Err(BezierError::IndexOutOfRange {
                index,
                len: count,
                what: "segments",
            });
        }
        Ok(self.segment_unchecked(index))
    }

    /// Iterate over all segments from start to end
    pub fn segments(&self) -> impl Iterator<Item = CubicCurve> + '_ {
        (0..self.segment_count()).map(move |index| self.segment_unchecked(index))
    }

    fn segment_unchecked(&self, index: usize) -> CubicCurve {
        let start = index * 3;
        BezierCurve(Matrix2x4::from_columns(&self.points[start..start + 4]))
    }

    /// Evaluate every segment at `num_points_per_segment` evenly spaced values of `t`.
    ///
    /// See [`sample_piecewise`].
    pub fn samples(
        &self,
        num_points_per_segment: usize,
    ) -> Result<impl Iterator<Item = Point> + '_> {
        sample_piecewise(self, num_points_per_segment)
    }

    /// Replace the point at `index`.
    ///
    /// The new position isn't checked in any way, points may overlap.
    pub fn move_point(&mut self, index: usize, position: Point) -> Result<()> {
        replace_point(&mut self.points, index, position)
    }

    /// Append a new segment starting at the current end point.
    ///
    /// Its remaining three points are placed at the current end point plus
    /// `config.segment_offsets`.
    pub fn add_segment(&mut self, config: &TopologyConfig) {
        let last = self.points[self.points.len() - 1];
        self.points
            .extend(config.segment_offsets.iter().map(|offset| last + offset));
        debug!("Added segment, now {} segments", self.segment_count());
    }
}

impl Default for PiecewisePolygon {
    /// A single flat cubic arch from `(1, 2)` to `(4, 2)`
    fn default() -> Self {
        PiecewisePolygon {
            points: vec![
                Point::new(1.0, 2.0),
                Point::new(2.0, 3.5),
                Point::new(3.0, 3.5),
                Point::new(4.0, 2.0),
            ],
        }
    }
}

impl TryFrom<ControlPolygon> for PiecewisePolygon {
    type Error = BezierError;

    /// Treat a polygon as a chain, e.g. a cubic curve as a single segment
    fn try_from(polygon: ControlPolygon) -> Result<Self> {
        PiecewisePolygon::new(polygon.points)
    }
}

impl From<PiecewisePolygon> for ControlPolygon {
    /// Treat a chain's points as the control points of one high degree curve
    fn from(chain: PiecewisePolygon) -> Self {
        ControlPolygon {
            points: chain.points.into_iter().collect(),
        }
    }
}

fn replace_point(points: &mut [Point], index: usize, position: Point) -> Result<()> {
    let len = points.len();
    let point = points.get_mut(index).ok_or(BezierError::IndexOutOfRange {
        index,
        len,
        what: "control points",
    })?;
    trace!("Moving point {} from {:?} to {:?}", index, point, position);
    *point = position;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> ControlPolygon {
        ControlPolygon::new([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap()
    }

    #[test]
    fn polygon_needs_two_points() {
        assert!(matches!(
            ControlPolygon::new([Point::new(0.0, 0.0)]),
            Err(BezierError::InvalidInput(_))
        ));
        assert!(ControlPolygon::new(Vec::<Point>::new()).is_err());
        assert_eq!(line().degree(), 1);
    }

    #[test]
    fn increase_degree_inserts_before_end() {
        let mut polygon = ControlPolygon::default();
        polygon.increase_degree(&TopologyConfig::default());

        assert_eq!(polygon.degree(), 4);
        assert_eq!(polygon.first(), Point::new(1.0, 1.0));
        assert_eq!(polygon.last(), Point::new(5.0, 1.0));
        // Midpoint of (4, 3) and (5, 1), shifted up by 0.5
        assert_eq!(polygon.points()[3], Point::new(4.5, 2.5));
    }

    #[test]
    fn elevation_offset_is_configurable() {
        let config = TopologyConfig {
            elevation_offset: -1.0,
            ..TopologyConfig::default()
        };
        let mut polygon = line();
        polygon.increase_degree(&config);
        assert_eq!(polygon.points()[1], Point::new(0.5, -0.5));
    }

    #[test]
    fn decrease_degree_removes_before_end() {
        let mut polygon = ControlPolygon::default();
        polygon.decrease_degree().unwrap();
        assert_eq!(
            polygon.points(),
            &[
                Point::new(1.0, 1.0),
                Point::new(2.0, 3.0),
                Point::new(5.0, 1.0)
            ]
        );
    }

    #[test]
    fn decrease_degree_stops_at_linear() {
        let mut polygon = line();
        let before = polygon.clone();
        assert!(matches!(
            polygon.decrease_degree(),
            Err(BezierError::InvalidOperation(_))
        ));
        assert_eq!(polygon, before);
    }

    #[test]
    fn degree_round_trip_keeps_endpoints() {
        let config = TopologyConfig::default();
        for degree in 2..8 {
            let original =
                ControlPolygon::new((0..=degree).map(|i| Point::new(i as f64, (i * i) as f64)))
                    .unwrap();
            let mut polygon = original.clone();
            polygon.increase_degree(&config);
            polygon.decrease_degree().unwrap();

            assert_eq!(polygon.len(), original.len());
            assert_eq!(polygon.first(), original.first());
            assert_eq!(polygon.last(), original.last());
        }
    }

    #[test]
    fn move_point() {
        let mut polygon = ControlPolygon::default();
        polygon.move_point(1, Point::new(-3.0, 7.0)).unwrap();
        assert_eq!(polygon.points()[1], Point::new(-3.0, 7.0));
        assert_eq!(polygon.points()[0], Point::new(1.0, 1.0));
        assert_eq!(polygon.points()[2], Point::new(4.0, 3.0));

        // Overlapping points are fine
        polygon.move_point(2, Point::new(-3.0, 7.0)).unwrap();
        assert_eq!(polygon.points()[1], polygon.points()[2]);
    }

    #[test]
    fn move_point_out_of_range() {
        let mut polygon = ControlPolygon::default();
        let before = polygon.clone();
        assert_eq!(
            polygon.move_point(4, Point::new(0.0, 0.0)),
            Err(BezierError::IndexOutOfRange {
                index: 4,
                len: 4,
                what: "control points"
            })
        );
        assert_eq!(polygon, before);
    }

    #[test]
    fn curve_names() {
        let mut polygon = line();
        assert_eq!(polygon.curve_name(), "Linear");
        let config = TopologyConfig::default();
        for _ in 0..2 {
            polygon.increase_degree(&config);
        }
        assert_eq!(polygon.curve_name(), "Cubic");
        for _ in 0..6 {
            polygon.increase_degree(&config);
        }
        assert_eq!(polygon.curve_name(), "Degree 9");
    }

    #[test]
    fn chain_needs_3m_plus_1_points() {
        for count in [0, 1, 2, 3, 5, 6, 8, 9] {
            let points = (0..count).map(|i| Point::new(i as f64, 0.0));
            assert!(
                matches!(
                    PiecewisePolygon::new(points),
                    Err(BezierError::InvalidInput(_))
                ),
                "{} points",
                count
            );
        }
        for count in [4, 7, 10] {
            let points = (0..count).map(|i| Point::new(i as f64, 0.0));
            assert!(PiecewisePolygon::new(points).is_ok());
        }
    }

    #[test]
    fn add_segment_shares_the_end_point() {
        let mut chain = PiecewisePolygon::default();
        let old_last = chain.points()[3];
        chain.add_segment(&TopologyConfig::default());

        assert_eq!(chain.len(), 7);
        assert_eq!(chain.segment_count(), 2);
        assert_eq!(
            &chain.points()[3..],
            &[
                old_last,
                Point::new(5.0, 2.5),
                Point::new(6.0, 2.5),
                Point::new(7.0, 2.0)
            ]
        );

        let segment = chain.segment(1).unwrap();
        assert_eq!(segment.0.column(0).clone_owned(), old_last);
    }

    #[test]
    fn shared_points() {
        let mut chain = PiecewisePolygon::default();
        let config = TopologyConfig::default();
        chain.add_segment(&config);
        chain.add_segment(&config);

        let shared: Vec<usize> = (0..chain.len())
            .filter(|&i| chain.is_shared_point(i))
            .collect();
        assert_eq!(shared, vec![3, 6]);
        assert!(chain.is_endpoint(0));
        assert!(chain.is_endpoint(9));
        assert!(!chain.is_endpoint(3));
    }

    #[test]
    fn moving_a_shared_point_moves_both_segments() {
        let mut chain = PiecewisePolygon::default();
        chain.add_segment(&TopologyConfig::default());
        chain.move_point(3, Point::new(4.0, 0.0)).unwrap();

        let first = chain.segment(0).unwrap();
        let second = chain.segment(1).unwrap();
        assert_eq!(first.0.column(3).clone_owned(), Point::new(4.0, 0.0));
        assert_eq!(second.0.column(0).clone_owned(), Point::new(4.0, 0.0));
    }

    #[test]
    fn segment_out_of_range() {
        let chain = PiecewisePolygon::default();
        assert!(matches!(
            chain.segment(1),
            Err(BezierError::IndexOutOfRange { index: 1, len: 1, .. })
        ));
        assert!(chain.clone().move_point(4, Point::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn conversions() {
        let chain = PiecewisePolygon::try_from(ControlPolygon::default()).unwrap();
        assert_eq!(chain.segment_count(), 1);
        assert!(PiecewisePolygon::try_from(line()).is_err());

        let polygon = ControlPolygon::from(chain);
        assert_eq!(polygon.degree(), 3);
    }
}
