use once_cell::sync::Lazy;
use piecewise_bezier::report::sine_control_points;
use piecewise_bezier::{ControlPolygon, PiecewisePolygon, Point};

/// 19 points along a sine wave, i.e. one degree 18 curve or 6 cubic segments
pub static POINTS: Lazy<Vec<Point>> = Lazy::new(|| sine_control_points(19));

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);
pub struct Curves {
    pub single: ControlPolygon,
    pub chain: PiecewisePolygon,
    pub cubic: ControlPolygon,
}
impl Curves {
    pub fn new() -> Curves {
        Curves {
            single: ControlPolygon::new(POINTS.iter().copied()).unwrap(),
            chain: PiecewisePolygon::new(POINTS.iter().copied()).unwrap(),
            cubic: ControlPolygon::default(),
        }
    }
}
