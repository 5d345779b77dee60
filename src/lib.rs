#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod experiment;
pub mod nbezier;
pub mod polygon;
pub mod report;
pub mod sample;

pub use crate::config::{BenchmarkConfig, TopologyConfig};
pub use crate::error::{BezierError, Result};
pub use crate::nbezier::{BezierCurve, CubicCurve, DynamicCurve};
pub use crate::polygon::{ControlPolygon, PiecewisePolygon};
pub use crate::sample::{sample_curve, sample_piecewise};

/// A point in the plane
pub type Point = nalgebra::Vector2<f64>;
