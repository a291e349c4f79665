//! Point input, path geometry, plotting and Hilbert ordering for hplot
//!
//! The viewers are two calls: [`read_points`] turns a line stream into a
//! [`PointSequence`], and a [`PathRenderer`] turns that sequence into pixels.

pub mod color;
pub mod geometry;
pub mod hilbert;
pub mod reader;
pub mod renderer;
pub mod types;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use hilbert::{write_points, HilbertCurve};
pub use reader::{parse_point, read_points, read_points_into, LineSource, ParseError, ParseErrorKind, ReadOptions};
pub use renderer::{PathRenderer, PlanarRenderer, RenderedImage, SpatialRenderer};
pub use types::*;
#[cfg(feature = "viewer")]
pub use viewer::show_image;
