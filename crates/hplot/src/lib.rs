//! # hplot
//!
//! Command line front end for the hplot tools: `make-image-2d` and
//! `make-image-3d` read integer points from stdin and draw them, and
//! `hilbert-order` produces Hilbert-ordered input for them.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;

pub use app::{generate_hilbert, prepare, print_points, run_hilbert, run_planar, run_spatial};
pub use cli::{CommonArgs, HilbertArgs, PlanarArgs, SpatialArgs, ViewerArgs};
