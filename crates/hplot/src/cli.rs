//! Command line arguments shared by the hplot binaries

use clap::{Args, Parser};
use hplot_config::{Config, MalformedPolicy, SegmentColoring};
use std::path::PathBuf;

/// Flags every tool accepts
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonArgs {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter, a level or `target=level` directives such as
    /// `hplot_graphs=debug`; `RUST_LOG` takes precedence
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl CommonArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

/// Flags of the two viewers
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the figure to this PNG file instead of opening a window
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip malformed lines with a warning instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Echo every accepted input line to stdout
    #[arg(long)]
    pub echo: bool,

    /// Print the parsed points as JSON to stdout before drawing
    #[arg(long)]
    pub print_points: bool,

    /// Color segments along the nipy_spectral color map
    #[arg(long)]
    pub colormap: bool,
}

impl ViewerArgs {
    /// Overlay the flags that were given on top of `config`
    pub fn apply(&self, config: &mut Config) {
        self.common.apply(config);
        if self.skip_malformed {
            config.input.malformed_policy = MalformedPolicy::SkipAndWarn;
        }
        if self.echo {
            config.input.echo = true;
        }
        if self.colormap {
            config.render.segment_coloring = SegmentColoring::ColorMap;
        }
    }
}

/// Read "x y" points from stdin and draw them as a connected scatter path
#[derive(Parser, Debug)]
#[command(name = "make-image-2d", author, version, about, long_about = None)]
pub struct PlanarArgs {
    #[command(flatten)]
    pub viewer: ViewerArgs,
}

/// Read "x y z" points from stdin and draw them as a path in space
#[derive(Parser, Debug)]
#[command(name = "make-image-3d", author, version, about, long_about = None)]
pub struct SpatialArgs {
    #[command(flatten)]
    pub viewer: ViewerArgs,

    /// Index distance between the two ends of each drawn segment
    #[arg(long)]
    pub stride: Option<usize>,
}

impl SpatialArgs {
    pub fn apply(&self, config: &mut Config) {
        self.viewer.apply(config);
        if let Some(stride) = self.stride {
            config.render.stride = stride;
        }
    }
}

/// Print random lattice points sorted along a Hilbert curve
#[derive(Parser, Debug)]
#[command(name = "hilbert-order", author, version, about, long_about = None)]
pub struct HilbertArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of coordinate axes (2 or 3)
    #[arg(short, long)]
    pub dims: Option<usize>,

    /// Bits per axis; coordinates lie in [0, 2^order)
    #[arg(short = 'O', long)]
    pub order: Option<u32>,

    /// Number of points to generate
    #[arg(short, long)]
    pub npoints: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl HilbertArgs {
    pub fn apply(&self, config: &mut Config) {
        self.common.apply(config);
        let hilbert = &mut config.hilbert;
        if let Some(dims) = self.dims {
            hilbert.dims = dims;
        }
        if let Some(order) = self.order {
            hilbert.order = order;
        }
        if let Some(npoints) = self.npoints {
            hilbert.npoints = npoints;
        }
        if self.seed.is_some() {
            hilbert.seed = self.seed;
        }
    }
}
