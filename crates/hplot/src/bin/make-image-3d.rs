//! Read "x y z" points from stdin and draw them as a path in space

use anyhow::Result;
use clap::Parser;
use hplot::SpatialArgs;

fn main() -> Result<()> {
    let args = SpatialArgs::parse();
    hplot::run_spatial(&args)
}
