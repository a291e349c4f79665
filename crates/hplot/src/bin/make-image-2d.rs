//! Read "x y" points from stdin and draw them as a connected scatter path

use anyhow::Result;
use clap::Parser;
use hplot::PlanarArgs;

fn main() -> Result<()> {
    let args = PlanarArgs::parse();
    hplot::run_planar(&args)
}
