//! Print random lattice points sorted along a Hilbert curve

use anyhow::Result;
use clap::Parser;
use hplot::HilbertArgs;
use tracing::error;

fn main() -> Result<()> {
    let args = HilbertArgs::parse();
    if let Err(e) = hplot::run_hilbert(&args) {
        error!("hilbert-order failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
