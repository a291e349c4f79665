//! Glue between the parsed command line and the hplot-graphs library

use crate::cli::{CommonArgs, HilbertArgs, PlanarArgs, SpatialArgs, ViewerArgs};
use anyhow::{anyhow, Context, Result};
use hplot_config::{Config, ConfigLoader};
use hplot_graphs::hilbert::rng_from_config;
use hplot_graphs::{
    read_points, write_points, HilbertCurve, PathRenderer, PlanarRenderer, PointSequence,
    ReadOptions, SpatialRenderer,
};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Load configuration, overlay command line flags and start logging
///
/// The merged result is validated again since flags bypass the loader.
pub fn prepare(common: &CommonArgs, overlay: impl FnOnce(&mut Config)) -> Result<Config> {
    let mut config =
        ConfigLoader::load_optional(common.config.as_ref()).context("Failed to load configuration")?;
    overlay(&mut config);
    config
        .validate_all()
        .context("Invalid configuration after applying command line flags")?;

    hplot_common::init_logging((&config.logging).into())
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;
    debug!(?config, "Configuration loaded");
    Ok(config)
}

/// `make-image-2d`
pub fn run_planar(args: &PlanarArgs) -> Result<()> {
    let config = prepare(&args.viewer.common, |config| args.viewer.apply(config))?;
    let points = read_stdin::<2>(&config, &args.viewer)?;

    let renderer = PlanarRenderer::new(&points, config.render.clone());
    present(&renderer, &args.viewer, "make-image-2d")
}

/// `make-image-3d`
pub fn run_spatial(args: &SpatialArgs) -> Result<()> {
    let config = prepare(&args.viewer.common, |config| args.apply(config))?;
    let points = read_stdin::<3>(&config, &args.viewer)?;

    let renderer = SpatialRenderer::new(&points, config.render.clone());
    present(&renderer, &args.viewer, "make-image-3d")
}

/// `hilbert-order`
pub fn run_hilbert(args: &HilbertArgs) -> Result<()> {
    let config = prepare(&args.common, |config| args.apply(config))?;
    let stdout = io::stdout();
    generate_hilbert(&config, stdout.lock())
}

/// Generate the configured Hilbert-ordered point set and write it to `out`
pub fn generate_hilbert<W: Write>(config: &Config, out: W) -> Result<()> {
    let settings = &config.hilbert;
    let curve = HilbertCurve::new(settings.dims, settings.order)?;
    let mut rng = rng_from_config(settings);
    info!(
        dims = settings.dims,
        order = settings.order,
        npoints = settings.npoints,
        "Generating Hilbert-ordered points"
    );

    match settings.dims {
        2 => write_points(&curve.generate::<2>(settings.npoints, &mut rng)?, out)?,
        3 => write_points(&curve.generate::<3>(settings.npoints, &mut rng)?, out)?,
        dims => return Err(anyhow!("Unsupported number of dimensions: {}", dims)),
    }
    Ok(())
}

fn read_stdin<const N: usize>(config: &Config, args: &ViewerArgs) -> Result<PointSequence<N>> {
    let options = ReadOptions::from(&config.input);
    let points = read_points::<N, _>(io::stdin().lock(), &options)
        .context("Failed to read points from standard input")?;

    if args.print_points {
        print_points(&points, io::stdout().lock()).context("Failed to print points")?;
    }
    Ok(points)
}

/// Dump the sequence as a JSON array of coordinate arrays
pub fn print_points<const N: usize, W: Write>(
    points: &PointSequence<N>,
    mut out: W,
) -> hplot_common::Result<()> {
    serde_json::to_writer(&mut out, points)?;
    writeln!(out)?;
    Ok(())
}

fn present<R: PathRenderer>(renderer: &R, args: &ViewerArgs, tool: &str) -> Result<()> {
    match &args.output {
        Some(path) => save(renderer, path),
        None => {
            let title = renderer.config().title.as_deref().unwrap_or(tool);
            show(renderer, title)
        }
    }
}

fn save<R: PathRenderer>(renderer: &R, path: &Path) -> Result<()> {
    renderer
        .render_to_file(path)
        .with_context(|| format!("Failed to write figure to {}", path.display()))
}

#[cfg(feature = "viewer")]
fn show<R: PathRenderer>(renderer: &R, title: &str) -> Result<()> {
    let image = renderer.render_to_buffer().context("Failed to render figure")?;
    hplot_graphs::show_image(title, image).context("Failed to display figure")
}

#[cfg(not(feature = "viewer"))]
fn show<R: PathRenderer>(_renderer: &R, _title: &str) -> Result<()> {
    anyhow::bail!("Built without the `viewer` feature; pass --output <path> to write a PNG")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hplot_common::HPlotError;
    use hplot_graphs::Point;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_points_as_json() {
        let points: PointSequence<2> = [[0, 0], [1, -1]].into_iter().map(Point::new).collect();
        let mut out = Vec::new();
        print_points(&points, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[[0,0],[1,-1]]\n");
    }

    #[test]
    fn test_print_points_write_failure_is_serialization_error() {
        let points: PointSequence<3> = [[1, 2, 3]].into_iter().map(Point::new).collect();
        let err = print_points(&points, ClosedPipe).unwrap_err();
        assert!(matches!(err, HPlotError::Serialization(_)));
    }

    #[test]
    fn test_generate_hilbert_defaults() {
        let mut config = Config::default();
        config.hilbert.seed = Some(11);

        let mut out = Vec::new();
        generate_hilbert(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 64);
        assert!(text
            .lines()
            .all(|line| line.split(' ').count() == 3 && !line.ends_with(' ')));
    }

    #[test]
    fn test_generate_hilbert_rejects_unsupported_dims() {
        let mut config = Config::default();
        config.hilbert.dims = 4;
        config.hilbert.npoints = 4;
        assert!(generate_hilbert(&config, io::sink()).is_err());
    }
}
