//! Figure rendering trait and the planar and spatial renderers

use crate::color::parse_color;
use crate::geometry::{planar_geometry, spatial_geometry};
use crate::types::{Geometry, PointSequence};
use hplot_common::Result;
use hplot_config::RenderConfig;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::{debug, info, warn};

/// RGB pixels of a rendered figure, row-major, 3 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RenderedImage {
    /// Color of the pixel at (`x`, `y`)
    pub fn pixel(&self, x: u32, y: u32) -> Option<RGBColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        let px = self.pixels.get(offset..offset + 3)?;
        Some(RGBColor(px[0], px[1], px[2]))
    }
}

/// Trait for drawing a point path figure onto any plotters backend
pub trait PathRenderer {
    /// Rendering settings
    fn config(&self) -> &RenderConfig;

    /// Draw the whole figure onto `root`
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static;

    /// Render the figure to an image file; format follows the extension
    fn render_to_file(&self, path: &Path) -> Result<()> {
        let config = self.config();
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        self.draw(&root)?;
        root.present()?;

        info!("Rendered figure to {}", path.display());
        Ok(())
    }

    /// Render the figure into an in-memory RGB buffer
    fn render_to_buffer(&self) -> Result<RenderedImage> {
        let config = self.config();
        let (width, height) = (config.width, config.height);
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            self.draw(&root)?;
            root.present()?;
        }

        debug!(width, height, "Rendered figure to buffer");
        Ok(RenderedImage {
            width,
            height,
            pixels,
        })
    }

    /// Background color from the config, white if unparsable
    fn background_color(&self) -> RGBColor {
        parse_color(&self.config().background_color).unwrap_or(WHITE)
    }

    /// Outer margin in pixels
    fn margin(&self) -> u32 {
        if self.config().tight_layout {
            8
        } else {
            30
        }
    }
}

/// Axis range covering `values` with 5% padding; degenerate spans widen to ±1
fn padded_range(values: &[i64]) -> Range<f64> {
    let bounds = values
        .iter()
        .fold(None, |acc: Option<(i64, i64)>, &v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        });
    match bounds {
        None => 0.0..1.0,
        Some((min, max)) if min == max => (min as f64 - 1.0)..(max as f64 + 1.0),
        Some((min, max)) => {
            let (min, max) = (min as f64, max as f64);
            let padding = (max - min) * 0.05;
            (min - padding)..(max + padding)
        }
    }
}

fn axis_ranges<const N: usize>(points: &PointSequence<N>) -> [Range<f64>; N] {
    points.axes().map(|values| padded_range(&values))
}

/// Connected scatter path in the plane
pub struct PlanarRenderer {
    config: RenderConfig,
    geometry: Geometry<2>,
    ranges: [Range<f64>; 2],
}

impl PlanarRenderer {
    pub fn new(points: &PointSequence<2>, config: RenderConfig) -> Self {
        if points.is_empty() {
            warn!("No points to plot, drawing empty axes");
        }
        let geometry = planar_geometry(points, config.segment_coloring);
        debug!(
            segments = geometry.segments.len(),
            markers = geometry.markers.len(),
            "Planar geometry prepared"
        );
        Self {
            ranges: axis_ranges(points),
            geometry,
            config,
        }
    }

    pub fn geometry(&self) -> &Geometry<2> {
        &self.geometry
    }
}

impl PathRenderer for PlanarRenderer {
    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        root.fill(&self.background_color())?;

        let font = (self.config.font_family.as_str(), self.config.font_size as f64);
        let mut builder = ChartBuilder::on(root);
        builder.margin(self.margin());
        if let Some(title) = &self.config.title {
            builder.caption(title, (self.config.font_family.as_str(), self.config.font_size as f64 * 1.5));
        }
        if self.config.show_axes {
            builder
                .x_label_area_size(self.config.font_size * 3)
                .y_label_area_size(self.config.font_size * 4);
        }

        let [x_range, y_range] = self.ranges.clone();
        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

        if self.config.show_axes {
            chart
                .configure_mesh()
                .disable_mesh()
                .label_style(font)
                .draw()?;
        }

        let line_width = self.config.line_width;
        for segment in &self.geometry.segments {
            chart.draw_series(LineSeries::new(
                segment.path.iter().map(|p| {
                    let [x, y] = p.to_f64();
                    (x, y)
                }),
                segment.color.stroke_width(line_width),
            ))?;
        }

        let marker_color = self.geometry.marker_color;
        let marker_size = self.config.marker_size as i32;
        chart.draw_series(self.geometry.markers.iter().map(|p| {
            let [x, y] = p.to_f64();
            Circle::new((x, y), marker_size, marker_color.filled())
        }))?;

        Ok(())
    }
}

/// Connected path in space, drawn as short strided segments
pub struct SpatialRenderer {
    config: RenderConfig,
    geometry: Geometry<3>,
    ranges: [Range<f64>; 3],
}

impl SpatialRenderer {
    pub fn new(points: &PointSequence<3>, config: RenderConfig) -> Self {
        if points.is_empty() {
            warn!("No points to plot, drawing empty axes");
        }
        let geometry = spatial_geometry(points, config.stride, config.segment_coloring);
        debug!(
            segments = geometry.segments.len(),
            stride = config.stride,
            "Spatial geometry prepared"
        );
        Self {
            ranges: axis_ranges(points),
            geometry,
            config,
        }
    }

    pub fn geometry(&self) -> &Geometry<3> {
        &self.geometry
    }
}

impl PathRenderer for SpatialRenderer {
    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        root.fill(&self.background_color())?;

        let mut builder = ChartBuilder::on(root);
        builder.margin(self.margin());
        if let Some(title) = &self.config.title {
            builder.caption(title, (self.config.font_family.as_str(), self.config.font_size as f64 * 1.5));
        }

        let [x_range, y_range, z_range] = self.ranges.clone();
        let mut chart = builder.build_cartesian_3d(x_range, y_range, z_range)?;
        chart.with_projection(|mut pb| {
            pb.yaw = 0.6;
            pb.pitch = 0.4;
            pb.scale = if self.config.tight_layout { 0.9 } else { 0.75 };
            pb.into_matrix()
        });

        if self.config.show_axes {
            chart
                .configure_axes()
                .label_style((self.config.font_family.as_str(), self.config.font_size as f64))
                .draw()?;
        }

        let line_width = self.config.line_width;
        for segment in &self.geometry.segments {
            chart.draw_series(LineSeries::new(
                segment.path.iter().map(|p| {
                    let [x, y, z] = p.to_f64();
                    (x, y, z)
                }),
                segment.color.stroke_width(line_width),
            ))?;
        }

        Ok(())
    }
}
