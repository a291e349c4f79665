//! Path geometry derived from a point sequence

use crate::color::{cycle_color, segment_color};
use crate::types::{Geometry, PointSequence, Segment};
use hplot_config::SegmentColoring;

/// Segments joining point `i` to point `i + stride` through every point in
/// between, for `i` stepping by `stride`
pub fn path_segments<const N: usize>(
    points: &PointSequence<N>,
    stride: usize,
    coloring: SegmentColoring,
) -> Vec<Segment<N>> {
    let stride = stride.max(1);
    let count = points.segment_count(stride);
    let points = points.as_slice();

    (0..points.len().saturating_sub(stride))
        .step_by(stride)
        .enumerate()
        .map(|(index, start)| Segment {
            path: points[start..=start + stride].to_vec(),
            color: segment_color(coloring, index, count),
        })
        .collect()
}

/// Planar figure: one segment per consecutive pair plus a marker per point
pub fn planar_geometry(points: &PointSequence<2>, coloring: SegmentColoring) -> Geometry<2> {
    let segments = path_segments(points, 1, coloring);
    // Markers take the palette slot after the last segment
    let marker_color = cycle_color(segments.len());

    Geometry {
        segments,
        markers: points.as_slice().to_vec(),
        marker_color,
    }
}

/// Spatial figure: strided path segments, no markers
pub fn spatial_geometry(
    points: &PointSequence<3>,
    stride: usize,
    coloring: SegmentColoring,
) -> Geometry<3> {
    let segments = path_segments(points, stride, coloring);
    let marker_color = cycle_color(segments.len());

    Geometry {
        segments,
        markers: Vec::new(),
        marker_color,
    }
}
