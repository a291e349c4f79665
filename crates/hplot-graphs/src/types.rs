//! Point and path types

use plotters::style::RGBColor;
use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;

/// Fixed-arity integer coordinate tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<const N: usize>(pub [i64; N]);

impl<const N: usize> Point<N> {
    pub fn new(coords: [i64; N]) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[i64; N] {
        &self.0
    }

    /// Coordinates as plotting values
    pub fn to_f64(&self) -> [f64; N] {
        self.0.map(|c| c as f64)
    }
}

impl<const N: usize> From<[i64; N]> for Point<N> {
    fn from(coords: [i64; N]) -> Self {
        Self(coords)
    }
}

/// Formats as the whitespace-separated line the readers accept
impl<const N: usize> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl<const N: usize> Serialize for Point<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for c in &self.0 {
            tuple.serialize_element(c)?;
        }
        tuple.end()
    }
}

/// Insertion-ordered points read in one run
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct PointSequence<const N: usize> {
    points: Vec<Point<N>>,
}

impl<const N: usize> PointSequence<N> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point after all previously pushed ones
    pub fn push(&mut self, point: Point<N>) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<N>> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point<N>] {
        &self.points
    }

    /// One coordinate list per axis, in input order
    pub fn axes(&self) -> [Vec<i64>; N] {
        std::array::from_fn(|axis| self.points.iter().map(|p| p.0[axis]).collect())
    }

    /// Number of path segments when joining point `i` to `i + stride`
    pub fn segment_count(&self, stride: usize) -> usize {
        let stride = stride.max(1);
        let len = self.points.len();
        if len <= stride {
            0
        } else {
            (len - stride).div_ceil(stride)
        }
    }
}

impl<const N: usize> FromIterator<Point<N>> for PointSequence<N> {
    fn from_iter<I: IntoIterator<Item = Point<N>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a, const N: usize> IntoIterator for &'a PointSequence<N> {
    type Item = &'a Point<N>;
    type IntoIter = std::slice::Iter<'a, Point<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Connected run of points drawn with one color
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<const N: usize> {
    pub path: Vec<Point<N>>,
    pub color: RGBColor,
}

/// Everything a renderer draws, computed before any drawing happens
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry<const N: usize> {
    pub segments: Vec<Segment<N>>,
    pub markers: Vec<Point<N>>,
    pub marker_color: RGBColor,
}
