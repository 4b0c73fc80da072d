//! Polyline representation and codec for route geometries.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences, plus the compact encoded-polyline codec used by
//! the directions provider. Internally routes are always the decoded
//! form; encoding happens at API boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineError {
    /// The string ended in the middle of a coordinate group.
    UnexpectedEnd { offset: usize },
    /// A byte outside the encoding alphabet, or a continuation run too
    /// long to fit a coordinate delta.
    InvalidByte { offset: usize, byte: u8 },
}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolylineError::UnexpectedEnd { offset } => {
                write!(f, "encoded polyline truncated at byte {}", offset)
            }
            PolylineError::InvalidByte { offset, byte } => {
                write!(f, "invalid polyline byte 0x{:02x} at offset {}", byte, offset)
            }
        }
    }
}

impl std::error::Error for PolylineError {}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Decodes a polyline in the Google encoded-polyline format.
    ///
    /// Coordinates are accumulated as running deltas in 1e-5 degree
    /// units, each delta zig-zag encoded as 5-bit groups offset by 63
    /// with 0x20 as the continuation bit. Malformed input fails with a
    /// [`PolylineError`] rather than decoding a partial route.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        let bytes = encoded.as_bytes();
        let mut cursor = 0;
        let mut lat = 0i32;
        let mut lng = 0i32;
        let mut points = Vec::new();

        while cursor < bytes.len() {
            lat += next_delta(bytes, &mut cursor)?;
            lng += next_delta(bytes, &mut cursor)?;
            points.push(Point::new(lat as f64 * 1e-5, lng as f64 * 1e-5));
        }

        Ok(Self { points })
    }

    /// Encodes the points back into the compact polyline format.
    ///
    /// Inverse of [`Polyline::decode`] up to the 1e-5 coordinate
    /// resolution of the format.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        let mut prev_lat = 0i32;
        let mut prev_lng = 0i32;

        for point in &self.points {
            let lat = (point.latitude * 1e5).round() as i32;
            let lng = (point.longitude * 1e5).round() as i32;
            push_delta(lat - prev_lat, &mut out);
            push_delta(lng - prev_lng, &mut out);
            prev_lat = lat;
            prev_lng = lng;
        }

        out
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Reads one zig-zag encoded delta starting at `cursor`.
fn next_delta(bytes: &[u8], cursor: &mut usize) -> Result<i32, PolylineError> {
    let mut value: u32 = 0;
    let mut shift = 0;

    loop {
        let offset = *cursor;
        let byte = *bytes
            .get(offset)
            .ok_or(PolylineError::UnexpectedEnd { offset })?;
        let digit = match byte.checked_sub(63) {
            Some(digit) if digit < 64 && shift <= 30 => digit,
            _ => return Err(PolylineError::InvalidByte { offset, byte }),
        };
        *cursor += 1;

        value |= ((digit & 0x1f) as u32) << shift;
        if digit & 0x20 == 0 {
            break;
        }
        shift += 5;
    }

    let value = value as i32;
    Ok(if value & 1 == 1 {
        !(value >> 1)
    } else {
        value >> 1
    })
}

/// Appends one delta in the 5-bit group encoding.
fn push_delta(delta: i32, out: &mut String) {
    let mut value = delta << 1;
    if delta < 0 {
        value = !value;
    }
    let mut value = value as u32;

    while value >= 0x20 {
        out.push((((value & 0x1f) | 0x20) + 63) as u8 as char);
        value >>= 5;
    }
    out.push((value + 63) as u8 as char);
}
