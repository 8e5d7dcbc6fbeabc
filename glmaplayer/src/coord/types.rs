//! Core types and constants for the coordinate adapter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Spherical earth radius in meters used by the Web Mercator projection.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Northernmost latitude representable in Web Mercator, in degrees.
pub const MAX_LAT: f64 = 85.051_128_78;

/// Southernmost latitude representable in Web Mercator, in degrees.
pub const MIN_LAT: f64 = -MAX_LAT;

/// Fixed zoom-convention offset between the host and the foreign renderer.
///
/// The foreign renderer counts zoom levels one coarser than the host, so the
/// offset is applied additively whenever a zoom crosses the adapter boundary.
pub const FOREIGN_ZOOM_OFFSET: f64 = -1.0;

/// A point in the host's projected coordinate system.
///
/// Units depend on the host projection: meters for Web Mercator, degrees
/// for the geographic projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    /// Easting (X axis, increasing to the east).
    pub x: f64,
    /// Northing (Y axis, increasing to the north).
    pub y: f64,
}

impl Point2 {
    /// Create a new projected point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A geographic coordinate in the foreign renderer's convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LonLat {
    /// Longitude in degrees, negative west of the prime meridian.
    pub lon: f64,
    /// Latitude in degrees, negative south of the equator.
    pub lat: f64,
}

impl LonLat {
    /// Create a new geographic coordinate.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// The host map's projection definition.
///
/// The adapter only needs the inverse mapping (projected point to lon/lat);
/// forward projection is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Spherical Web Mercator (EPSG:3857), coordinates in meters.
    WebMercator,
    /// Plain geographic coordinates (EPSG:4326), coordinates in degrees.
    Geographic,
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordError {
    /// The host view carries no projection definition.
    #[error("host projection is undefined")]
    UndefinedProjection,

    /// The projected point contains a NaN or infinite component.
    #[error("projected coordinate is not finite: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
}
