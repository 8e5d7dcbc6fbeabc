//! Coordinate adapter between the host and foreign renderer conventions.
//!
//! The two engines agree on what the world looks like but not on how to
//! describe a camera: the host works in a projected coordinate system with
//! rotation in radians (counter-clockwise positive), while the foreign
//! renderer wants geographic lon/lat with a bearing in degrees
//! (clockwise positive) and counts zoom levels one coarser. Every camera
//! value crossing the bridge passes through exactly one of the conversions
//! in this module.
//!
//! All conversions are pure and stateless. Zoom conversion is an exact
//! additive offset so host → foreign → host round-trips are lossless.

mod types;

pub use types::{
    CoordError, LonLat, Point2, Projection, EARTH_RADIUS_M, FOREIGN_ZOOM_OFFSET, MAX_LAT, MIN_LAT,
};

use std::f64::consts::PI;

/// Converts a host projected point to the foreign renderer's lon/lat.
///
/// Fails only when the host projection is undefined or the point is not
/// finite; precision is otherwise bounded by the projection definition
/// itself.
#[inline]
pub fn to_foreign_coordinates(
    point: Point2,
    projection: Option<Projection>,
) -> Result<LonLat, CoordError> {
    let projection = projection.ok_or(CoordError::UndefinedProjection)?;

    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(CoordError::NonFiniteCoordinate {
            x: point.x,
            y: point.y,
        });
    }

    match projection {
        Projection::Geographic => Ok(LonLat::new(point.x, point.y)),
        Projection::WebMercator => {
            // Inverse spherical Web Mercator
            let lon = (point.x / EARTH_RADIUS_M).to_degrees();
            let lat = (2.0 * (point.y / EARTH_RADIUS_M).exp().atan() - PI / 2.0).to_degrees();
            Ok(LonLat::new(lon, lat))
        }
    }
}

/// Converts a host zoom level to the foreign renderer's zoom convention.
#[inline]
pub fn to_foreign_zoom(host_zoom: f64) -> f64 {
    host_zoom + FOREIGN_ZOOM_OFFSET
}

/// Converts a foreign zoom level back to the host convention.
///
/// Exact inverse of [`to_foreign_zoom`]: a zoom pushed to the foreign
/// renderer and read back is bit-identical.
#[inline]
pub fn to_host_zoom(foreign_zoom: f64) -> f64 {
    foreign_zoom - FOREIGN_ZOOM_OFFSET
}

/// Converts a host rotation to the foreign renderer's bearing.
///
/// The engines define positive rotation in opposite directions, so the
/// sign is inverted along with the radians-to-degrees conversion.
#[inline]
pub fn to_foreign_bearing(host_radians: f64) -> f64 {
    -host_radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_mercator_inverse_matches_known_point() {
        // Host center from the reference scenario (southern USA).
        let point = Point2::new(-10_997_148.0, 4_569_099.0);
        let lonlat = to_foreign_coordinates(point, Some(Projection::WebMercator)).unwrap();

        assert!(
            (lonlat.lon - (-98.78906130124426)).abs() < 1e-9,
            "Longitude should match Web Mercator inverse, got {}",
            lonlat.lon
        );
        assert!(
            (lonlat.lat - 37.92686191312037).abs() < 1e-9,
            "Latitude should match Web Mercator inverse, got {}",
            lonlat.lat
        );
    }

    #[test]
    fn test_web_mercator_origin_maps_to_null_island() {
        let lonlat =
            to_foreign_coordinates(Point2::new(0.0, 0.0), Some(Projection::WebMercator)).unwrap();
        assert!(lonlat.lon.abs() < 1e-12);
        assert!(lonlat.lat.abs() < 1e-12);
    }

    #[test]
    fn test_geographic_projection_is_identity() {
        let lonlat =
            to_foreign_coordinates(Point2::new(-0.1278, 51.5074), Some(Projection::Geographic))
                .unwrap();
        assert_eq!(lonlat, LonLat::new(-0.1278, 51.5074));
    }

    #[test]
    fn test_undefined_projection_is_rejected() {
        let result = to_foreign_coordinates(Point2::new(0.0, 0.0), None);
        assert_eq!(result.unwrap_err(), CoordError::UndefinedProjection);
    }

    #[test]
    fn test_non_finite_point_is_rejected() {
        let result =
            to_foreign_coordinates(Point2::new(f64::NAN, 0.0), Some(Projection::WebMercator));
        assert!(matches!(
            result.unwrap_err(),
            CoordError::NonFiniteCoordinate { .. }
        ));
    }

    #[test]
    fn test_foreign_zoom_is_one_level_coarser() {
        assert_eq!(to_foreign_zoom(4.0), 3.0);
        assert_eq!(to_foreign_zoom(0.0), -1.0);
    }

    #[test]
    fn test_zoom_round_trip_is_exact() {
        for zoom in [0.0, 1.0, 4.0, 11.5, 16.3, 22.0] {
            assert_eq!(to_host_zoom(to_foreign_zoom(zoom)), zoom);
        }
    }

    #[test]
    fn test_bearing_sign_is_inverted() {
        assert_eq!(to_foreign_bearing(PI / 2.0), -90.0);
        assert_eq!(to_foreign_bearing(-PI), 180.0);
        assert_eq!(to_foreign_bearing(0.0), 0.0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Largest Web Mercator northing, matches MAX_LAT.
        const MAX_MERCATOR_Y: f64 = 20_037_508.34;

        proptest! {
            #[test]
            fn test_zoom_round_trip_property(zoom in 0.0..24.0_f64) {
                // The offset is exactly representable, so the round trip
                // must be bit-exact for any realistic zoom level.
                prop_assert_eq!(to_host_zoom(to_foreign_zoom(zoom)), zoom);
            }

            #[test]
            fn test_mercator_inverse_stays_in_bounds(
                x in -20_037_508.34..20_037_508.34_f64,
                y in -MAX_MERCATOR_Y..MAX_MERCATOR_Y,
            ) {
                let lonlat = to_foreign_coordinates(
                    Point2::new(x, y),
                    Some(Projection::WebMercator),
                )?;

                prop_assert!(
                    lonlat.lon >= -180.0 && lonlat.lon <= 180.0,
                    "Longitude {} out of bounds",
                    lonlat.lon
                );
                prop_assert!(
                    lonlat.lat >= MIN_LAT && lonlat.lat <= MAX_LAT,
                    "Latitude {} out of bounds [{}, {}]",
                    lonlat.lat,
                    MIN_LAT,
                    MAX_LAT
                );
            }

            #[test]
            fn test_mercator_inverse_is_monotonic_in_x(
                x1 in -10_000_000.0..-1_000_000.0_f64,
                x2 in 0.0..10_000_000.0_f64,
                y in -5_000_000.0..5_000_000.0_f64,
            ) {
                let a = to_foreign_coordinates(Point2::new(x1, y), Some(Projection::WebMercator))?;
                let b = to_foreign_coordinates(Point2::new(x2, y), Some(Projection::WebMercator))?;
                prop_assert!(a.lon < b.lon, "Longitude not monotonic: {} >= {}", a.lon, b.lon);
            }

            #[test]
            fn test_bearing_negates_and_scales(radians in -10.0..10.0_f64) {
                let bearing = to_foreign_bearing(radians);
                prop_assert!((bearing + radians * 180.0 / PI).abs() < 1e-9);
            }
        }
    }
}
