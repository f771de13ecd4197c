//! Cartesian ↔ Spherical coordinate conversion.

use std::f64::consts::PI;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in radians, range [0, 2π).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_rad: f64,
    /// Latitude in radians, range [-π/2, π/2].
    /// Elevation above the x-y plane.
    pub lat_rad: f64,
    /// Distance from origin in km.
    pub distance_km: f64,
}

impl SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    pub fn lon_deg(&self) -> f64 {
        self.lon_rad.to_degrees()
    }

    /// Latitude in degrees, range [-90, 90].
    pub fn lat_deg(&self) -> f64 {
        self.lat_rad.to_degrees()
    }
}

/// Convert Cartesian `[x, y, z]` (km) to spherical coordinates.
///
/// Longitude is measured in the x-y plane from +x toward +y.
/// Latitude is elevation above the x-y plane.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let x = xyz[0];
    let y = xyz[1];
    let z = xyz[2];

    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_rad: 0.0,
            lat_rad: 0.0,
            distance_km: 0.0,
        };
    }

    let lon = y.atan2(x);
    let lat = (z / r).asin();

    SphericalCoords {
        lon_rad: if lon < 0.0 { lon + 2.0 * PI } else { lon },
        lat_rad: lat,
        distance_km: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]` (km).
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let cos_lat = s.lat_rad.cos();
    [
        s.distance_km * cos_lat * s.lon_rad.cos(),
        s.distance_km * cos_lat * s.lon_rad.sin(),
        s.distance_km * s.lat_rad.sin(),
    ]
}

/// Spherical coordinates plus their time derivatives.
///
/// The ephemeris adapter needs longitude *speed* (for stations and velocity
/// extrema) alongside the longitude itself, and both come from the same
/// Cartesian position+velocity state vector, so they are computed together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalState {
    /// Instantaneous position.
    pub coords: SphericalCoords,
    /// d(longitude)/dt, in radians per day.
    pub lon_rate_rad_per_day: f64,
    /// d(latitude)/dt, in radians per day.
    pub lat_rate_rad_per_day: f64,
    /// d(distance)/dt, in km per day.
    pub distance_rate_km_per_day: f64,
}

/// Convert a Cartesian position `xyz` (km) and velocity `v_xyz` (km/day) to
/// a spherical position with rates.
///
/// Degenerate at the origin and at the poles (`rho == 0`), where the
/// longitude rate is undefined; both return a rate of `0.0` rather than
/// `NaN` since no body in this engine's scope ever sits exactly there.
pub fn cartesian_state_to_spherical_state(xyz: &[f64; 3], v_xyz: &[f64; 3]) -> SphericalState {
    let coords = cartesian_to_spherical(xyz);
    let [x, y, z] = *xyz;
    let [vx, vy, vz] = *v_xyz;

    let rho_sq = x * x + y * y;
    let r = coords.distance_km;

    if r == 0.0 || rho_sq == 0.0 {
        return SphericalState {
            coords,
            lon_rate_rad_per_day: 0.0,
            lat_rate_rad_per_day: 0.0,
            distance_rate_km_per_day: 0.0,
        };
    }

    let rho = rho_sq.sqrt();
    let lon_rate = (x * vy - y * vx) / rho_sq;
    let lat_rate = (vz * rho_sq - z * (x * vx + y * vy)) / (r * r * rho);
    let dist_rate = (x * vx + y * vy + z * vz) / r;

    SphericalState {
        coords,
        lon_rate_rad_per_day: lon_rate,
        lat_rate_rad_per_day: lat_rate,
        distance_rate_km_per_day: dist_rate,
    }
}
