//! Great-circle geometry and unit conversions

/// Mean Earth radius in kilometers (IUGG)
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine great-circle distance in kilometers.
///
/// Returns NaN when either target coordinate is NaN so an unknown aircraft
/// position propagates as "unknown distance" instead of a bogus number.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat2.is_nan() || lon2.is_nan() {
        return f64::NAN;
    }

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Initial great-circle bearing from point 1 to point 2, degrees in [0, 360).
///
/// NaN-propagating like `distance_km`.
pub fn bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat2.is_nan() || lon2.is_nan() {
        return f64::NAN;
    }

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

pub fn feet_to_meters(ft: f64) -> f64 {
    ft * 0.3048
}

pub fn knots_to_kmh(kn: f64) -> f64 {
    kn * 1.852
}
