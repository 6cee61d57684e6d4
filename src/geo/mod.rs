use num_traits::Float;


/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;


/// Geographic coordinate in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

impl Coord {

    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Great-circle distance to another coordinate, in kilometers
    pub fn distance_to(&self, other: &Coord) -> f64 {
        haversine(self.lon, self.lat, other.lon, other.lat)
    }
}


/// Great-circle distance between two (longitude, latitude) pairs in degrees
/// Uses the haversine formula over a spherical earth
/// https://en.wikipedia.org/wiki/Haversine_formula
///
/// Symmetric and satisfies the triangle inequality, so it doubles as an
/// admissible lower bound on any path cost between the two points
pub fn haversine<T>(lon1: T, lat1: T, lon2: T, lat2: T) -> T
where
    T: Float,
    {
    let radius = T::from(EARTH_RADIUS_KM).unwrap(); // should not fail
    let two = T::from(2.0).unwrap();

    let dlon = (lon2 - lon1).to_radians();
    let dlat = (lat2 - lat1).to_radians();

    let a = (dlat / two).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / two).sin().powi(2);
    let c = two * a.sqrt().atan2((T::one() - a).sqrt());

    radius * c
}
