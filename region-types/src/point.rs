use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in degrees.
///
/// Region boundaries are computed in this flat lat/lng space without any
/// projection correction. Conversions to `geo` types map longitude to `x`
/// and latitude to `y`.
///
/// # Examples
///
/// ```
/// use region_overlay_types::point::LatLng;
///
/// let seoul = LatLng::new(37.5665, 126.9780);
/// let point: geo::Point = seoul.into();
/// assert_eq!(point.x(), 126.9780);
/// assert_eq!(point.y(), 37.5665);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar distance to another coordinate, in degrees.
    #[inline]
    pub fn planar_distance(&self, other: &LatLng) -> f64 {
        (other.lat - self.lat).hypot(other.lng - self.lng)
    }

    /// Midpoint between two coordinates in the flat lat/lng plane.
    #[inline]
    pub fn midpoint(&self, other: &LatLng) -> LatLng {
        LatLng {
            lat: (self.lat + other.lat) / 2.0,
            lng: (self.lng + other.lng) / 2.0,
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

impl From<LatLng> for geo::Coord<f64> {
    fn from(value: LatLng) -> Self {
        geo::coord! { x: value.lng, y: value.lat }
    }
}

impl From<geo::Coord<f64>> for LatLng {
    fn from(value: geo::Coord<f64>) -> Self {
        LatLng::new(value.y, value.x)
    }
}

impl From<LatLng> for geo::Point<f64> {
    fn from(value: LatLng) -> Self {
        geo::Point::new(value.lng, value.lat)
    }
}

impl From<geo::Point<f64>> for LatLng {
    fn from(value: geo::Point<f64>) -> Self {
        LatLng::new(value.y(), value.x())
    }
}

/// Restroom category. Every point belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Male,
    Female,
    Unisex,
}

/// Read-only view of a map point that can be grouped into regions.
///
/// Callers keep their own record type; groups hold `&T` references to the
/// supplied records rather than copies.
pub trait MapPoint {
    fn lat(&self) -> f64;

    fn lng(&self) -> f64;

    fn category(&self) -> Category;

    /// Free-text street address, whitespace separated.
    fn address(&self) -> &str;

    fn position(&self) -> LatLng {
        LatLng::new(self.lat(), self.lng())
    }
}

impl<T: MapPoint + ?Sized> MapPoint for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }

    fn category(&self) -> Category {
        (**self).category()
    }

    fn address(&self) -> &str {
        (**self).address()
    }
}

/// A public restroom as listed on the map.
///
/// # Examples
///
/// ```
/// use region_overlay_types::point::{Category, MapPoint, Restroom};
///
/// let json = r#"{"lat":37.5,"lng":127.0,"category":"FEMALE","address":"경기도 수원시 팔달구"}"#;
/// let restroom: Restroom = serde_json::from_str(json).unwrap();
/// assert_eq!(restroom.category(), Category::Female);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restroom {
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
    pub address: String,
}

impl Restroom {
    pub fn new(lat: f64, lng: f64, category: Category, address: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            category,
            address: address.into(),
        }
    }
}

impl MapPoint for Restroom {
    #[inline]
    fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    fn lng(&self) -> f64 {
        self.lng
    }

    #[inline]
    fn category(&self) -> Category {
        self.category
    }

    #[inline]
    fn address(&self) -> &str {
        &self.address
    }
}
