//! # region-overlay-types
//!
//! Core data types shared by the region overlay crate.
//!
//! - **Point types**: `LatLng`, `Category`, `Restroom` and the `MapPoint` trait
//! - **Config types**: `Granularity`
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use region_overlay_types::point::{Category, LatLng, MapPoint, Restroom};
//!
//! let restroom = Restroom::new(37.5, 127.0, Category::Unisex, "서울특별시 도봉구 상계로 1");
//! assert_eq!(restroom.position(), LatLng::new(37.5, 127.0));
//!
//! let coord: geo::Coord = restroom.position().into();
//! assert_eq!(coord.x, 127.0);
//! ```

pub mod config;
pub mod point;
