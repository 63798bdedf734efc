//! Nahtstelle zum Karten-SDK: Trait, Referenzkarte, Marker-Buchführung und Tap-Index.

pub mod memory;
pub mod registry;
pub mod spatial;
pub mod surface;

pub use memory::InMemoryMap;
pub use registry::{MarkerGroup, MarkerInfoTable, MarkerRegistry};
pub use spatial::{MarkerMatch, MarkerSpatialIndex};
pub use surface::{
    CameraPosition, CameraUpdate, MapError, MapSurface, MarkerHandle, MarkerIcon, MarkerOptions,
    PolylineHandle, PolylineOptions,
};
