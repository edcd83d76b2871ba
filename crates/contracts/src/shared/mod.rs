pub mod map_marker;

pub use map_marker::MapMarker;
