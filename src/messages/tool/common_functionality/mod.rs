pub mod snapping;
