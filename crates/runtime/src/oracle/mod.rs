//! Concrete oracle implementations backing a session.

mod map;

pub use map::FloorMap;
