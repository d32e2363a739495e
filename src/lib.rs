pub mod config;
pub mod events;
pub mod grid;
pub mod life;
pub mod render;

/// Signed cell coordinate. Neighbor lookups step past the grid edges, so
/// coordinates are signed and out-of-range reads come back dead.
pub type Coord = i32;
