pub mod spatial;
mod transit_edges;
pub mod travel_time;
mod walk_edges;

pub use transit_edges::derive_transit_edges;
pub use walk_edges::derive_walk_edges;
