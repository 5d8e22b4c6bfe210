//! Batch versions of the distance and destination calls, over whole sequences of points.
pub mod destination;
pub mod distance;
mod exec;

pub use destination::destination_batch;
pub use distance::{distance_batch, distance_matrix, distance_pairwise, BatchDistances};
pub use exec::CHUNK_LEN;
