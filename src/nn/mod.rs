//! N-tuple value network.
//!
//! A linear value approximator: fixed geometric groups of cells
//! ("tuples") each index a small lookup table, and the position value
//! is the sum of the table entries. Training is an online TD-style
//! additive update spread uniformly across the active entries.

pub mod network;
pub mod tuples;

pub use network::NTupleNetwork;
pub use tuples::TupleSet;
