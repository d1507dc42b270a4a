// Adapters layer: host-side input and output around the core.

pub mod input;
pub mod output;
