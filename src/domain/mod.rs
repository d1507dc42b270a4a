// Domain layer: shared models and the seams between core and hosts.

pub mod model;
pub mod ports;
