// Domain layer: data shapes and the ports to the host display surface.

pub mod model;
pub mod ports;
