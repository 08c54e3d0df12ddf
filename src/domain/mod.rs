// Domain layer: vehicle state, drive outcomes and the ports the core writes through.

pub mod model;
pub mod ports;
