// Domain layer: registry records, command results and the ports the engine talks through.

pub mod model;
pub mod ports;
