// Domain layer: example metadata and the ports the examples are written against.

pub mod model;
pub mod ports;
