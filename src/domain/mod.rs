// Domain layer: plain data types and the ports (traits) adapters implement.

pub mod model;
pub mod ports;
