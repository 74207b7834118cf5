// Domain layer: the rental object model and its rules. No I/O in here.

pub mod agency;
pub mod model;
pub mod ports;
