// Domain layer: team model and the ports the session depends on.

pub mod model;
pub mod ports;
