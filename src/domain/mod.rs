// Domain layer: wire records shared by every app, and the ports the client depends on.

pub mod model;
pub mod ports;
