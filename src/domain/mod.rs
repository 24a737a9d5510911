// Domain layer: value types shared by the engines and controllers, plus the ports they talk through.

pub mod model;
pub mod ports;
