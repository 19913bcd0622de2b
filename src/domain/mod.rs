// Domain layer: entities and ports. No adapter code lives here.

pub mod model;
pub mod ports;
