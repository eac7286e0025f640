// Domain layer: the business record and the seams to external systems.

pub mod model;
pub mod ports;
