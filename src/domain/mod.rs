// Domain layer: job model and the provider port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
