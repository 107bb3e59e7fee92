// Domain layer: validated ticket values and ports (interfaces) for the two
// external collaborators. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
