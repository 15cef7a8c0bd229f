// Domain layer: models, the failure policy and ports. No process or filesystem access here.

pub mod model;
pub mod policy;
pub mod ports;
