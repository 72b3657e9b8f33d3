// Domain layer: models and ports. Concrete storage and configuration live under config/.

pub mod model;
pub mod ports;
