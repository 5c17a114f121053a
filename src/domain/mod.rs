// Domain layer: models, ports and the affiliation extractor. No I/O here.

pub mod model;
pub mod ports;
pub mod services;
