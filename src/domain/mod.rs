// Domain layer: DTOs mirroring the Site24x7 JSON schema, lookup constants and
// the ports the core services depend on.

pub mod constants;
pub mod model;
pub mod ports;
