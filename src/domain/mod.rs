// Domain layer: entities and ports. Nothing here touches the filesystem or
// knows about clap/toml; adapters and config implement the ports.

pub mod model;
pub mod ports;
