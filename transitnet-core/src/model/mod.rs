pub mod graph;
mod network_config;
mod network_error;
mod stop;
mod stop_visit;

pub use network_config::NetworkConfig;
pub use network_error::NetworkError;
pub use stop::Stop;
pub use stop_visit::StopVisit;
