mod http_gateway;
mod memory;

pub use http_gateway::HttpGateway;
pub use memory::InMemoryBackend;
