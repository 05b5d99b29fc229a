/// Network adapters for external API calls
mod nexon_client;

pub use nexon_client::NexonOpenApiClient;
