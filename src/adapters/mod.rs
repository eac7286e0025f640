// Adapters layer: concrete clients for external systems.

pub mod firecrawl;

pub use firecrawl::FirecrawlClient;
