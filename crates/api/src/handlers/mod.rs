pub mod dns_query;
pub mod health;
pub mod mappings;

pub use dns_query::dns_query;
pub use health::health_check;
pub use mappings::get_mappings;
