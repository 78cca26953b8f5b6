pub mod pilot;
pub mod store;
pub mod system;
