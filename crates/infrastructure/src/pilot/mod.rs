pub mod client;

pub use client::PilotClient;
