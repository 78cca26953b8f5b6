pub mod hosts_file;

pub use hosts_file::HostsFileSink;
