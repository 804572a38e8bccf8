pub mod campus_core;
pub mod frontend;

pub use frontend::server::start_server;
