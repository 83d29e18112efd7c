pub mod gateway;
pub mod http;
pub mod memory;
pub mod options;
