//! Built-in handlers: the document memory API and the echo endpoint.

pub mod echo;
pub mod memory;
