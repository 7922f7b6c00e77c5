pub mod common;
pub mod configs;
pub mod media;
pub mod navigation;
pub mod server;
pub mod transport;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
