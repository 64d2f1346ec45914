pub mod bevy_interface;
pub mod config;
pub mod console_interface;
pub mod core;
pub mod models;
#[cfg(test)]
mod test;
