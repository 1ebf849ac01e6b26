pub mod launch_config;

pub use launch_config::*;
