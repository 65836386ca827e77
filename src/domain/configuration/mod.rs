pub mod generator_config;

pub use generator_config::{CONFIG_FILE, GeneratorConfig, parse_config_content};
