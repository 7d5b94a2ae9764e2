pub mod config_file;
pub mod hwaddr;
pub mod platform_path;
