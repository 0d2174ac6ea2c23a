pub mod viewer_config;
