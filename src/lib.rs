pub mod configuration;
pub mod domain;
pub mod metrics_guide;
pub mod subscribe_client;
pub mod subscription_controller;
pub mod telemetry;
pub mod terminal_view;
pub mod utils;
