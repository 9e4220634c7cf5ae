// BokslDrop: 터미널 파일 선택 트레이
pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod system;
pub mod ui;
pub mod utils;
