pub mod config;
pub mod engine;
pub mod model;
pub mod nav;
pub mod net;
pub mod render;
