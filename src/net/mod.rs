pub mod api;
pub mod fetch;
