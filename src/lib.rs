pub mod config;
pub mod logging;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
