pub mod config;
pub mod logging;

pub mod controller;
pub mod export;
pub mod forms;
pub mod health;
pub mod multipart;
pub mod outcome;
pub mod sanitize;
pub mod staging;
pub mod transcript;
pub mod transport;
