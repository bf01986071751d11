pub mod chatbot;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod sentiment;

#[cfg(test)]
mod config_tests;

pub use chatbot::Chatbot;
pub use config::AppConfig;
pub use errors::*;
pub use sentiment::SentimentAnalyzer;
