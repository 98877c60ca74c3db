pub mod api;
pub mod config;
pub mod export;
pub mod graph;
pub mod input;
pub mod report;
pub mod table;
