pub mod analyzers;
pub mod controller;
pub mod duration;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod parser;
pub mod trip;
