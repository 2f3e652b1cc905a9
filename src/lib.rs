pub mod codegen;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod sheet;
