pub mod app;
pub mod constants;
pub mod content;
pub mod error;
pub mod parallax;
pub mod pointer;
pub mod portfolio;
