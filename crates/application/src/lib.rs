//! Arpscope Application Layer
pub mod ports;
pub mod printers;
pub mod services;
pub mod use_cases;
