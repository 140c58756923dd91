pub mod calculator;
pub mod console;
pub mod render;
pub mod session;
pub mod viewer;
