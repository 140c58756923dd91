pub mod colors;
pub mod formatting;
pub mod number;
pub mod path;
pub mod table;

// Re-exports for the most commonly used helpers
pub use formatting::thousands;
pub use number::parse_number;
