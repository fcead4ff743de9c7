pub mod app;
pub mod data;
pub mod prompt;
pub mod report;
pub mod stats;

// Re-exports for library users
pub use data::filter::TripFilter;
pub use data::loader::{load_city, LoadError};
pub use data::model::{City, Dataset, Month, RideRecord, Weekday};
