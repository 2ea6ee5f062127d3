//! Shared core for the motorcycle recommendation services: the curated
//! dataset schema and loader, feature vector construction from form input,
//! and the two recommendation engines (exact spec matching and
//! nearest-rating lookup).

pub mod categories;
pub mod dataset;
pub mod features;
pub mod filter;
pub mod record;
pub mod similar;

pub use features::{FeatureError, SpecForm};
pub use record::{MotorcycleRecord, SpecColumn};
pub use similar::RatedPick;
