pub mod data;
pub mod ids;

pub use data::MotoStatus;
pub use ids::{IdProvider, SequentialIdProvider};
