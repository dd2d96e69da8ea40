pub mod client;
pub mod error;
pub mod params;
pub mod types;

pub mod groups;
pub mod user;

pub use client::routes;
pub use error::ApiErrorDocument;
