pub mod client;
pub mod error;
pub mod flatten;
pub mod types;

pub use client::{RegistryClient, PAGE_SIZE};
pub use error::RegistryError;
pub use flatten::{column_names, flatten_record, FlatRow};
pub use types::{Party, RegistryRecord, SearchPage, WordMarkSpecification};
