// Service exports
pub mod seed;
pub mod store;

pub use seed::{load_seed_profiles, SeedError};
pub use store::{InMemoryProfileStore, ProfileStore, ProfileUpdate, StoreError};
