pub mod store;

pub use store::{sanitize_name, Profile, ProfileStore};
