// Replacement dictionary module - ordered find/replace entries and their validation

mod batch;
mod store;
mod validation;

pub use batch::parse_batch;
pub use store::{DictionaryEntry, DictionaryError, DictionaryStore};
pub use validation::ValidationPolicy;
