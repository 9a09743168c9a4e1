pub mod debounce;
pub mod dictionary;
pub mod error;
pub mod host;
pub mod preprocess;
pub mod state;

pub use debounce::Debouncer;
pub use dictionary::{DictionaryApiClient, DictionaryClient};
pub use error::{FetchError, HostError};
pub use host::{SelectionChanged, SelectionHost};
pub use state::Generation;
