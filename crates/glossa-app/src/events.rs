pub mod lookup;
pub mod selection;

pub use lookup::{apply_lookup, handle_settled_term, lookup_loop};
pub use selection::{publish_term, selection_loop};
