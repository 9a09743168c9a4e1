pub mod controller;
pub mod events;
pub mod io;
pub mod lookup_context;
pub mod state;

pub use controller::Widget;
pub use io::StdinHost;
pub use state::AppState;

#[cfg(test)]
mod tests;
