mod controller;
mod provider;
mod state;
mod view;
pub use controller::*;
pub use provider::*;
pub use state::*;
pub use view::*;
