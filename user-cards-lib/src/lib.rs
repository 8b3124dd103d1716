pub mod config;
pub mod fetch;
pub mod render;
pub mod state;
pub mod types;

pub use config::*;
pub use fetch::*;
pub use render::*;
pub use state::*;
pub use types::*;
