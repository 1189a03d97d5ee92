pub mod body;
pub mod config;
pub mod constants;
pub mod trail;
pub mod types;

pub use body::Body;
pub use config::SimConfig;
pub use constants::*;
pub use trail::Trail;
pub use types::*;
