pub use classify::*;
pub use clean::*;
pub use error::*;
pub use options::*;


mod classify;
mod clean;
mod error;
mod options;
