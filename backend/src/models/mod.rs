pub mod event;
pub mod painting;
pub mod time;

pub use event::*;
pub use painting::*;
pub use time::*;
