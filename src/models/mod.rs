pub mod assignment;
pub mod duration;
pub mod entry;
pub mod group;
pub mod macros;
pub mod merge;
pub mod time;

pub use assignment::*;
pub use duration::*;
pub use entry::*;
pub use group::*;
pub use time::*;
