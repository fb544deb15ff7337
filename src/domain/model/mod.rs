mod identity;
mod schedule;
mod summary;
mod table;
mod tweet;

pub use identity::*;
pub use schedule::*;
pub use summary::*;
pub use table::*;
pub use tweet::*;
