// pure rule algorithms, no I/O and no locking
mod claim;
mod fan;
mod wall;
mod win;

pub use claim::*;
pub use fan::*;
pub use wall::*;
pub use win::*;
