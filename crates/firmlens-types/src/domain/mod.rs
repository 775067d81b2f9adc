pub mod level;
pub mod record;

pub use level::*;
pub use record::*;
