pub mod category;
pub mod project;
pub mod section;

pub use category::*;
pub use project::*;
pub use section::*;
