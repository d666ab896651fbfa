pub mod purchase;
pub mod report;

pub use purchase::*;
pub use report::*;
