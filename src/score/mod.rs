pub mod aggregate;
pub mod builder;
pub mod context;
pub mod playoff;
pub mod selection;
pub mod standings;

pub use context::*;
