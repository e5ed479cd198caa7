mod types;
mod expr;
mod stmt;
mod unit;

pub use types::*;
pub use expr::*;
pub use stmt::*;
pub use unit::*;
