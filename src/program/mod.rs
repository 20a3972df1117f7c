mod compile;
mod instruction;

pub use compile::*;
pub use instruction::*;
