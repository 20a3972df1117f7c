mod two_ended;

pub use two_ended::*;
