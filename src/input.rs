use std::io::{self, Read};

/// Byte-at-a-time reader over process standard input.
///
/// Yields `None` at end of stream, which the executor treats as "leave the
/// current cell unchanged".
#[derive(Debug)]
pub struct Stdin(io::Bytes<io::Stdin>);

impl Default for Stdin {
    fn default() -> Self {
        Self::new()
    }
}

impl Stdin {
    pub fn new() -> Self {
        Self(io::stdin().bytes())
    }
}

impl Iterator for Stdin {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.next()?.unwrap_or_default())
    }
}
