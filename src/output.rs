use std::io::{self, Write};

/// Destination for bytes emitted by the `.` command.
pub trait Output {
    fn push(&mut self, value: u8);
}

impl<O: Output + ?Sized> Output for &mut O {
    fn push(&mut self, value: u8) {
        (**self).push(value);
    }
}

impl Output for Vec<u8> {
    fn push(&mut self, value: u8) {
        Vec::push(self, value);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreOutput;

impl Output for IgnoreOutput {
    fn push(&mut self, _: u8) {}
}

/// Writer to process standard output.
///
/// Every byte is flushed as soon as it is written, so a program that prints
/// and then spins forever still shows what it printed.
#[derive(Debug)]
pub struct Stdout(io::Stdout);

impl Default for Stdout {
    fn default() -> Self {
        Self::new()
    }
}

impl Stdout {
    pub fn new() -> Self {
        Self(io::stdout())
    }
}

impl Output for Stdout {
    fn push(&mut self, value: u8) {
        self.0
            .write_all(&[value])
            .and_then(|()| self.0.flush())
            .expect("calls to stdout should succeed");
    }
}
