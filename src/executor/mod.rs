use crate::{
    input::Stdin,
    output::{Output, Stdout},
    program::{Instruction, Program},
    tape::{TapeError, TwoEndedTape},
};

/// Executes one compiled program against one tape.
///
/// Dispatch is a tight match over the dense instruction array; the two jump
/// opcodes assign the program counter to one past their target, so control
/// always lands just beyond the partner bracket.
#[derive(Clone, Debug)]
pub struct Executor<'a, I, O, const N: usize> {
    instructions: &'a [Instruction],
    instruction_index: usize,
    tape: TwoEndedTape<N>,
    input: I,
    output: O,
}

impl<'a, I, O, const N: usize> Executor<'a, I, O, N> {
    pub fn new(program: &'a Program, tape: TwoEndedTape<N>, input: I, output: O) -> Self {
        Self {
            instructions: program,
            instruction_index: 0,
            tape,
            input,
            output,
        }
    }

    pub fn is_done(&self) -> bool {
        self.instruction_index >= self.instructions.len()
    }

    /// Returns `true` if the program was completed immediately before
    /// `.step()` was called.
    pub fn step(&mut self) -> Result<bool, TapeError>
    where
        I: Iterator<Item = u8>,
        O: Output,
    {
        let Some(current) = self.instructions.get(self.instruction_index) else {
            return Ok(true);
        };

        match *current {
            Instruction::Output => {
                self.output.push(self.tape.get());
            }
            Instruction::Input => {
                if let Some(value) = self.input.next() {
                    self.tape.set(value);
                }
            }
            Instruction::JumpForward(target) => {
                if self.tape.get() == 0 {
                    self.instruction_index = target + 1;
                    return Ok(false);
                }
            }
            Instruction::JumpBackward(target) => {
                if self.tape.get() != 0 {
                    self.instruction_index = target + 1;
                    return Ok(false);
                }
            }
            Instruction::SetZero => {
                self.tape.set(0);
            }
            Instruction::AddVal(delta) => {
                self.tape.add(delta);
            }
            Instruction::MovePos(delta) => {
                self.tape.shift(delta)?;
            }
            Instruction::AddToNext => {
                self.multiply_move(1)?;
            }
            Instruction::MultiplyMove(factor) => {
                self.multiply_move(factor)?;
            }
            Instruction::SetVal(value) => {
                self.tape.set(value as u8);
            }
            Instruction::ScanRight => {
                while self.tape.get() != 0 {
                    self.tape.shift(1)?;
                }
            }
            Instruction::ScanLeft => {
                while self.tape.get() != 0 {
                    self.tape.shift(-1)?;
                }
            }
        }

        self.instruction_index += 1;
        Ok(false)
    }

    /// Runs this executor to completion.
    pub fn run(&mut self) -> Result<(), TapeError>
    where
        I: Iterator<Item = u8>,
        O: Output,
    {
        while !self.step()? {}
        Ok(())
    }

    // A multiply loop never runs its body when the current cell is zero;
    // match that, head motion included.
    fn multiply_move(&mut self, factor: i32) -> Result<(), TapeError> {
        let value = self.tape.get();
        if value == 0 {
            return Ok(());
        }
        self.tape.set(0);
        self.tape.shift(1)?;
        self.tape.add((value as i32).wrapping_mul(factor));
        self.tape.shift(-1)?;
        Ok(())
    }
}

impl<'a, const N: usize> Executor<'a, Stdin, Stdout, N> {
    pub fn new_stdio(program: &'a Program, tape: TwoEndedTape<N>) -> Self {
        Self::new(program, tape, Stdin::new(), Stdout::new())
    }
}
