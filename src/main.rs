use std::{
    env, fs,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

use anyhow::anyhow;
use clap::Parser;

use bfvm::{
    executor::Executor,
    program::Program,
    tape::{TwoEndedTape, TAPE_LEN},
};

#[derive(Parser, Debug)]
#[command(name = "bfvm", about = "An optimizing Brainfuck interpreter")]
#[command(disable_help_flag = true)]
struct Args {
    /// Print the compiled opcode stream instead of executing.
    #[arg(short = 'c')]
    compile_only: bool,

    /// Program file; standard input when absent.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::try_parse().unwrap_or_else(|_| {
        let argv0 = env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned());
        eprintln!("Usage: {argv0} [-c] program_file");
        process::exit(1);
    });

    let source = match &args.file {
        Some(path) => {
            fs::read(path).map_err(|_| anyhow!("Unable to open file {}", path.display()))?
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let program = Program::new(&source)?;

    if args.compile_only {
        let mut stdout = io::stdout().lock();
        for instruction in program.iter() {
            stdout.write_all(&[instruction.tag()])?;
        }
        stdout.flush()?;
    } else {
        Executor::new_stdio(&program, TwoEndedTape::<TAPE_LEN>::new()).run()?;
    }

    Ok(())
}
