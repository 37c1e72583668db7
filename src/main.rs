use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

mod cli;

use cli::Cli;
use um_vm::interpreter::Interpreter;
use um_vm::loader;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let file = File::open(&cli.program)
        .with_context(|| format!("failed to open program file {}", cli.program.display()))?;
    let program = loader::load(BufReader::new(file))
        .with_context(|| format!("failed to load program image from {}", cli.program.display()))?;

    let mut vm = Interpreter::new(program);
    let mut input = BufReader::new(io::stdin());
    let mut output = BufWriter::new(io::stdout());

    vm.run(&mut input, &mut output).context("program execution failed")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("um: {e:#}");
            ExitCode::FAILURE
        }
    }
}
