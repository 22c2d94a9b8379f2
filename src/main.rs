use std::fs;

use clap::{ArgAction, Parser, ValueEnum};
use minipython::{
    Compilation, StdoutOutput, compile,
    interpreter::{
        evaluator::core::Context,
        tac::{Machine, render},
    },
};
use tracing::Level;

/// minipython is a tiny imperative language with integer variables, `print`,
/// `while` and `if`, compiled to three-address code.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minipython to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the token list.
    #[arg(long)]
    tokens: bool,

    /// Prints the syntax tree.
    #[arg(long)]
    ast: bool,

    /// Prints the symbol table.
    #[arg(long)]
    symbols: bool,

    /// Prints the three-address code.
    #[arg(long)]
    tac: bool,

    /// Which back end executes the program.
    #[arg(long, value_enum, default_value_t = Backend::Tree)]
    backend: Backend,

    /// Stops after the front end without executing anything.
    #[arg(long)]
    no_run: bool,

    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Walk the syntax tree.
    Tree,
    /// Execute the lowered three-address code.
    Tac,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = execute(&args, &script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn execute(args: &Args, script: &str) -> Result<(), minipython::error::Error> {
    let Compilation { tokens, checked, tac } = compile(script)?;

    if args.tokens {
        for token in &tokens {
            println!("{token}");
        }
    }
    if args.ast {
        print!("{}", checked.program);
    }
    if args.symbols {
        print!("{}", checked.symbols);
    }
    if args.tac {
        print!("{}", render(&tac));
    }

    if args.no_run {
        return Ok(());
    }

    let mut out = StdoutOutput;
    match args.backend {
        Backend::Tree => Context::new(&checked.symbols).exec_program(&checked.program, &mut out)?,
        Backend::Tac => Machine::new().run(&tac, &mut out)?,
    }
    Ok(())
}
