//! Truth tables and validity from the command line.
//!
//! Run with:
//!   cargo run --example truth-table -- "(A>B)=(~B>~A)" "A|B"
//!   echo "A&~A" | cargo run --example truth-table
//!   cargo run --example truth-table -- -q -vv "((A>B)&B)>A"
//!
//! Without formula arguments, formulas are read from stdin one per line,
//! until end of input or an empty line.

use std::io::{self, BufRead};

use clap::Parser;
use simplelog::LevelFilter;
use tautology_rs::argument::Argument;
use tautology_rs::table::TruthTable;

#[derive(Parser)]
#[command(name = "truth-table")]
#[command(about = "Print truth tables and check propositional formulas for validity")]
struct Args {
    /// Formulas to check (read from stdin if none are given)
    formulas: Vec<String>,

    /// Only print the verdict, not the table
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if args.formulas.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                break;
            }
            check(&line, args.quiet);
        }
    } else {
        for formula in &args.formulas {
            check(formula, args.quiet);
        }
    }

    Ok(())
}

fn check(formula: &str, quiet: bool) {
    let mut arg = match Argument::parse(formula) {
        Ok(arg) => arg,
        Err(e) => {
            println!("Failed to parse '{}': {}", formula, e);
            println!();
            return;
        }
    };

    println!("{}", arg);
    if !quiet {
        println!();
        print!("{}", TruthTable::new(&mut arg));
        println!();
    }
    match arg.counterexample() {
        None => println!("Valid"),
        Some(cex) => println!("Invalid, true variables in counterexample: {}", cex),
    }
    println!();
}
