mod cli;

use std::process::ExitCode;

use clap::Parser;
use first_sets::{compute_first, FirstSet};
use itertools::Itertools;

fn format_first(variable: char, first: &FirstSet) -> String {
    format!("FIRST({}) = {{{}}}", variable, first.iter().join(", "))
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let table = match compute_first(&cli.rules) {
        Ok(table) => table,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    if let Some(nonterminal) = cli.nonterminal {
        if !table.contains_key(&nonterminal) {
            eprintln!("\x1b[31;49;1mNo rules for `{}`\x1b[0m", nonterminal);
            return ExitCode::FAILURE;
        }
    }

    table
        .iter()
        .filter(|(variable, _)| cli.nonterminal.map_or(true, |n| n == **variable))
        .for_each(|(&variable, first)| println!("{}", format_first(variable, first)));

    ExitCode::SUCCESS
}
