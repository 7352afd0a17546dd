use clap::Parser;

use first_sets::ProductionRule;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Production rules, one per argument (e.g. `S=AB`, `A=a`, `A=#`)
    #[arg(required = true, value_name = "RULE")]
    pub rules: Vec<ProductionRule>,

    /// Only print this nonterminal (default: all of them)
    #[arg(short, long, value_name = "SYMBOL")]
    pub nonterminal: Option<char>
}
