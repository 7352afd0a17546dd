/*
    This module is for storing grammars as lists of production rules
*/

mod symbols;

use std::fmt::Display;
use std::str::FromStr;

use crate::error_handling::*;
pub use symbols::{classify, is_epsilon, SymbolKind, EPSILON};

// The base unit in a grammar rule. Terminals sort before nonterminals, and
// epsilon comes last
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Symbol {
    Terminal(char),
    Nonterminal(char),
    Epsilon,
}

impl Symbol {
    pub fn as_char(&self) -> char {
        match *self {
            Symbol::Terminal(c) | Symbol::Nonterminal(c) => c,
            Symbol::Epsilon => EPSILON,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GrammarErrorType {
    // A character that is neither a letter nor the epsilon marker, or a
    // left-hand side that is not a nonterminal
    InvalidSymbol(char),
}

impl ErrorType for GrammarErrorType {}

impl Display for GrammarErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarErrorType::InvalidSymbol(symbol) => write!(f, "Symbol `{}` must be a letter", symbol.escape_debug()),
        }
    }
}

pub type GrammarError = Error<GrammarErrorType>;

/// A rule `Vn -> symbol_1 symbol_2 ... symbol_n`.
///
/// The characters are kept as they were given. They are only checked once the
/// rule is handed to [`crate::compute_first`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProductionRule {
    variable: char,
    rhs: Vec<char>,
}

impl ProductionRule {
    // There is no such thing as an empty right-hand side, epsilon is spelled out
    pub fn new(variable: char, rhs: &str) -> Option<Self> {
        if rhs.is_empty() {
            return None;
        }

        Some(ProductionRule {
            variable,
            rhs: rhs.chars().collect(),
        })
    }

    pub fn variable(&self) -> char {
        self.variable
    }

    pub fn rhs(&self) -> &[char] {
        &self.rhs
    }
}

impl Display for ProductionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.variable, self.rhs.iter().collect::<String>())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RuleSyntaxError {
    // There is no `=` or `->` between the variable and its rewrite
    MissingArrow,
    // The left-hand side is not exactly one character
    BadVariable,
    // Nothing after the arrow
    EmptyRewrite,
}

impl Display for RuleSyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSyntaxError::MissingArrow => write!(f, "Expected `=` or `->` after the variable"),
            RuleSyntaxError::BadVariable => write!(f, "The variable must be a single character"),
            RuleSyntaxError::EmptyRewrite => write!(f, "Nothing to rewrite to (use `#` for the empty string)"),
        }
    }
}

impl std::error::Error for RuleSyntaxError {}

// Accepts `S=AB` and `S -> AB`, whitespace is dropped
impl FromStr for ProductionRule {
    type Err = RuleSyntaxError;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let (variable, rhs) = text
            .split_once("->")
            .or_else(|| text.split_once('='))
            .ok_or(RuleSyntaxError::MissingArrow)?;

        let mut variable_chars = variable.chars();
        let variable = match (variable_chars.next(), variable_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(RuleSyntaxError::BadVariable),
        };

        ProductionRule::new(variable, rhs).ok_or(RuleSyntaxError::EmptyRewrite)
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn new_rule() {
        let rule = ProductionRule::new('S', "aB#").unwrap();
        assert_eq!(rule.variable(), 'S');
        assert_eq!(rule.rhs(), &['a', 'B', '#']);
        assert_eq!(rule.to_string(), "S -> aB#");

        assert_eq!(ProductionRule::new('S', ""), None);
    }

    #[test]
    fn parse_normal_rule() {
        let lines = vec!["S=AB", "S -> AB", " A =  a B ", "E->#"];
        let answers = vec![
            ProductionRule::new('S', "AB"),
            ProductionRule::new('S', "AB"),
            ProductionRule::new('A', "aB"),
            ProductionRule::new('E', "#")
        ];

        for (line, answer) in zip(lines, answers) {
            assert_eq!(line.parse::<ProductionRule>().ok(), answer);
        }
    }

    #[test]
    fn parse_malformed_rule() {
        assert_eq!("SAB".parse::<ProductionRule>(), Err(RuleSyntaxError::MissingArrow));
        assert_eq!("ST=AB".parse::<ProductionRule>(), Err(RuleSyntaxError::BadVariable));
        assert_eq!("=AB".parse::<ProductionRule>(), Err(RuleSyntaxError::BadVariable));
        assert_eq!("S=".parse::<ProductionRule>(), Err(RuleSyntaxError::EmptyRewrite));
        assert_eq!("S-> ".parse::<ProductionRule>(), Err(RuleSyntaxError::EmptyRewrite));
    }

    #[test]
    fn symbol_order_and_display() {
        let mut symbols = vec![Symbol::Epsilon, Symbol::Nonterminal('A'), Symbol::Terminal('b'), Symbol::Terminal('a')];
        symbols.sort();

        assert_eq!(symbols, vec![Symbol::Terminal('a'), Symbol::Terminal('b'), Symbol::Nonterminal('A'), Symbol::Epsilon]);
        assert_eq!(symbols.iter().map(Symbol::to_string).collect::<String>(), "abA#");
    }

    #[test]
    fn invalid_symbol_message() {
        assert_eq!(GrammarErrorType::InvalidSymbol('5').to_string(), "Symbol `5` must be a letter");
    }
}
