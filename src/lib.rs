/*
    FIRST set computation for grammars written with single-character symbols
*/

pub mod error_handling;
pub mod first;
pub mod grammar;

pub use error_handling::{Error, ErrorType, Location};
pub use first::{compute_first, ring_sum, union, FirstEngine, FirstResult, FirstSet, FirstSetTable};
pub use grammar::{classify, is_epsilon, GrammarError, GrammarErrorType, ProductionRule, RuleSyntaxError, Symbol, SymbolKind, EPSILON};
