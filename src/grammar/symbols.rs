use super::{GrammarErrorType, Symbol};

pub type Result<T> = std::result::Result<T, GrammarErrorType>;

// The character standing for the empty string
pub const EPSILON: char = '#';

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SymbolKind {
    Terminal,
    Nonterminal,
}

pub fn is_epsilon(symbol: char) -> bool {
    symbol == EPSILON
}

/// Decides whether a character is a terminal or a nonterminal.
///
/// Only ASCII letters are symbols: lowercase ones are terminals and uppercase
/// ones are nonterminals. The epsilon marker is not a letter, so it has to be
/// checked with [`is_epsilon`] first.
pub fn classify(symbol: char) -> Result<SymbolKind> {
    match symbol {
        'a'..='z' => Ok(SymbolKind::Terminal),
        'A'..='Z' => Ok(SymbolKind::Nonterminal),
        _ => Err(GrammarErrorType::InvalidSymbol(symbol)),
    }
}

impl Symbol {
    pub fn from_char(symbol: char) -> Result<Symbol> {
        if is_epsilon(symbol) {
            return Ok(Symbol::Epsilon);
        }

        Ok(match classify(symbol)? {
            SymbolKind::Terminal => Symbol::Terminal(symbol),
            SymbolKind::Nonterminal => Symbol::Nonterminal(symbol),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn classify_letters() {
        let symbols = vec!['a', 'q', 'z', 'A', 'M', 'Z'];
        let answers = vec![
            SymbolKind::Terminal,
            SymbolKind::Terminal,
            SymbolKind::Terminal,
            SymbolKind::Nonterminal,
            SymbolKind::Nonterminal,
            SymbolKind::Nonterminal
        ];

        for (symbol, answer) in zip(symbols, answers) {
            assert_eq!(classify(symbol), Ok(answer));
        }
    }

    #[test]
    fn classify_non_letters() {
        // Everything past `z` used to count as a terminal, it doesn't anymore
        for symbol in ['#', '5', '_', ' ', '{', '|', '}', '~', '\x7f', '@', '[', 'é'] {
            assert_eq!(classify(symbol), Err(GrammarErrorType::InvalidSymbol(symbol)));
        }
    }

    #[test]
    fn epsilon_marker() {
        assert!(is_epsilon('#'));
        assert!(!is_epsilon('a'));
        assert!(!is_epsilon('A'));
    }

    #[test]
    fn symbol_from_char() {
        assert_eq!(Symbol::from_char('#'), Ok(Symbol::Epsilon));
        assert_eq!(Symbol::from_char('x'), Ok(Symbol::Terminal('x')));
        assert_eq!(Symbol::from_char('X'), Ok(Symbol::Nonterminal('X')));
        assert_eq!(Symbol::from_char('5'), Err(GrammarErrorType::InvalidSymbol('5')));
    }
}
