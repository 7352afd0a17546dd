use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

// Points at a symbol inside the rule list. Rules are numbered from 1, and
// position 0 is the left-hand side of the rule
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Location {
    pub rule: usize,
    pub position: usize
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.position == 0 {
            write!(f, "rule {}, left-hand side", self.rule)
        } else {
            write!(f, "rule {}, symbol {}", self.rule, self.position)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

impl<T: ErrorType + std::fmt::Debug> std::error::Error for Error<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(Location { rule: 3, position: 0 }.to_string(), "rule 3, left-hand side");
        assert_eq!(Location { rule: 1, position: 2 }.to_string(), "rule 1, symbol 2");
    }
}
