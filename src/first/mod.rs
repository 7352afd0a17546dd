/*
    This module computes the FIRST sets of a grammar
*/

mod set_algebra;

use std::collections::{BTreeMap, BTreeSet};

use crate::error_handling::*;
use crate::grammar::*;
pub use set_algebra::{ring_sum, union};

// Terminals and epsilon only, never nonterminals
pub type FirstSet = BTreeSet<Symbol>;

// Keyed by the nonterminal's character
pub type FirstSetTable = BTreeMap<char, FirstSet>;

pub type FirstResult<T> = std::result::Result<T, GrammarError>;

fn located(rule: usize, position: usize, error: GrammarErrorType) -> GrammarError {
    GrammarError {
        location: Location { rule, position },
        error
    }
}

// A rule with its symbols classified, plus the flag saying whether its
// contribution can still change
#[derive(Debug)]
struct WorkingRule {
    variable: char,
    rhs: Vec<Symbol>,
    active: bool,
}

impl WorkingRule {
    fn ingest(rule: &ProductionRule, number: usize) -> FirstResult<Self> {
        let variable = match Symbol::from_char(rule.variable()).map_err(|e| located(number, 0, e))? {
            Symbol::Nonterminal(c) => c,
            _ => return Err(located(number, 0, GrammarErrorType::InvalidSymbol(rule.variable()))),
        };

        let rhs = rule.rhs()
            .iter()
            .enumerate()
            .map(|(i, &c)| Symbol::from_char(c).map_err(|e| located(number, i + 1, e)))
            .collect::<FirstResult<Vec<_>>>()?;

        Ok(WorkingRule {
            variable,
            rhs,
            active: true
        })
    }

    fn is_active(&self) -> bool {
        self.active
    }

    // Once resolved a rule stays resolved
    fn resolve(&mut self) {
        self.active = false;
    }
}

/// Runs the FIRST set computation one phase at a time.
///
/// [`compute_first`] is the usual entry point. The engine is public so the
/// intermediate tables can be looked at between passes.
#[derive(Debug)]
pub struct FirstEngine {
    rules: Vec<WorkingRule>,
    table: FirstSetTable,
}

impl FirstEngine {
    /// Classifies every symbol of every rule. The first character that is not
    /// a valid symbol stops everything.
    pub fn new(rules: &[ProductionRule]) -> FirstResult<Self> {
        let rules = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| WorkingRule::ingest(rule, i + 1))
            .collect::<FirstResult<Vec<_>>>()?;

        // Every variable gets an entry, even if nothing ever reaches it
        let table = rules.iter().map(|rule| (rule.variable, FirstSet::new())).collect();

        Ok(FirstEngine { rules, table })
    }

    /// Handles the rules whose first symbol settles their contribution right
    /// away: `A -> a`, then `A -> aX...` and `A -> #...`.
    pub fn seed(&mut self) {
        for rule in self.rules.iter_mut() {
            if let [Symbol::Terminal(t)] = rule.rhs.as_slice() {
                self.table.entry(rule.variable).or_default().insert(Symbol::Terminal(*t));
                rule.resolve();
            }
        }

        for rule in self.rules.iter_mut().filter(|rule| rule.is_active()) {
            let first = match rule.rhs.as_slice() {
                [Symbol::Terminal(t), _, ..] => Symbol::Terminal(*t),
                [Symbol::Epsilon, ..] => Symbol::Epsilon,
                _ => continue,
            };

            self.table.entry(rule.variable).or_default().insert(first);
            rule.resolve();
        }
    }

    /// One pass over the active rules. Returns whether any FIRST set grew.
    ///
    /// A rule that did not grow is resolved once no other active rule defines
    /// a nonterminal on its right-hand side, since its inputs are then final.
    /// A pass without growth is the fixed point and resolves whatever is left.
    pub fn pass(&mut self) -> bool {
        let mut changed = false;

        for index in 0..self.rules.len() {
            if !self.rules[index].is_active() {
                continue;
            }

            let chain = self.chain_first(&self.rules[index].rhs);
            debug_assert!(!chain.iter().any(|s| matches!(s, Symbol::Nonterminal(_))));

            let known = self.table.entry(self.rules[index].variable).or_default();
            let before = known.len();
            *known = union(known, &chain);
            let grew = known.len() > before;

            if grew {
                changed = true;
            } else if self.inputs_frozen(index) {
                self.rules[index].resolve();
            }
        }

        if !changed {
            self.rules.iter_mut().for_each(WorkingRule::resolve);
        }

        changed
    }

    pub fn table(&self) -> &FirstSetTable {
        &self.table
    }

    /// How many rules can still contribute.
    pub fn active_rules(&self) -> usize {
        self.rules.iter().filter(|rule| rule.is_active()).count()
    }

    pub fn into_table(self) -> FirstSetTable {
        self.table
    }

    fn first_of(&self, symbol: Symbol) -> FirstSet {
        match symbol {
            Symbol::Nonterminal(c) => self.table.get(&c).cloned().unwrap_or_default(),
            other => FirstSet::from([other]),
        }
    }

    // Folds ring_sum over the rewrite from left to right
    fn chain_first(&self, rhs: &[Symbol]) -> FirstSet {
        let mut symbols = rhs.iter();
        let head = match symbols.next() {
            Some(&symbol) => self.first_of(symbol),
            None => FirstSet::new(),
        };

        symbols.fold(head, |sum, &symbol| ring_sum(sum, &self.first_of(symbol)))
    }

    fn inputs_frozen(&self, index: usize) -> bool {
        let rhs = &self.rules[index].rhs;

        self.rules
            .iter()
            .enumerate()
            .filter(|&(other, rule)| other != index && rule.is_active())
            .all(|(_, rule)| !rhs.contains(&Symbol::Nonterminal(rule.variable)))
    }
}

/// Computes, for every variable, the terminals (and possibly epsilon) that
/// can begin a string derived from it.
pub fn compute_first(rules: &[ProductionRule]) -> FirstResult<FirstSetTable> {
    let mut engine = FirstEngine::new(rules)?;

    engine.seed();
    while engine.pass() {}

    Ok(engine.into_table())
}
