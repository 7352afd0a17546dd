use super::FirstSet;
use crate::grammar::Symbol;

pub fn union(lhs: &FirstSet, rhs: &FirstSet) -> FirstSet {
    lhs.union(rhs).copied().collect()
}

/// FIRST of two adjacent parts `X Y` of a rewrite.
///
/// When `lhs` holds epsilon, `X` can vanish and whatever starts `Y` can start
/// `X Y` too: the epsilon is taken out of `lhs` and `rhs` is unioned in.
/// Otherwise `X` always produces a first symbol and `rhs` is ignored.
pub fn ring_sum(mut lhs: FirstSet, rhs: &FirstSet) -> FirstSet {
    if lhs.remove(&Symbol::Epsilon) {
        lhs.extend(rhs.iter().copied());
    }

    lhs
}
