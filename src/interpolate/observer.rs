use num_bigint::BigInt;
use num_rational::BigRational;

/// One summand of the reconstruction, y_i * L_i(0).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Term {
    // 1-based position within the selected points
    pub position: usize,
    pub x: u64,
    pub y: BigInt,
    pub basis: BigRational,
    pub contribution: BigRational,
}

/// Receives each term as soon as it is computed, in selection order.
pub trait TermObserver {
    fn on_term(&mut self, term: &Term);
}

impl TermObserver for () {
    fn on_term(&mut self, _term: &Term) {}
}

impl<F: FnMut(&Term)> TermObserver for F {
    fn on_term(&mut self, term: &Term) {
        self(term)
    }
}

/// Keeps every term, handy when the caller wants to inspect them afterwards.
#[derive(Debug, Default, Clone)]
pub struct TermLog {
    pub terms: Vec<Term>,
}

impl TermObserver for TermLog {
    fn on_term(&mut self, term: &Term) {
        self.terms.push(term.clone());
    }
}
