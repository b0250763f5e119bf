pub mod lagrange;
pub mod observer;

pub use lagrange::{reconstruct, reconstruct_with_observer};
pub use observer::{Term, TermLog, TermObserver};
