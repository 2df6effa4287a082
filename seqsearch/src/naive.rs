use std::ops::ControlFlow;

use log::trace;

use crate::{Searcher, settle_trivial};

/// Brute-force matcher: tries every alignment left to right.
///
/// No tables to build, so it serves as the reference the other algorithms
/// are checked against.
#[derive(Debug, Clone)]
pub struct Naive<T> {
    pattern: Box<[T]>,
}

impl<T: Clone> Naive<T> {
    pub fn new(pattern: &[T]) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl<T: PartialEq> Searcher<T> for Naive<T> {
    fn pattern(&self) -> &[T] {
        &self.pattern
    }

    fn for_each_match(&self, corpus: &[T], f: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let n = corpus.len();
        let m = self.pattern.len();
        if settle_trivial(n, m, f) {
            return;
        }
        trace!("naive: scanning {} alignments", n - m + 1);

        for i in 0..=n - m {
            if corpus[i..i + m] == self.pattern[..] && f(i).is_break() {
                return;
            }
        }
    }
}

pub fn naive_find<T: PartialEq>(corpus: &[T], pattern: &[T]) -> Option<usize> {
    let n = corpus.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    trace!("naive_find: scanning {} alignments", n - m + 1);
    corpus.windows(m).position(|window| window == pattern)
}

pub fn naive_find_all<T: PartialEq>(corpus: &[T], pattern: &[T]) -> Vec<usize> {
    let n = corpus.len();
    let m = pattern.len();

    if m == 0 {
        // Convention: match at every index, including the end.
        return (0..=n).collect();
    }

    corpus
        .windows(m)
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}
