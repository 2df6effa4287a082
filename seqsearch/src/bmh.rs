use std::ops::ControlFlow;

use log::trace;

use crate::{Inspector, NoInspector, Searcher, SkipTable, Symbol, settle_trivial};

/// Boyer–Moore–Horspool matcher.
///
/// Always shifts on the corpus symbol under the pattern's last position,
/// wherever the mismatch happened.
/// As with [`BoyerMoore`](crate::BoyerMoore), `with_strategy` accepts any
/// skip table and `new` picks [`Symbol::Table`].
#[derive(Debug, Clone)]
pub struct BoyerMooreHorspool<T, S> {
    pattern: Box<[T]>,
    skip: S,
}

impl<T: Symbol> BoyerMooreHorspool<T, T::Table> {
    pub fn new(pattern: &[T]) -> Self {
        Self::with_strategy(pattern)
    }

    pub fn with_inspector<I: Inspector<T> + ?Sized>(pattern: &[T], inspector: &mut I) -> Self {
        Self::with_strategy_and_inspector(pattern, inspector)
    }
}

impl<T: Eq + Clone, S: SkipTable<T>> BoyerMooreHorspool<T, S> {
    pub fn with_strategy(pattern: &[T]) -> Self {
        Self::with_strategy_and_inspector(pattern, &mut NoInspector)
    }

    pub fn with_strategy_and_inspector<I: Inspector<T> + ?Sized>(
        pattern: &[T],
        inspector: &mut I,
    ) -> Self {
        let m = pattern.len();
        let mut skip = S::with_capacity_and_default(m, m as isize);

        // Distance from the end, ignoring the last symbol itself.
        if let Some((_, init)) = pattern.split_last() {
            for (i, symbol) in init.iter().enumerate() {
                skip.insert(symbol, (m - 1 - i) as isize);
            }
        }

        inspector.pattern_length(m);
        inspector.skip_table(&skip.entries(), skip.default_value());

        Self {
            pattern: pattern.into(),
            skip,
        }
    }
}

impl<T: Eq, S: SkipTable<T>> Searcher<T> for BoyerMooreHorspool<T, S> {
    fn pattern(&self) -> &[T] {
        &self.pattern
    }

    fn for_each_match(&self, corpus: &[T], f: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let n = corpus.len();
        let m = self.pattern.len();
        if settle_trivial(n, m, f) {
            return;
        }
        trace!("horspool: {} symbol pattern over {} symbols", m, n);

        let pattern = &self.pattern[..];
        let mut pos = 0usize;

        while pos <= n - m {
            let window = &corpus[pos..pos + m];

            if window.iter().rev().eq(pattern.iter().rev()) && f(pos).is_break() {
                return;
            }

            // Entries are always in 1..=m.
            pos += self.skip.get(&window[m - 1]) as usize;
        }
    }
}

/// Find the first occurrence of `pattern` in `corpus` using Boyer–Moore–Horspool.
pub fn boyer_moore_horspool_search<T: Symbol>(corpus: &[T], pattern: &[T]) -> Option<usize> {
    BoyerMooreHorspool::<T, T::Table>::new(pattern).find(corpus)
}
