use std::ops::ControlFlow;

use log::trace;

use crate::{Inspector, NoInspector, Searcher, SkipTable, Symbol, settle_trivial};

/// Boyer–Moore matcher with bad-character and strong good-suffix rules.
///
/// `S` picks the bad-character table. [`BoyerMoore::new`] takes the one named
/// by [`Symbol::Table`]; [`BoyerMoore::with_strategy`] accepts any table, so
/// symbol types without a `Symbol` impl work too.
#[derive(Debug, Clone)]
pub struct BoyerMoore<T, S> {
    pattern: Box<[T]>,
    skip: S,
    suffix: Box<[usize]>,
}

impl<T: Symbol> BoyerMoore<T, T::Table> {
    pub fn new(pattern: &[T]) -> Self {
        Self::with_strategy(pattern)
    }

    pub fn with_inspector<I: Inspector<T> + ?Sized>(pattern: &[T], inspector: &mut I) -> Self {
        Self::with_strategy_and_inspector(pattern, inspector)
    }
}

impl<T: Eq + Clone, S: SkipTable<T>> BoyerMoore<T, S> {
    pub fn with_strategy(pattern: &[T]) -> Self {
        Self::with_strategy_and_inspector(pattern, &mut NoInspector)
    }

    pub fn with_strategy_and_inspector<I: Inspector<T> + ?Sized>(
        pattern: &[T],
        inspector: &mut I,
    ) -> Self {
        let skip = build_bad_char_table::<T, S>(pattern);
        let suffix = build_good_suffix_table(pattern);

        inspector.pattern_length(pattern.len());
        inspector.skip_table(&skip.entries(), skip.default_value());
        inspector.suffix_table(&suffix);

        Self {
            pattern: pattern.into(),
            skip,
            suffix,
        }
    }
}

impl<T: Eq, S: SkipTable<T>> Searcher<T> for BoyerMoore<T, S> {
    fn pattern(&self) -> &[T] {
        &self.pattern
    }

    fn for_each_match(&self, corpus: &[T], f: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let n = corpus.len();
        let m = self.pattern.len();
        if settle_trivial(n, m, f) {
            return;
        }
        trace!("boyer-moore: {} symbol pattern over {} symbols", m, n);

        let pattern = &self.pattern[..];
        let mut pos = 0usize; // corpus index where the current alignment starts

        while pos <= n - m {
            let window = &corpus[pos..pos + m];
            let mut j = m;

            while j > 0 && pattern[j - 1] == window[j - 1] {
                j -= 1;
            }

            if j == 0 {
                if f(pos).is_break() {
                    return;
                }
                // Full match: shift by the pattern's period.
                pos += self.suffix[0];
                continue;
            }

            let k = self.skip.get(&window[j - 1]);
            let bc_shift = j as isize - k - 1;
            let gs_shift = self.suffix[j];

            pos += if k < j as isize && bc_shift > gs_shift as isize {
                bc_shift as usize
            } else {
                gs_shift
            };
        }
    }
}

/// Rightmost index of every pattern symbol, `-1` for the rest.
fn build_bad_char_table<T, S: SkipTable<T>>(pattern: &[T]) -> S {
    let mut table = S::with_capacity_and_default(pattern.len(), -1);
    for (i, symbol) in pattern.iter().enumerate() {
        table.insert(symbol, i as isize);
    }
    table
}

/// Longest proper border of every prefix, `prefix[i]` covering `pattern[..=i]`.
fn compute_prefix<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let count = pattern.len();
    let mut prefix = vec![0usize; count];

    let mut k = 0;
    for i in 1..count {
        while k > 0 && pattern[k] != pattern[i] {
            k = prefix[k - 1];
        }
        if pattern[k] == pattern[i] {
            k += 1;
        }
        prefix[i] = k;
    }

    prefix
}

/// Build the good-suffix shift table for Boyer–Moore.
///
/// Entry `j` is the shift to apply once the last `m - j` symbols matched.
/// Entry `0` is the period of the whole pattern.
fn build_good_suffix_table<T: PartialEq + Clone>(pattern: &[T]) -> Box<[usize]> {
    let count = pattern.len();
    if count == 0 {
        return vec![0; 1].into_boxed_slice();
    }

    let reversed: Vec<T> = pattern.iter().rev().cloned().collect();
    let prefix = compute_prefix(pattern);
    let prefix_reversed = compute_prefix(&reversed);

    let mut suffix = vec![count - prefix[count - 1]; count + 1];

    for (i, &border) in prefix_reversed.iter().enumerate() {
        let j = count - border;
        let k = i - border + 1;
        if suffix[j] > k {
            suffix[j] = k;
        }
    }

    suffix.into_boxed_slice()
}

/// Find the first occurrence of `pattern` in `corpus` using Boyer–Moore.
pub fn boyer_moore_search<T: Symbol>(corpus: &[T], pattern: &[T]) -> Option<usize> {
    BoyerMoore::<T, T::Table>::new(pattern).find(corpus)
}
