mod bm;
mod bmh;
mod kmp;
mod naive;

pub mod hex;
pub mod inspect;
pub mod predicate;
pub mod skip_table;
pub mod symbol;

use std::ops::ControlFlow;

pub use bm::{BoyerMoore, boyer_moore_search};
pub use bmh::{BoyerMooreHorspool, boyer_moore_horspool_search};
pub use inspect::{Inspector, LogInspector, NoInspector};
pub use kmp::{KnuthMorrisPratt, knuth_morris_pratt_search};
pub use naive::{Naive, naive_find, naive_find_all};
pub use skip_table::{DenseSkipTable, HashSkipTable, SkipTable};
pub use symbol::{SmallSymbol, Symbol};

/// A matcher built once from a pattern and applied to any number of corpora.
///
/// Searching never mutates the matcher, so one instance can serve many
/// threads at once.
pub trait Searcher<T> {
    fn pattern(&self) -> &[T];

    /// Calls `f` with the start of every (possibly overlapping) match, left to
    /// right, until `f` breaks or the corpus is exhausted.
    fn for_each_match(&self, corpus: &[T], f: &mut dyn FnMut(usize) -> ControlFlow<()>);

    /// Leftmost match start, or `None` if the pattern does not occur.
    fn find(&self, corpus: &[T]) -> Option<usize> {
        let mut found = None;
        self.for_each_match(corpus, &mut |pos| {
            found = Some(pos);
            ControlFlow::Break(())
        });
        found
    }

    fn find_all(&self, corpus: &[T]) -> Vec<usize> {
        let mut res = Vec::new();
        self.for_each_match(corpus, &mut |pos| {
            res.push(pos);
            ControlFlow::Continue(())
        });
        res
    }
}

/// Convenience for byte matchers applied to text.
pub trait TextSearcher: Searcher<u8> {
    fn find_str(&self, text: &str) -> Option<usize> {
        self.find(text.as_bytes())
    }

    fn find_all_str(&self, text: &str) -> Vec<usize> {
        self.find_all(text.as_bytes())
    }
}

impl<S: Searcher<u8> + ?Sized> TextSearcher for S {}

/// Boundary cases every algorithm shares. Returns `true` when the search is
/// already decided and the algorithm's own loop must not run.
///
/// The empty pattern matches at every position, `0..=n`.
pub(crate) fn settle_trivial(
    corpus_len: usize,
    pattern_len: usize,
    f: &mut dyn FnMut(usize) -> ControlFlow<()>,
) -> bool {
    if pattern_len == 0 {
        for pos in 0..=corpus_len {
            if f(pos).is_break() {
                break;
            }
        }
        return true;
    }
    corpus_len < pattern_len
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BoyerMoore,
    BoyerMooreHorspool,
    KnuthMorrisPratt,
    /// Brute-force reference scan.
    Naive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BoyerMoore,
        Algorithm::BoyerMooreHorspool,
        Algorithm::KnuthMorrisPratt,
        Algorithm::Naive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BoyerMoore => "boyer-moore",
            Algorithm::BoyerMooreHorspool => "boyer-moore-horspool",
            Algorithm::KnuthMorrisPratt => "knuth-morris-pratt",
            Algorithm::Naive => "naive",
        }
    }

    /// Builds a matcher for `pattern`, using the symbol's default skip table.
    pub fn build<'a, T: Symbol + 'a>(self, pattern: &[T]) -> Box<dyn Searcher<T> + 'a> {
        self.build_inspected(pattern, &mut NoInspector)
    }

    pub fn build_inspected<'a, T: Symbol + 'a>(
        self,
        pattern: &[T],
        inspector: &mut dyn Inspector<T>,
    ) -> Box<dyn Searcher<T> + 'a> {
        match self {
            Algorithm::BoyerMoore => {
                Box::new(BoyerMoore::<T, T::Table>::with_inspector(pattern, inspector))
            }
            Algorithm::BoyerMooreHorspool => {
                Box::new(BoyerMooreHorspool::<T, T::Table>::with_inspector(pattern, inspector))
            }
            Algorithm::KnuthMorrisPratt => {
                Box::new(KnuthMorrisPratt::with_inspector(pattern, inspector))
            }
            Algorithm::Naive => {
                inspector.pattern_length(pattern.len());
                Box::new(Naive::new(pattern))
            }
        }
    }
}

/// Builds a throwaway matcher for `algorithm` and runs it once.
pub fn search<T: Symbol>(corpus: &[T], pattern: &[T], algorithm: Algorithm) -> Option<usize> {
    match algorithm {
        Algorithm::BoyerMoore => boyer_moore_search(corpus, pattern),
        Algorithm::BoyerMooreHorspool => boyer_moore_horspool_search(corpus, pattern),
        Algorithm::KnuthMorrisPratt => knuth_morris_pratt_search(corpus, pattern),
        Algorithm::Naive => naive_find(corpus, pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cases every algorithm has to get right, checked against both the
    /// boxed and the one-shot entry points.
    fn run_shared_tests<F, G>(mut find: F, mut find_all: G)
    where
        F: FnMut(&[u8], &[u8]) -> Option<usize>,
        G: FnMut(&[u8], &[u8]) -> Vec<usize>,
    {
        assert_eq!(find(b"ABABDABACDABABCABAB", b"ABABCABAB"), Some(10));
        assert_eq!(find(b"AABAACAADAABAABA", b"AABA"), Some(0));
        assert_eq!(find(b"ABC", b"X"), None);
        assert_eq!(find(b"ABC", b""), Some(0));
        assert_eq!(find(b"", b""), Some(0));
        assert_eq!(find(b"AAA", b"AAAA"), None);
        assert_eq!(find(b"", b"A"), None);

        assert_eq!(find(b"ababcabcabababd", b"ababd"), Some(10));
        assert_eq!(find(b"hello world", b"rust"), None);
        assert_eq!(find(b"hello world", b"world"), Some(6));
        assert_eq!(find(b"hello world", b"hello world"), Some(0));

        assert_eq!(find_all(b"aaaa", b"aa"), vec![0, 1, 2]);
        assert_eq!(find_all(b"aabaa", b"aa"), vec![0, 3]);
        assert_eq!(find_all(b"abc", b""), vec![0, 1, 2, 3]);
        assert_eq!(find_all(b"AABAACAADAABAABA", b"AABA"), vec![0, 9, 12]);
        assert_eq!(find_all(b"abc", b"abcd"), Vec::<usize>::new());

        let hay = "🌍hello🌍hello".as_bytes();
        let pat = "🌍hello".as_bytes();
        assert_eq!(find(hay, pat), Some(0));
        assert_eq!(find_all(hay, pat), vec![0, pat.len()]);
    }

    #[test]
    fn every_algorithm_passes_shared_suite() {
        for algo in Algorithm::ALL {
            run_shared_tests(
                |c, p| algo.build(p).find(c),
                |c, p| algo.build(p).find_all(c),
            );
            run_shared_tests(|c, p| search(c, p, algo), |c, p| algo.build(p).find_all(c));
        }
    }

    #[test]
    fn text_searcher_on_boxed_matcher() {
        let matcher = Algorithm::KnuthMorrisPratt.build(b"lo".as_slice());
        assert_eq!(matcher.find_str("hello, lo"), Some(3));
        assert_eq!(matcher.find_all_str("hello, lo"), vec![3, 7]);
    }

    #[test]
    fn generic_symbols() {
        let corpus: Vec<char> = "ünïcödé ünïcödé".chars().collect();
        let pattern: Vec<char> = "cödé".chars().collect();
        for algo in Algorithm::ALL {
            assert_eq!(search(&corpus, &pattern, algo), Some(3), "{}", algo.name());
        }

        let corpus = [10u32, 20, 30, 20, 30, 40];
        for algo in Algorithm::ALL {
            assert_eq!(search(&corpus, &[20, 30, 40], algo), Some(3), "{}", algo.name());
            assert_eq!(search(&corpus, &[40, 10], algo), None, "{}", algo.name());
        }
    }

    #[test]
    fn trace_logging_leaves_results_alone() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();

        for algo in Algorithm::ALL {
            let matcher = algo.build(b"ana".as_slice());
            assert_eq!(matcher.find_all(b"bananas"), vec![1, 3], "{}", algo.name());
            assert_eq!(matcher.find(b"ban"), None, "{}", algo.name());
        }
    }
}
