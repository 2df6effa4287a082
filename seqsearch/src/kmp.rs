use std::ops::ControlFlow;

use log::trace;

use crate::{Inspector, NoInspector, Searcher, settle_trivial};

/// Knuth–Morris–Pratt matcher. Only needs equality on symbols.
#[derive(Debug, Clone)]
pub struct KnuthMorrisPratt<T> {
    pattern: Box<[T]>,
    failure: Box<[isize]>,
}

impl<T: PartialEq + Clone> KnuthMorrisPratt<T> {
    pub fn new(pattern: &[T]) -> Self {
        Self::with_inspector(pattern, &mut NoInspector)
    }

    pub fn with_inspector<I: Inspector<T> + ?Sized>(pattern: &[T], inspector: &mut I) -> Self {
        let failure = build_failure_table(pattern);

        inspector.pattern_length(pattern.len());
        inspector.failure_table(&failure);

        Self {
            pattern: pattern.into(),
            failure,
        }
    }
}

/// `failure[i]` is the length of the longest proper border of `pattern[..i]`,
/// with `failure[0] == -1` meaning "restart before the first symbol".
fn build_failure_table<T: PartialEq>(pattern: &[T]) -> Box<[isize]> {
    let m = pattern.len();
    let mut failure = vec![0isize; m + 1];
    failure[0] = -1;

    for i in 1..=m {
        let mut j = failure[i - 1];
        while j >= 0 && pattern[j as usize] != pattern[i - 1] {
            j = failure[j as usize];
        }
        failure[i] = j + 1;
    }

    failure.into_boxed_slice()
}

impl<T: PartialEq> Searcher<T> for KnuthMorrisPratt<T> {
    fn pattern(&self) -> &[T] {
        &self.pattern
    }

    fn for_each_match(&self, corpus: &[T], f: &mut dyn FnMut(usize) -> ControlFlow<()>) {
        let n = corpus.len();
        let m = self.pattern.len();
        if settle_trivial(n, m, f) {
            return;
        }
        trace!("kmp: {} symbol pattern over {} symbols", m, n);

        let pattern = &self.pattern[..];
        let last_match = n - m;

        let mut idx = 0usize; // index in pattern
        let mut match_start = 0usize; // index in corpus

        // Corpus symbols before match_start + idx are never compared again.
        while match_start <= last_match {
            while pattern[idx] == corpus[match_start + idx] {
                idx += 1;
                if idx == m {
                    if f(match_start).is_break() {
                        return;
                    }
                    break;
                }
            }

            let fallback = self.failure[idx];
            match_start += (idx as isize - fallback) as usize;
            idx = fallback.max(0) as usize;
        }
    }
}

/// Find the first occurrence of `pattern` in `corpus` using Knuth–Morris–Pratt.
pub fn knuth_morris_pratt_search<T: PartialEq + Clone>(corpus: &[T], pattern: &[T]) -> Option<usize> {
    KnuthMorrisPratt::new(pattern).find(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::tests::Recorder;

    #[test]
    fn test_kmp_basic() {
        assert_eq!(knuth_morris_pratt_search(b"ababcabcabababd", b"ababd"), Some(10));
    }

    #[test]
    fn test_kmp_not_found() {
        assert_eq!(knuth_morris_pratt_search(b"hello world", b"rust"), None);
    }

    #[test]
    fn test_kmp_empty_pattern() {
        let kmp = KnuthMorrisPratt::new(b"");
        assert_eq!(kmp.find(b"abc"), Some(0));
        assert_eq!(kmp.find(b""), Some(0));
    }

    #[test]
    fn test_kmp_find_all_overlapping() {
        let kmp = KnuthMorrisPratt::new(b"aa");
        assert_eq!(kmp.find_all(b"aaaa"), vec![0, 1, 2]);
    }

    #[test]
    fn failure_table() {
        assert_eq!(&*build_failure_table(b""), &[-1]);
        assert_eq!(&*build_failure_table(b"a"), &[-1, 0]);
        assert_eq!(&*build_failure_table(b"abab"), &[-1, 0, 0, 1, 2]);
        assert_eq!(&*build_failure_table(b"aabaaab"), &[-1, 0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(
            &*build_failure_table(b"ABABCABAB"),
            &[-1, 0, 0, 1, 2, 0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn inspector_sees_failure_table() {
        let mut recorder = Recorder::default();
        let kmp = KnuthMorrisPratt::with_inspector(b"aab", &mut recorder);

        assert_eq!(kmp.pattern(), b"aab");
        assert_eq!(recorder.pattern_length, Some(3));
        assert_eq!(recorder.failure, Some(vec![-1, 0, 1, 0]));
        assert_eq!(recorder.skip, None);
    }

    #[test]
    fn works_without_hash_or_ordering() {
        #[derive(Debug, Clone, PartialEq)]
        struct Reading(f64);

        let corpus: Vec<Reading> = [0.5, 1.5, 2.5, 1.5, 2.5, 3.5]
            .into_iter()
            .map(Reading)
            .collect();
        let pattern = [Reading(1.5), Reading(2.5), Reading(3.5)];

        let kmp = KnuthMorrisPratt::new(&pattern);
        assert_eq!(kmp.find(&corpus), Some(3));
        assert_eq!(kmp.find(&corpus[..5]), None);
    }
}
