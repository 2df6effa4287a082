use std::fmt::Debug;

use log::debug;

/// Receives the tables a matcher derives from its pattern, once, right after
/// they are built. Every method defaults to doing nothing.
pub trait Inspector<T> {
    fn pattern_length(&mut self, _len: usize) {}
    fn skip_table(&mut self, _entries: &[(T, isize)], _default: isize) {}
    fn suffix_table(&mut self, _table: &[usize]) {}
    fn failure_table(&mut self, _table: &[isize]) {}
}

/// The inspector used when none is supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInspector;

impl<T> Inspector<T> for NoInspector {}

/// Dumps tables through the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogInspector;

impl<T: Debug> Inspector<T> for LogInspector {
    fn pattern_length(&mut self, len: usize) {
        debug!("pattern length: {len}");
    }

    fn skip_table(&mut self, entries: &[(T, isize)], default: isize) {
        debug!("skip table (default {default}, {} entries):", entries.len());
        for (symbol, value) in entries {
            debug!("  {symbol:?}: {value}");
        }
    }

    fn suffix_table(&mut self, table: &[usize]) {
        // Only entries that differ from the whole-pattern shift are interesting.
        let Some(&first) = table.first() else {
            return;
        };
        debug!("suffix table ({} entries):", table.len());
        debug!("  0: {first}");
        for (i, value) in table.iter().enumerate().skip(1) {
            if *value != first {
                debug!("  {i}: {value}");
            }
        }
    }

    fn failure_table(&mut self, table: &[isize]) {
        debug!("failure table {}: {table:?}", table.len());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Keeps copies of everything it is shown.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder<T> {
        pub pattern_length: Option<usize>,
        pub skip: Option<(Vec<(T, isize)>, isize)>,
        pub suffix: Option<Vec<usize>>,
        pub failure: Option<Vec<isize>>,
    }

    impl<T: Clone> Inspector<T> for Recorder<T> {
        fn pattern_length(&mut self, len: usize) {
            self.pattern_length = Some(len);
        }

        fn skip_table(&mut self, entries: &[(T, isize)], default: isize) {
            self.skip = Some((entries.to_vec(), default));
        }

        fn suffix_table(&mut self, table: &[usize]) {
            self.suffix = Some(table.to_vec());
        }

        fn failure_table(&mut self, table: &[isize]) {
            self.failure = Some(table.to_vec());
        }
    }

    #[test]
    fn log_inspector_accepts_empty_tables() {
        let mut inspector = LogInspector;
        Inspector::<u8>::suffix_table(&mut inspector, &[]);
        Inspector::<u8>::failure_table(&mut inspector, &[-1]);
        Inspector::<u8>::skip_table(&mut inspector, &[], 0);
    }
}
