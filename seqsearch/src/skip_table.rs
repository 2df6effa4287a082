use std::{collections::HashMap, hash::Hash, marker::PhantomData};

use crate::symbol::SmallSymbol;

/// Bad-character table: maps a symbol to a shift value, answering a fixed
/// default for symbols that were never inserted.
///
/// Tables are filled once while a matcher is built and only read afterwards.
pub trait SkipTable<T> {
    /// Creates an empty table. `capacity` is only a hint; dense tables
    /// always cover the whole alphabet.
    fn with_capacity_and_default(capacity: usize, default: isize) -> Self;

    /// Records `value` for `symbol`, overwriting any earlier value.
    fn insert(&mut self, symbol: &T, value: isize);

    fn get(&self, symbol: &T) -> isize;

    fn default_value(&self) -> isize;

    /// Every symbol holding a non-default value.
    fn entries(&self) -> Vec<(T, isize)>;
}

/// Array-backed table for [`SmallSymbol`]s, one slot per possible value.
#[derive(Debug, Clone)]
pub struct DenseSkipTable<T> {
    table: Box<[isize]>,
    default: isize,
    _marker: PhantomData<T>,
}

impl<T: SmallSymbol> SkipTable<T> for DenseSkipTable<T> {
    fn with_capacity_and_default(_capacity: usize, default: isize) -> Self {
        Self {
            table: vec![default; T::CARDINALITY].into_boxed_slice(),
            default,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    fn insert(&mut self, symbol: &T, value: isize) {
        self.table[symbol.to_index()] = value;
    }

    #[inline(always)]
    fn get(&self, symbol: &T) -> isize {
        self.table[symbol.to_index()]
    }

    fn default_value(&self) -> isize {
        self.default
    }

    fn entries(&self) -> Vec<(T, isize)> {
        self.table
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != self.default)
            .map(|(index, &value)| (T::from_index(index), value))
            .collect()
    }
}

/// Hash map table for any hashable symbol type.
#[derive(Debug, Clone)]
pub struct HashSkipTable<T> {
    map: HashMap<T, isize>,
    default: isize,
}

impl<T: Eq + Hash + Clone> SkipTable<T> for HashSkipTable<T> {
    fn with_capacity_and_default(capacity: usize, default: isize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            default,
        }
    }

    #[inline]
    fn insert(&mut self, symbol: &T, value: isize) {
        self.map.insert(symbol.clone(), value);
    }

    #[inline]
    fn get(&self, symbol: &T) -> isize {
        self.map.get(symbol).copied().unwrap_or(self.default)
    }

    fn default_value(&self) -> isize {
        self.default
    }

    fn entries(&self) -> Vec<(T, isize)> {
        self.map
            .iter()
            .filter(|&(_, &value)| value != self.default)
            .map(|(symbol, &value)| (symbol.clone(), value))
            .collect()
    }
}
