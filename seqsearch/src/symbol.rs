use crate::skip_table::{DenseSkipTable, HashSkipTable, SkipTable};

/// A symbol with a small, fixed-width unsigned representation.
///
/// Every value maps to a distinct index in `0..CARDINALITY`, which lets
/// [`DenseSkipTable`] replace hashing with a plain array lookup.
pub trait SmallSymbol: Copy {
    const CARDINALITY: usize;

    fn to_index(self) -> usize;
    fn from_index(index: usize) -> Self;
}

impl SmallSymbol for u8 {
    const CARDINALITY: usize = 1 << u8::BITS;

    #[inline(always)]
    fn to_index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    fn from_index(index: usize) -> Self {
        index as u8
    }
}

impl SmallSymbol for i8 {
    const CARDINALITY: usize = 1 << i8::BITS;

    #[inline(always)]
    fn to_index(self) -> usize {
        self as u8 as usize
    }

    #[inline(always)]
    fn from_index(index: usize) -> Self {
        index as u8 as i8
    }
}

/// Names the skip table strategy a symbol type gets when the caller does not
/// pick one, e.g. through [`BoyerMoore::new`](crate::BoyerMoore::new).
///
/// Types without an impl can still be searched by naming a table explicitly
/// with `with_strategy`.
pub trait Symbol: Eq + Clone {
    type Table: SkipTable<Self>;
}

macro_rules! dense_symbol {
    ($($t:ty),*) => {
        $(impl Symbol for $t {
            type Table = DenseSkipTable<$t>;
        })*
    };
}

macro_rules! hashed_symbol {
    ($($t:ty),*) => {
        $(impl Symbol for $t {
            type Table = HashSkipTable<$t>;
        })*
    };
}

dense_symbol!(u8, i8);
hashed_symbol!(u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, char);
