/// `true` if no element satisfies `pred`. An empty input gives `true`.
pub fn none_of<I, P>(iter: I, mut pred: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in iter {
        if pred(&item) {
            return false;
        }
    }
    true
}

/// `true` if no element equals `value`. An empty input gives `true`.
pub fn none_of_equal<I, V>(iter: I, value: &V) -> bool
where
    I: IntoIterator,
    V: PartialEq<I::Item> + ?Sized,
{
    none_of(iter, |item| *value == *item)
}
