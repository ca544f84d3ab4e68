use std::marker::PhantomData;

/// A typed reference to a flag registered on a [`Parser`](./struct.Parser.html).
///
/// Handles are returned by [`Parser::add`](./struct.Parser.html#method.add) and are used to read the flag's value after parsing.
/// A handle is only meaningful to the parser which created it; any other parser rejects it.
pub struct FlagHandle<T> {
    parser: usize,
    index: usize,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> FlagHandle<T> {
    pub(crate) fn new(parser: usize, index: usize) -> Self {
        Self {
            parser,
            index,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn parser(&self) -> usize {
        self.parser
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

// Not derived, since the derives would bound `T`.
impl<T> Clone for FlagHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FlagHandle<T> {}

impl<T> PartialEq for FlagHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.parser == other.parser && self.index == other.index
    }
}

impl<T> Eq for FlagHandle<T> {}

impl<T> std::fmt::Debug for FlagHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FlagHandle<{t}>({p}:{i})",
            t = std::any::type_name::<T>(),
            p = self.parser,
            i = self.index
        )
    }
}
