use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::NoValuePresent;

/// Wraps a value which is present or not.
///
/// `Absent` carries no payload, so every absent value of every payload type
/// is the same zero-sized state; no shared singleton or cast is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    Present(T),
    Absent,
}

impl<T> Optional<T> {
    /// Constructs a present `Optional` holding `value`.
    pub fn of(value: T) -> Self {
        Optional::Present(value)
    }

    /// Constructs a present `Optional` if `value` is `Some`, absent otherwise.
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Optional::Present(v),
            None => Optional::Absent,
        }
    }

    /// Constructs an absent `Optional`.
    pub const fn absent() -> Self {
        Optional::Absent
    }

    /// Constructs an absent `Optional`.
    pub const fn empty() -> Self {
        Optional::Absent
    }

    /// Returns true if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns true if no value is present.
    pub fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Unwraps the value, panicking if absent.
    pub fn get(self) -> T {
        match self {
            Optional::Present(val) => val,
            Optional::Absent => panic!("no value present"),
        }
    }

    /// Unwraps the value, or returns [`NoValuePresent`] if absent.
    pub fn try_get(self) -> Result<T, NoValuePresent> {
        match self {
            Optional::Present(val) => Ok(val),
            Optional::Absent => Err(NoValuePresent),
        }
    }

    /// Returns the value if present, or `None`. Never fails.
    pub fn or_null(self) -> Option<T> {
        match self {
            Optional::Present(val) => Some(val),
            Optional::Absent => None,
        }
    }

    /// Returns the value if present, or else `other`.
    pub fn or(self, other: T) -> T {
        match self {
            Optional::Present(val) => val,
            Optional::Absent => other,
        }
    }

    /// Returns the value if present, or else the one from the supplier.
    pub fn or_else<F: FnOnce() -> T>(self, supplier: F) -> T {
        match self {
            Optional::Present(val) => val,
            Optional::Absent => supplier(),
        }
    }

    /// Returns the value if present, or else fails with the given error.
    ///
    /// The error is propagated verbatim, never wrapped or translated.
    pub fn or_throw<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Present(val) => Ok(val),
            Optional::Absent => Err(err),
        }
    }

    /// Returns the value if present, or else fails with the supplied error.
    /// The supplier is invoked only on the absent path.
    pub fn or_throw_with<E, F: FnOnce() -> E>(self, supplier: F) -> Result<T, E> {
        match self {
            Optional::Present(val) => Ok(val),
            Optional::Absent => Err(supplier()),
        }
    }

    /// Maps `Optional<T>` to `Optional<U>` by applying `f` to a present value.
    /// `f` is not invoked when absent.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Present(val) => Optional::Present(f(val)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Returns `f`'s result directly if present; short-circuits to absent
    /// without invoking `f` otherwise.
    pub fn flat_map<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self {
            Optional::Present(val) => f(val),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Keeps a present value only if the predicate holds for it.
    /// The predicate is not invoked when absent.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Optional::Present(val) if predicate(&val) => Optional::Present(val),
            _ => Optional::Absent,
        }
    }

    /// Converts a present value to another payload type, yielding absent
    /// when the conversion fails.
    pub fn narrow<U>(self) -> Optional<U>
    where
        T: TryInto<U>,
    {
        match self {
            Optional::Present(val) => match val.try_into() {
                Ok(converted) => Optional::Present(converted),
                Err(_) => Optional::Absent,
            },
            Optional::Absent => Optional::Absent,
        }
    }

    /// Invokes the consumer if a value is present.
    pub fn if_present<F: FnOnce(&T)>(&self, consumer: F) {
        if let Optional::Present(val) = self {
            consumer(val);
        }
    }

    /// Invokes the action if no value is present.
    pub fn if_absent<F: FnOnce()>(&self, action: F) {
        if self.is_absent() {
            action();
        }
    }

    /// Consumes the value if present, or else calls the action.
    /// Exactly one of the two runs.
    pub fn if_present_or_else<F: FnOnce(&T), G: FnOnce()>(&self, consumer: F, action: G) {
        match self {
            Optional::Present(val) => consumer(val),
            Optional::Absent => action(),
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(val) => Optional::Present(val),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Present(val) => Optional::Present(val),
            Optional::Absent => Optional::Absent,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.or_null()
    }
}

// Present hashes the payload alone; absent hashes a zero byte. Consistent
// with the derived equality: equal values hash equal.
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Optional::Present(val) => val.hash(state),
            Optional::Absent => state.write_u8(0),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(val) => write!(f, "Optional[{val}]"),
            Optional::Absent => f.write_str("Optional.empty"),
        }
    }
}
