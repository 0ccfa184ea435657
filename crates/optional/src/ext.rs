//! Construction helpers for [`Optional`].
//!
//! These keep call sites terse where a value or a `core::option::Option`
//! needs lifting into the container without naming the type.

use crate::optional::Optional;

mod private {
    pub trait Sealed {}

    impl<T> Sealed for Option<T> {}
}

/// Wraps any value in a present [`Optional`].
pub trait PresentExt: Sized {
    fn present(self) -> Optional<Self> {
        Optional::Present(self)
    }
}

impl<T> PresentExt for T {}

/// Lifts a `core::option::Option` into an [`Optional`].
pub trait OptionalExt: private::Sealed {
    type Inner;

    fn into_optional(self) -> Optional<Self::Inner>;
}

impl<T> OptionalExt for Option<T> {
    type Inner = T;

    fn into_optional(self) -> Optional<T> {
        Optional::of_nullable(self)
    }
}
