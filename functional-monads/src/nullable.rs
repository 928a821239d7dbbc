use crate::Maybe;

/// Types that have a dedicated "no value" inhabitant.
///
/// A plain `T` in rust always carries a value, so most types never need this.
/// It exists for the few types that do have an absence marker, so that
/// [`crate::try_just`] can refuse to wrap one.
///
/// ```rust
/// use functional_monads::Nullable;
///
/// assert!(None::<u8>.is_null());
/// assert!(!Some(0u8).is_null());
/// assert!(std::ptr::null::<u8>().is_null());
/// ```
pub trait Nullable {
    /// true if this value is the absence marker of its type
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for Maybe<T> {
    fn is_null(&self) -> bool {
        self.is_nothing()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}
