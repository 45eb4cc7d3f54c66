//! Truthiness of predicate results.

/// Types whose values can be tested as true or false.
///
/// Predicates accepted by [`filter`](super::filter), [`every`](super::every)
/// and friends may return any `Truthy` value, not only `bool`.
///
/// | Type                  | Truthy when                          |
/// |-----------------------|--------------------------------------|
/// | `bool`                | `true`                               |
/// | integers              | non-zero                             |
/// | `f32`, `f64`          | non-zero and not NaN                 |
/// | `str`, `String`       | non-empty                            |
/// | `Option<T>`           | `Some` holding a truthy value        |
/// | `()`                  | never                                |
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0_u8.is_truthy());
/// assert!(!f64::NAN.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some(true).is_truthy());
/// assert!(!None::<bool>.is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
