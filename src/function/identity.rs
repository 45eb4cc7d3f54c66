/// Returns the value unchanged.
///
/// Handy wherever an operation needs a function but no transformation is
/// wanted.
///
/// # Examples
///
/// ```
/// use underbar::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
