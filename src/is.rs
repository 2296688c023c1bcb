//! `.is::<R>()` and friends.
//!
//! None of these ever fail: a mismatch, or an absent source, is just a `false`
//! (or a `None`).

use crate::object::{narrow, Object};

/// Type checks on a (present) [`Object`].
#[extension(pub trait ObjectIs)]
impl<T : ?Sized + Object> T {
    /// Whether `self` is an `R`: its exact type, or any of the types it has
    /// been declared as (see [`object!`][crate::object!]).
    ///
    /// ```rust
    /// use ::object_is::prelude::*;
    ///
    /// trait Animal {}
    /// struct Dog;
    /// impl Animal for Dog {}
    /// object! { impl Object for Dog as dyn Animal; }
    ///
    /// let source: &dyn Object = &Dog;
    /// assert!(source.is::<dyn Animal>());
    /// assert!(source.is::<u8>().not());
    /// ```
    fn is<R : ?Sized + 'static>(&self)
      -> bool
    {
        self.cast::<R>().is_some()
    }

    /// `self`, seen as an `R`, if it is one.
    fn cast<R : ?Sized + 'static>(&self)
      -> Option<&R>
    {
        narrow(self)
    }

    /// [`.is::<R>()`][ObjectIs::is] and [`.cast::<R>()`][ObjectIs::cast], at
    /// once: `(true, Some(it))` or `(false, None)`.
    fn is_and_cast<R : ?Sized + 'static>(&self)
      -> (bool, Option<&R>)
    {
        let casted = self.cast::<R>();
        (casted.is_some(), casted)
    }

    /// Out-parameter flavor of [`.is_and_cast()`][ObjectIs::is_and_cast].
    ///
    /// `out` is always overwritten, whatever it held beforehand.
    ///
    /// ```rust
    /// use ::object_is::prelude::*;
    ///
    /// struct Dog;
    /// object! { impl Object for Dog; }
    ///
    /// let (dog, other) = (Dog, Dog);
    /// let mut out: Option<&Dog> = Some(&other);
    /// assert!(dog.is_into(&mut out));
    /// assert!(::core::ptr::eq(out.unwrap(), &dog));
    ///
    /// let mut out: Option<&u8> = Some(&42);
    /// assert!(dog.is_into(&mut out).not());
    /// assert!(out.is_none());
    /// ```
    fn is_into<'r, R : ?Sized + 'static>(
        &'r self,
        out: &mut Option<&'r R>,
    ) -> bool
    {
        *out = self.cast::<R>();
        out.is_some()
    }
}

/// The same type checks, on a possibly absent [`Object`].
///
/// An absent (`None`) source is never anything.
///
/// ```rust
/// use ::object_is::prelude::*;
///
/// let source: Option<&dyn Object> = None;
/// assert!(source.is::<String>().not());
/// assert_eq!(source.is_and_cast::<String>(), (false, None));
///
/// let s = String::from("…");
/// let source: Option<&dyn Object> = Some(&s);
/// assert_eq!(source.cast::<String>(), Some(&s));
/// ```
#[extension(pub trait OptionObjectIs)]
impl<'o, T : ?Sized + Object> Option<&'o T> {
    /// [`ObjectIs::is`], `false` when absent.
    fn is<R : ?Sized + 'static>(self)
      -> bool
    {
        self.cast::<R>().is_some()
    }

    /// [`ObjectIs::cast`], `None` when absent.
    fn cast<R : ?Sized + 'static>(self)
      -> Option<&'o R>
    {
        self.and_then(|source| narrow(source))
    }

    /// [`ObjectIs::is_and_cast`], `(false, None)` when absent.
    fn is_and_cast<R : ?Sized + 'static>(self)
      -> (bool, Option<&'o R>)
    {
        let casted = self.cast::<R>();
        (casted.is_some(), casted)
    }

    /// [`ObjectIs::is_into`]; an absent source writes `None`.
    fn is_into<R : ?Sized + 'static>(
        self,
        out: &mut Option<&'o R>,
    ) -> bool
    {
        *out = self.cast::<R>();
        out.is_some()
    }
}

/// Whether `source` is present, and an `R`.
pub
fn is<R : ?Sized + 'static>(
    source: Option<&dyn Object>,
) -> bool
{
    source.is::<R>()
}

/// Whether `source` is present and an `R`, along with it, seen as an `R`.
pub
fn is_and_cast<'o, R : ?Sized + 'static>(
    source: Option<&'o dyn Object>,
) -> (bool, Option<&'o R>)
{
    source.is_and_cast::<R>()
}
