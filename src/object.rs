//! The universal base type, [`Object`], and the [`Request`] it answers.

use ::core::any::{Any, TypeId};

/// The base type every checkable value derives from.
///
/// An `Object` answers one question: "can you be seen as an `R`?" It does so
/// by [offering][Request::provide] itself, typed as each of the types it
/// wants to match, to the [`Request`] it is handed.
///
/// Every `Object` is always a `dyn Object` and a `dyn Any`, on top of whatever
/// it offers. The default implementation only offers `Self`, which amounts to
/// the exact-type matching of `dyn Any`. Base "classes" and interfaces are
/// expressed as `dyn Trait` types, and are declared through [`object!`]:
///
/// ```rust
/// use ::object_is::prelude::*;
///
/// trait Animal {}
/// trait CanBark {}
///
/// struct Dog;
/// impl Animal for Dog {}
/// impl CanBark for Dog {}
///
/// object! {
///     impl Object for Dog as dyn Animal, dyn CanBark;
/// }
///
/// let source: &dyn Object = &Dog;
/// assert!(source.is::<Dog>());
/// assert!(source.is::<dyn Animal>());
/// assert!(source.is::<dyn CanBark>());
/// assert!(source.is::<dyn Object>());
/// assert!(source.is::<String>().not());
/// ```
///
/// Hand-written implementations should only ever offer `self`: the narrowed
/// reference is expected to be the very same object as the source.
pub
trait Object : Any + Upcast {
    fn provide<'r>(
        self: &'r Self,
        request: &mut Request<'r>,
    )
    {
        request.provide::<Self>(self);
    }
}

/// `&Self` as the universal types, implemented for every (sized) [`Object`].
#[doc(hidden)] /** Not part of the public API */ pub
trait Upcast {
    fn as_object(&self)
      -> &(dyn 'static + Object)
    ;

    fn as_any(&self)
      -> &(dyn 'static + Any)
    ;
}

impl<T : Object> Upcast for T {
    fn as_object(&self)
      -> &(dyn 'static + Object)
    {
        self
    }

    fn as_any(&self)
      -> &(dyn 'static + Any)
    {
        self
    }
}

/// A pending "is it an `R`?" question, with `R` erased.
///
/// Only ever seen through a `&mut Request<'r>`, handed to
/// [`Object::provide`].
#[repr(transparent)]
pub
struct Request<'r>(
    // invariant in `'r`, lest a shorter-lived reference be smuggled in.
    dyn 'r + Erased<'r>,
);

pub(crate)
trait Erased<'r> {
    fn target(&self)
      -> TypeId
    ;

    fn is_vacant(&self)
      -> bool
    ;
}

/// The concrete, typed, output slot behind a [`Request`].
pub(crate)
struct Tagged<'r, R : ?Sized + 'static>(
    pub(crate) Option<&'r R>,
);

impl<'r, R : ?Sized + 'static> Erased<'r> for Tagged<'r, R> {
    fn target(&self)
      -> TypeId
    {
        TypeId::of::<R>()
    }

    fn is_vacant(&self)
      -> bool
    {
        self.0.is_none()
    }
}

impl<'r> Request<'r> {
    pub(crate)
    fn new<'slot, R : ?Sized + 'static>(
        tagged: &'slot mut Tagged<'r, R>,
    ) -> &'slot mut Request<'r>
    {
        let erased: &'slot mut (dyn 'r + Erased<'r>) = tagged;
        unsafe {
            // Safety: `#[repr(transparent)]` over that very `dyn Erased`.
            &mut *(erased as *mut (dyn 'r + Erased<'r>) as *mut Request<'r>)
        }
    }

    fn downcast<R : ?Sized + 'static>(
        self: &'_ mut Request<'r>,
    ) -> Option<&'_ mut Tagged<'r, R>>
    {
        let _checked_eq @ true = self.0.target() == TypeId::of::<R>()
        else {
            return None;
        };
        Some(unsafe {
            // Safety: `Tagged` is the only `Erased` implementor, and the
            // `TypeId`s have just been checked for equality. `'r` is the same
            // on both sides since `Request` is invariant in it.
            &mut *(self as *mut Request<'r>).cast::<Tagged<'r, R>>()
        })
    }

    /// Offer `value` as an answer, should the question be about `R`.
    ///
    /// The first offer wins: subsequent ones are ignored. Chains.
    pub
    fn provide<R : ?Sized + 'static>(
        self: &'_ mut Request<'r>,
        value: &'r R,
    ) -> &'_ mut Request<'r>
    {
        if let Some(tagged) = self.downcast::<R>() {
            tagged.0.get_or_insert(value);
        }
        self
    }

    /// Whether offering an `R` now would answer this request.
    pub
    fn would_be_satisfied_by<R : ?Sized + 'static>(
        self: &'_ Request<'r>,
    ) -> bool
    {
        self.0.target() == TypeId::of::<R>() && self.0.is_vacant()
    }
}

/// Asks `source` whether it can be seen as an `R`.
///
/// This is the primitive behind every [`ObjectIs`][crate::ObjectIs] method.
pub
fn narrow<'r, T, R>(
    source: &'r T,
) -> Option<&'r R>
where
    T : ?Sized + Object,
    R : ?Sized + 'static,
{
    let mut tagged = Tagged::<'r, R>(None);
    let request = Request::new(&mut tagged);
    source.provide(request);
    request
        .provide::<dyn Object>(source.as_object())
        .provide::<dyn Any>(source.as_any())
    ;
    tagged.0
}

#[cfg(feature = "core-impls")]
crate::object! {
    impl Object for () as dyn ::core::fmt::Debug;
}

#[cfg(feature = "core-impls")]
macro_rules! displayable {(
    $($T:ty),* $(,)?
) => (
    crate::object! {$(
        impl Object for $T as
            dyn ::core::fmt::Debug,
            dyn ::core::fmt::Display
        ;
    )*}
)}

#[cfg(feature = "core-impls")]
displayable! {
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    &'static str,
    ::std::string::String,
}
