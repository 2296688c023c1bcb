/// Declares which types an [`Object`][crate::Object] can be seen as.
///
/// The Rust rendition of `class Dog : Animal, ICanBark`: "base classes" and
/// interfaces alike are `dyn Trait`s the type implements.
///
/// ```rust
/// use ::core::fmt::Debug;
/// use ::object_is::prelude::*;
///
/// trait Animal {}
/// trait CanBark {}
///
/// struct Dog;
/// impl Animal for Dog {}
/// impl CanBark for Dog {}
///
/// struct Cat;
/// impl Animal for Cat {}
///
/// #[derive(Debug)]
/// struct Wrapper<T>(T);
///
/// struct Rock;
///
/// object! {
///     impl Object for Dog as dyn Animal, dyn CanBark;
///     impl Object for Cat as dyn Animal;
///     // generics go in brackets.
///     impl[T : 'static + Debug] Object for Wrapper<T> as dyn Debug;
///     // exact type matching only.
///     impl Object for Rock;
/// }
///
/// assert!(Cat.is::<dyn Animal>());
/// assert!(Cat.is::<dyn CanBark>().not());
/// assert!(Wrapper(42).is::<dyn Debug>());
/// assert!(Rock.is::<Rock>());
/// assert!(Rock.is::<dyn Object>());
/// ```
///
/// Every listed type is offered the very same `self`, after `Self` itself.
/// `dyn Object` and `dyn Any` need not be listed: every `Object` is one.
/// There is no transitive inheritance: a `Puppy` wanting to match
/// `dyn Animal` has to list it, even if it already lists a `dyn Dog` trait
/// whose supertrait is `Animal`.
#[macro_export]
macro_rules! object {(
    $(
        impl $([ $($generics:tt)* ])? Object for $T:ty
        $(as $($R:ty),+)?
        ;
    )*
) => (
    $(
        impl $(< $($generics)* >)? $crate::Object for $T {
            fn provide<'__r>(
                self: &'__r Self,
                request: &mut $crate::Request<'__r>,
            )
            {
                request
                    .provide::<Self>(self)
                    $($(
                        .provide::<$R>(self)
                    )+)?
                ;
            }
        }
    )*
)}
