macro_rules! compile_fail {(
    fn $fname:ident $($rest:tt)*
) => (
    #[cfg(doctest)]
    /// ```rust, compile_fail
    /// use ::object_is::prelude::*;
    ///
    #[doc = stringify!( fn main $($rest)* )]
    #[doc = "\n```"]
    fn $fname() {}
)}
