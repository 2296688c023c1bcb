//! `source.is::<R>()`: is this value an `R`?
//!
//! Rust has no universal base class, so this crate brings one, [`Object`].
//! Any sized `'static` type can become an [`Object`], and declare, through
//! [`object!`], which "base classes" and interfaces (`dyn Trait`s) it can be
//! seen as.
//!
//! ```rust
//! use ::object_is::prelude::*;
//!
//! trait Animal { fn name(&self) -> &str; }
//! trait CanBark {}
//!
//! struct Dog;
//! impl Animal for Dog { fn name(&self) -> &str { "Rex" } }
//! impl CanBark for Dog {}
//!
//! struct Cat;
//! impl Animal for Cat { fn name(&self) -> &str { "Tom" } }
//!
//! object! {
//!     impl Object for Dog as dyn Animal, dyn CanBark;
//!     impl Object for Cat as dyn Animal;
//! }
//!
//! let pets: [&dyn Object; 2] = [&Dog, &Cat];
//! let barkers = pets.iter().filter(|pet| pet.is::<dyn CanBark>()).count();
//! assert_eq!(barkers, 1);
//!
//! if let (true, Some(animal)) = pets[1].is_and_cast::<dyn Animal>() {
//!     assert_eq!(animal.name(), "Tom");
//! }
//!
//! // absence never matches.
//! assert!(::object_is::is::<dyn Animal>(None).not());
//! ```
#![warn(unsafe_op_in_unsafe_fn)]

#[macro_use]
extern crate extension_traits;

#[cfg(doctest)]
#[macro_use]
extern crate macro_rules_attribute;

#[cfg(doctest)]
#[macro_use]
mod utils;

pub use self::{
    is::{ObjectIs, OptionObjectIs, is, is_and_cast},
    object::{Object, Request, narrow},
};

mod declare;

mod is;

mod object;

pub
mod prelude {
    pub use {
        ::core::ops::Not as _,
        crate::{
            object,
            Object,
            ObjectIs,
            OptionObjectIs,
        },
    };
}

#[cfg(any(test, doctest))]
mod tests;
