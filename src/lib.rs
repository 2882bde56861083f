#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

use core::fmt;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod arena;
mod prelude;

pub mod fixture;
pub mod intersect;
pub mod list;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub use arena::Arena;
pub use fixture::Fixture;
pub use fixture::FixtureError;
pub use fixture::Pair;
pub use intersect::Strategy;
pub use intersect::find_intersection;
pub use intersect::find_intersection_with;
pub use list::Node;

/// The error returned when an arena cannot reserve memory for a new chunk.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AllocError;

impl fmt::Display for AllocError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("confluence: failed to allocate memory")
  }
}

impl core::error::Error for AllocError { }
