//! Domain models for the travel wishlist.
//!
//! - [`Place`]: a destination with a name and a visited flag. Places are
//!   created on the wishlist, later marked visited, and never deleted.
//! - [`CreatePlaceInput`]: the form body of the add-place request.
//! - [`FixtureRecord`]: one entry of a seed-data file.

mod fixture;
mod place;

pub use fixture::*;
pub use place::*;
