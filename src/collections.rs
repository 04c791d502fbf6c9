mod collection;
mod error;
mod index;
mod set;

pub use collection::Collection;
pub use error::CopyToError;
pub use index::start_position;

pub use set::KeySet;

pub use hashbrown::hash_set::{Drain, IntoIter, Iter};
pub use hashbrown::DefaultHashBuilder;
