//! An ordered set implemented with an AVL tree.
//!
//! The tree lives in an index arena: nodes are addressed by stable
//! integer handles instead of pointers, parent links included, so the
//! whole structure is safe code, freed slots are recycled through a
//! free list and teardown never recurses.
//!
//! Besides the usual iterators the set hands out bidirectional
//! [`Cursor`]s that navigate in sorted order in both directions and
//! carry a distinguished past-the-end position.
//!
//! ```
//! use ordset::OrdSet;
//!
//! let mut set = OrdSet::new();
//! set.insert(2);
//! set.insert(1);
//! set.insert(3);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! let mut cursor = set.lower_bound(&2);
//! assert_eq!(cursor.get(), Some(&2));
//! cursor.move_next();
//! assert_eq!(cursor.get(), Some(&3));
//! ```

mod arena;
mod iter;
mod set;

pub use iter::{Cursor, IntoIter, Iter};
pub use set::OrdSet;
