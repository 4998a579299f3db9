//! Opaque identifiers for book entities.
//!
//! Ids are assigned once when an entity is created and never derived from
//! content. They are not written to disk, so a reload assigns fresh ids and
//! [`Selection::reselect`](super::Selection::reselect) bridges the gap.

use std::fmt;

use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Allocate a fresh, never-reused identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Stable identity of a [`Chapter`](super::Chapter).
    ChapterId
);

entity_id!(
    /// Stable identity of a [`SubChapter`](super::SubChapter).
    SubChapterId
);

entity_id!(
    /// Stable identity of a [`Persona`](super::Persona).
    PersonaId
);
