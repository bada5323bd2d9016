//! Identity-based entities.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};

use uuid::Uuid;

/// An identifier type with a distinguished "not yet assigned" value.
pub trait Identifier: Clone + Ord + Hash + Debug + Display {
    /// Returns true if this is the type's default (unassigned) value.
    fn is_default(&self) -> bool;
}

impl Identifier for Uuid {
    fn is_default(&self) -> bool {
        self.is_nil()
    }
}

impl Identifier for String {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl Identifier for i64 {
    fn is_default(&self) -> bool {
        *self == 0
    }
}

/// An object defined by its identity rather than its attributes.
///
/// Two entities are the same only if they have the same type tag and the
/// same assigned identifier. Transient entities equal nothing but themselves.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Identifier;

    /// Returns the type tag compared before identifiers.
    fn entity_type() -> &'static str;

    /// Returns the identifier, or `None` if none was assigned.
    fn id(&self) -> Option<&Self::Id>;

    /// Returns true if the entity has no durable identifier yet.
    fn is_transient(&self) -> bool {
        self.id().is_none_or(Identifier::is_default)
    }
}

/// Identity equality across entity types sharing an identifier type.
pub fn same_identity<A, B>(a: &A, b: &B) -> bool
where
    A: Entity,
    B: Entity<Id = A::Id>,
{
    if std::ptr::addr_eq(a, b) {
        return true;
    }
    if A::entity_type() != B::entity_type() || a.is_transient() || b.is_transient() {
        return false;
    }
    a.id() == b.id()
}

/// Orders two entities of the same type by identifier.
///
/// Returns `None` when either identifier is absent. Default identifiers are
/// still ordered by value, except that two distinct transient entities with
/// the same default identifier are unordered, matching `PartialEq`.
pub fn compare<A: Entity>(a: &A, b: &A) -> Option<Ordering> {
    if std::ptr::eq(a, b) {
        return Some(Ordering::Equal);
    }
    match (a.id(), b.id()) {
        (Some(left), Some(right)) => match left.cmp(right) {
            Ordering::Equal if left.is_default() => None,
            ordering => Some(ordering),
        },
        _ => None,
    }
}

/// Hashes the type tag together with the identifier.
pub fn hash_identity<A: Entity, H: Hasher>(entity: &A, state: &mut H) {
    A::entity_type().hash(state);
    entity.id().hash(state);
}

/// Implements `PartialEq`, `PartialOrd` and `Hash` for an [`Entity`] in
/// terms of its identity.
#[macro_export]
macro_rules! impl_entity_identity {
    ($ty:ty) => {
        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::ddd::entity::same_identity(self, other)
            }
        }

        impl ::std::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                $crate::ddd::entity::compare(self, other)
            }
        }

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $crate::ddd::entity::hash_identity(self, state)
            }
        }
    };
}
