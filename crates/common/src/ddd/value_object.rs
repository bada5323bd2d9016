//! Value objects: equality and ordering by value, not identity.

use std::hash::Hash;

/// An immutable, identity-less type compared by its field values.
///
/// Implementors supply their comparison fields once, as an ordered tuple;
/// [`impl_value_object!`](crate::impl_value_object) derives equality,
/// lexicographic ordering and hashing from it. `Option` components sort
/// `None` before any value.
pub trait ValueObject {
    /// The ordered comparison fields.
    type Components: Ord + Hash;

    /// Returns the comparison fields in significance order.
    fn equality_components(&self) -> Self::Components;
}

/// Implements `PartialEq`, `Eq`, `PartialOrd`, `Ord` and `Hash` for a
/// [`ValueObject`] in terms of its equality components.
#[macro_export]
macro_rules! impl_value_object {
    ($ty:ty) => {
        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::ddd::ValueObject::equality_components(self)
                    == $crate::ddd::ValueObject::equality_components(other)
            }
        }

        impl ::std::cmp::Eq for $ty {}

        impl ::std::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $ty {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                ::std::cmp::Ord::cmp(
                    &$crate::ddd::ValueObject::equality_components(self),
                    &$crate::ddd::ValueObject::equality_components(other),
                )
            }
        }

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(
                    &$crate::ddd::ValueObject::equality_components(self),
                    state,
                )
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[derive(Debug, Clone)]
    struct Address {
        city: String,
        house: Option<u32>,
    }

    impl ValueObject for Address {
        type Components = (String, Option<u32>);

        fn equality_components(&self) -> Self::Components {
            (self.city.clone(), self.house)
        }
    }

    crate::impl_value_object!(Address);

    fn address(city: &str, house: Option<u32>) -> Address {
        Address {
            city: city.to_string(),
            house,
        }
    }

    #[test]
    fn test_equal_components_are_equal() {
        assert_eq!(address("Moscow", Some(1)), address("Moscow", Some(1)));
        assert_ne!(address("Moscow", Some(1)), address("Moscow", Some(2)));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(address("A", Some(9)) < address("B", Some(1)));
        assert!(address("A", Some(1)) < address("A", Some(2)));
    }

    #[test]
    fn test_none_sorts_first() {
        assert!(address("A", None) < address("A", Some(0)));
    }

    #[test]
    fn test_hash_follows_components() {
        let mut set = HashSet::new();
        set.insert(address("A", Some(1)));
        set.insert(address("A", Some(1)));
        set.insert(address("A", None));
        assert_eq!(set.len(), 2);
    }
}
