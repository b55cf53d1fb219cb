//! Collection helpers.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

/// Separator used by [`join`].
pub const JOIN_SEPARATOR: &str = " / ";

/// Copy of `items` without any element equal to `item`.
#[must_use]
pub fn remove<T: PartialEq + Clone>(items: &[T], item: &T) -> Vec<T> {
    items.iter().filter(|other| *other != item).cloned().collect()
}

/// Copy of `items` without any element contained in `unwanted`.
#[must_use]
pub fn remove_all<T: PartialEq + Clone>(items: &[T], unwanted: &[T]) -> Vec<T> {
    items
        .iter()
        .filter(|other| !unwanted.contains(other))
        .cloned()
        .collect()
}

/// Anything that can be asked whether it holds nothing.
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(IsEmpty::is_empty_value)
    }
}

#[must_use]
pub fn not_empty<T: IsEmpty + ?Sized>(collection: &T) -> bool {
    !collection.is_empty_value()
}

/// Join display values with ` / `. Absent input joins to an empty string.
#[must_use]
pub fn join<T: Display>(items: Option<&[T]>) -> String {
    items.map_or_else(String::new, |items| {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(JOIN_SEPARATOR)
    })
}
