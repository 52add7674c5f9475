//! The set of tag names the parser recognizes.
//!
//! A [`NameRegistry`] maps lowercase tag names to an opaque render attribute.
//! The parser only ever asks whether a name is present; renderers use the
//! attribute. A registry is immutable once built, so a single instance can be
//! shared by any number of concurrent parses.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use once_cell::sync::Lazy;

use crate::color::{COLOR_NAMES, ConsoleColor};
use crate::error::RegistryError;

static CONSOLE_COLORS: Lazy<NameRegistry<ConsoleColor>> = Lazy::new(|| NameRegistry {
    entries: COLOR_NAMES
        .entries()
        .map(|(name, color)| (name.to_string(), *color))
        .collect(),
});

/// The reference registry of the sixteen console color names.
///
/// Built on first use and shared for the rest of the process.
pub fn default_registry() -> &'static NameRegistry<ConsoleColor> {
    &CONSOLE_COLORS
}

/// An immutable mapping from lowercase tag names to render attributes.
///
/// # Examples
///
/// ```
/// use markup::NameRegistry;
///
/// let registry = NameRegistry::new([("Warn", 1u8), ("info", 2)]).unwrap();
/// assert!(registry.contains("warn"));
/// assert!(registry.contains("INFO"));
/// assert_eq!(registry.get("warn"), Some(&1));
/// assert!(!registry.contains("error"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameRegistry<A> {
    entries: BTreeMap<String, A>,
}

impl<A> NameRegistry<A> {
    /// Build a registry from `(name, attribute)` pairs.
    ///
    /// Names are folded to lowercase. A name that is empty or contains
    /// anything but ASCII letters could never be produced by the tag scanner
    /// and is rejected, as is a name that folds onto an earlier one.
    pub fn new<N, I>(entries: I) -> Result<Self, RegistryError>
    where
        N: AsRef<str>,
        I: IntoIterator<Item = (N, A)>,
    {
        let mut map = BTreeMap::new();
        for (name, attribute) in entries {
            let name = name.as_ref();
            if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Err(RegistryError::InvalidName(name.to_string()));
            }
            match map.entry(name.to_ascii_lowercase()) {
                Entry::Occupied(slot) => {
                    return Err(RegistryError::DuplicateName(slot.key().clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(attribute);
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Check whether `name` is a recognized tag name, ignoring ASCII case.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the attribute registered for `name`, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&A> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.entries.get(&name.to_ascii_lowercase())
        } else {
            self.entries.get(name)
        }
    }

    /// Iterate over the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(name, attribute)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.entries.iter().map(|(name, attr)| (name.as_str(), attr))
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NameRegistry<ConsoleColor> {
    /// A fresh copy of the sixteen console color names.
    pub fn console_colors() -> Self {
        CONSOLE_COLORS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_sixteen_colors() {
        let registry = default_registry();
        assert_eq!(registry.len(), 16);
        for name in [
            "red", "green", "blue", "yellow", "cyan", "white", "gray", "magenta", "black",
            "darkred", "darkgreen", "darkblue", "darkyellow", "darkcyan", "darkgray",
            "darkmagenta",
        ] {
            assert!(registry.contains(name), "missing {}", name);
        }
        assert!(!registry.contains("grey"));
        assert!(!registry.contains("bold"));
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = default_registry();
        assert_eq!(registry.get("DarkRed"), Some(&ConsoleColor::DarkRed));
        assert!(registry.contains("RED"));
    }

    #[test]
    fn names_are_sorted() {
        let registry = NameRegistry::new([("b", ()), ("C", ()), ("a", ())]).unwrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn rejects_non_letter_names() {
        for bad in ["", "dark-red", "red1", "r d", "é"] {
            assert_eq!(
                NameRegistry::new([(bad, ())]),
                Err(RegistryError::InvalidName(bad.to_string()))
            );
        }
    }

    #[test]
    fn rejects_names_that_fold_together() {
        assert_eq!(
            NameRegistry::new([("red", 1), ("RED", 2)]),
            Err(RegistryError::DuplicateName("red".to_string()))
        );
    }

    #[test]
    fn console_colors_matches_default() {
        assert_eq!(&NameRegistry::console_colors(), default_registry());
    }
}
