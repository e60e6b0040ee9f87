//! Key index built from discovered provider classes

use std::collections::HashMap;

use extreg_domain::{KeyClass, ProviderClass};
use tracing::warn;

use super::discovery::DiscoveredClass;

/// Provider classes by key plus the key-class table
///
/// Built in discovery order. A key declared twice maps to the later class.
/// A key-class registered twice keeps its first key.
#[derive(Debug, Default)]
pub struct KeyIndex {
    provider_classes: HashMap<&'static str, &'static ProviderClass>,
    key_classes: Vec<(&'static KeyClass, &'static str)>,
}

impl KeyIndex {
    /// Index the classes of one extension point, in discovery order
    pub fn build(extension_point: &str, discovered: &[DiscoveredClass]) -> Self {
        let mut index = Self::default();

        for found in discovered {
            let class = found.class;
            let key = class.key();

            if let Some(key_class) = class.key_class() {
                if !index
                    .key_classes
                    .iter()
                    .any(|(registered, _)| *registered == key_class)
                {
                    index.key_classes.push((key_class, key));
                }
            }

            if let Some(replaced) = index.provider_classes.insert(key, class) {
                if !std::ptr::eq(replaced, class) {
                    warn!(
                        extension_point,
                        key,
                        replaced = replaced.name,
                        class = class.name,
                        origin = found.origin.as_str(),
                        line = found.line,
                        "Provider key declared twice, the later class wins"
                    );
                }
            }
        }

        index
    }

    /// Class registered under `key`, with the key as stored in the index
    pub fn get_key_value(&self, key: &str) -> Option<(&'static str, &'static ProviderClass)> {
        self.provider_classes
            .get_key_value(key)
            .map(|(&key, &class)| (key, class))
    }

    /// Class registered under `key`
    pub fn get(&self, key: &str) -> Option<&'static ProviderClass> {
        self.provider_classes.get(key).copied()
    }

    /// Key registered for the first key-class assignable from `key_class`
    pub fn key_for_class(&self, key_class: &KeyClass) -> Option<&'static str> {
        self.key_classes
            .iter()
            .find(|(registered, _)| registered.is_assignable_from(key_class))
            .map(|(_, key)| *key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.provider_classes.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Registered key-classes and their keys, in registration order
    pub fn key_classes(&self) -> &[(&'static KeyClass, &'static str)] {
        &self.key_classes
    }

    /// Whether a class is registered under `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.provider_classes.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.provider_classes.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.provider_classes.is_empty()
    }
}
