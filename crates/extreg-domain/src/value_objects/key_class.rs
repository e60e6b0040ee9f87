//! Key-class marker descriptors

use std::fmt;
use std::hash::{Hash, Hasher};

/// Marker type that a provider can be looked up by
///
/// A key-class stands in for a type hierarchy: it names itself and lists the
/// key-classes it extends. Lookups by key-class match any registered
/// key-class that [`is_assignable_from`](KeyClass::is_assignable_from) the
/// queried one.
///
/// Key-classes compare by address, so two declarations sharing a name are
/// still distinct. Declare them as `static` items, never `const`.
///
/// ```
/// use extreg_domain::KeyClass;
///
/// static SHAPE: KeyClass = KeyClass::new("app::Shape");
/// static CIRCLE: KeyClass = KeyClass::extending("app::Circle", &[&SHAPE]);
///
/// assert!(SHAPE.is_assignable_from(&CIRCLE));
/// assert!(!CIRCLE.is_assignable_from(&SHAPE));
/// ```
pub struct KeyClass {
    name: &'static str,
    supertypes: &'static [&'static KeyClass],
}

impl KeyClass {
    /// A key-class with no supertypes
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            supertypes: &[],
        }
    }

    /// A key-class extending the given key-classes
    pub const fn extending(name: &'static str, supertypes: &'static [&'static KeyClass]) -> Self {
        Self { name, supertypes }
    }

    /// Fully-qualified name of the key-class
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Direct supertypes of the key-class
    pub fn supertypes(&self) -> &'static [&'static KeyClass] {
        self.supertypes
    }

    /// Whether `other` is this key-class or transitively extends it
    pub fn is_assignable_from(&self, other: &KeyClass) -> bool {
        self == other
            || other
                .supertypes
                .iter()
                .any(|supertype| self.is_assignable_from(supertype))
    }
}

impl PartialEq for KeyClass {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for KeyClass {}

impl Hash for KeyClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self, state);
    }
}

impl fmt::Debug for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyClass")
            .field("name", &self.name)
            .field(
                "supertypes",
                &self.supertypes.iter().map(|s| s.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
