//! Extension point identity and declaration metadata

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ports::ExtensionPoint;

/// Declaration metadata attached to an extension point
///
/// Carries the default provider key used when a lookup supplies none.
/// An empty default key is allowed; such an extension point then requires an
/// explicit key on every lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtensionPointDeclaration {
    default_key: &'static str,
}

impl ExtensionPointDeclaration {
    /// Declare an extension point with the given default provider key
    pub const fn new(default_key: &'static str) -> Self {
        Self { default_key }
    }

    /// Declare an extension point without a default provider key
    pub const fn without_default() -> Self {
        Self { default_key: "" }
    }

    /// The default provider key, if one was declared
    pub fn default_key(&self) -> Option<&'static str> {
        if self.default_key.is_empty() {
            None
        } else {
            Some(self.default_key)
        }
    }
}

/// Runtime identity of an extension point
///
/// Equality and hashing use the [`TypeId`] of the trait object; the
/// fully-qualified name is what discovery resources are named after.
#[derive(Clone, Copy)]
pub struct ExtensionPointId {
    name: &'static str,
    type_id: TypeId,
    type_name: &'static str,
}

impl ExtensionPointId {
    /// Identity of the extension point `I`
    ///
    /// Usable as a `fn() -> ExtensionPointId` pointer in static provider
    /// descriptors: `ExtensionPointId::of::<dyn Codec>`.
    pub fn of<I: ?Sized + ExtensionPoint>() -> Self {
        Self {
            name: I::name(),
            type_id: TypeId::of::<I>(),
            type_name: std::any::type_name::<I>(),
        }
    }

    /// Fully-qualified name of the extension point
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type id of the extension point's trait object type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Compiler-reported name of the implementing type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the extension point is a trait object (`dyn Trait`)
    ///
    /// Concrete types cannot serve as extension points: there would be no
    /// way for independent providers to implement them.
    pub fn is_trait_object(&self) -> bool {
        self.type_name.starts_with("dyn ")
    }
}

impl PartialEq for ExtensionPointId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ExtensionPointId {}

impl Hash for ExtensionPointId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ExtensionPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionPointId")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl fmt::Display for ExtensionPointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
