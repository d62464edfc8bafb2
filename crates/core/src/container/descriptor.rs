use std::any::TypeId;
use std::fmt;

/// Type descriptor for a controller requested by the view loader
///
/// A request carries a `TypeId` when it originates in code
/// (`ControllerType::of::<T>()`) and only a name when it originates in a view
/// description (`ControllerType::named("HomeController")`), since documents
/// reference controllers by type-name string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerType {
    type_id: Option<TypeId>,
    name: String,
}

impl ControllerType {
    /// Descriptor for a statically known controller type
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: Some(TypeId::of::<T>()),
            name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Descriptor for a controller referenced by name in a view description
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            type_id: None,
            name: name.into(),
        }
    }

    /// The requested type's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The requested `TypeId`, when statically known
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    /// The name without its module path
    pub fn short_name(&self) -> &str {
        self.name.rsplit("::").next().unwrap_or(&self.name)
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
