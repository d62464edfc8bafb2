use crate::app::application::Application;
use crate::container::descriptor::ControllerType;
use crate::errors::CoreError;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Controller entry in the registry
pub enum ControllerEntry {
    /// Single shared instance
    Instance(Arc<dyn Any + Send + Sync>),
    /// Factory producing a fresh instance per resolution
    Factory(Box<dyn Fn() -> Arc<dyn Any + Send + Sync> + Send + Sync>),
}

impl std::fmt::Debug for ControllerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerEntry::Instance(_) => f.debug_tuple("Instance").field(&"<instance>").finish(),
            ControllerEntry::Factory(_) => f.debug_tuple("Factory").field(&"<factory>").finish(),
        }
    }
}

/// Registry of controllers and application bindings
///
/// This is the container the bridge resolves from. Controllers are keyed by
/// `TypeId` with a name index on the side, so the view loader can request
/// them by the type-name string a view description carries. Both the full
/// path and the bare type name are indexed; when two controllers share a bare
/// name, the most recently registered one wins that short-name lookup.
pub struct ControllerRegistry {
    controllers: Arc<RwLock<HashMap<TypeId, ControllerEntry>>>,
    names: Arc<RwLock<HashMap<String, TypeId>>>,
    applications: Arc<RwLock<Vec<Arc<dyn Application>>>>,
}

impl ControllerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            controllers: Arc::new(RwLock::new(HashMap::new())),
            names: Arc::new(RwLock::new(HashMap::new())),
            applications: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a shared controller instance
    pub fn register_controller<T>(&mut self, controller: T) -> Result<(), CoreError>
    where
        T: Send + Sync + 'static,
    {
        self.insert_entry::<T>(ControllerEntry::Instance(Arc::new(controller)))
    }

    /// Register a controller factory producing a fresh instance per view load
    pub fn register_controller_factory<T, F>(&mut self, factory: F) -> Result<(), CoreError>
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.insert_entry::<T>(ControllerEntry::Factory(Box::new(move || {
            Arc::new(factory())
        })))
    }

    fn insert_entry<T: 'static>(&mut self, entry: ControllerEntry) -> Result<(), CoreError> {
        let type_id = TypeId::of::<T>();
        let descriptor = ControllerType::of::<T>();

        let mut controllers = self.controllers.write().map_err(|_| CoreError::LockError {
            resource: "controller_registry".to_string(),
        })?;
        let mut names = self.names.write().map_err(|_| CoreError::LockError {
            resource: "controller_names".to_string(),
        })?;

        controllers.insert(type_id, entry);
        names.insert(descriptor.name().to_string(), type_id);
        names.insert(descriptor.short_name().to_string(), type_id);

        tracing::debug!("Registered controller '{}'", descriptor.name());
        Ok(())
    }

    /// Register an application implementation
    ///
    /// The registry records every binding; the lifecycle adapter enforces the
    /// exactly-one invariant at startup.
    pub fn register_application(&mut self, application: Arc<dyn Application>) -> Result<(), CoreError> {
        let mut applications = self.applications.write().map_err(|_| CoreError::LockError {
            resource: "application_bindings".to_string(),
        })?;
        applications.push(application);
        Ok(())
    }

    /// All registered application implementations
    pub fn application_bindings(&self) -> Result<Vec<Arc<dyn Application>>, CoreError> {
        let applications = self.applications.read().map_err(|_| CoreError::LockError {
            resource: "application_bindings".to_string(),
        })?;
        Ok(applications.clone())
    }

    /// Try to resolve a controller by type
    pub fn try_resolve<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let controllers = self.controllers.read().ok()?;
        match controllers.get(&TypeId::of::<T>())? {
            ControllerEntry::Instance(instance) => instance.clone().downcast::<T>().ok(),
            ControllerEntry::Factory(factory) => factory().downcast::<T>().ok(),
        }
    }

    /// Resolve a controller by type
    pub fn resolve<T>(&self) -> Result<Arc<T>, CoreError>
    where
        T: Send + Sync + 'static,
    {
        self.try_resolve::<T>()
            .ok_or_else(|| CoreError::controller_not_found(std::any::type_name::<T>()))
    }

    /// Resolve a controller from a request descriptor
    ///
    /// Requests carrying a `TypeId` are looked up directly; name-only
    /// requests go through the name index.
    pub fn resolve_dyn(
        &self,
        request: &ControllerType,
    ) -> Result<Arc<dyn Any + Send + Sync>, CoreError> {
        let type_id = match request.type_id() {
            Some(id) => Some(id),
            None => {
                let names = self.names.read().map_err(|_| CoreError::LockError {
                    resource: "controller_names".to_string(),
                })?;
                names.get(request.name()).copied()
            }
        };

        let controllers = self.controllers.read().map_err(|_| CoreError::LockError {
            resource: "controller_registry".to_string(),
        })?;

        let entry = type_id
            .and_then(|id| controllers.get(&id))
            .ok_or_else(|| CoreError::controller_not_found(request.name()))?;

        match entry {
            ControllerEntry::Instance(instance) => Ok(instance.clone()),
            ControllerEntry::Factory(factory) => Ok(factory()),
        }
    }

    /// Check if a controller type is registered
    pub fn contains<T>(&self) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.controllers
            .read()
            .map(|controllers| controllers.contains_key(&TypeId::of::<T>()))
            .unwrap_or(false)
    }

    /// Number of registered controllers
    pub fn controller_count(&self) -> usize {
        self.controllers
            .read()
            .map(|controllers| controllers.len())
            .unwrap_or(0)
    }

    /// All registered controller type IDs
    pub fn registered_controllers(&self) -> Vec<TypeId> {
        self.controllers
            .read()
            .map(|controllers| controllers.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Check that the registry's locks are healthy
    pub fn validate(&self) -> Result<(), CoreError> {
        let _controllers = self.controllers.read().map_err(|_| CoreError::LockError {
            resource: "controller_registry".to_string(),
        })?;
        let _names = self.names.read().map_err(|_| CoreError::LockError {
            resource: "controller_names".to_string(),
        })?;
        let _applications = self.applications.read().map_err(|_| CoreError::LockError {
            resource: "application_bindings".to_string(),
        })?;
        Ok(())
    }
}

impl Default for ControllerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerRegistry")
            .field("controller_count", &self.controller_count())
            .finish()
    }
}
