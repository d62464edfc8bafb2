use thiserror::Error;

/// Core error type for the stagewire bridge
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Controller not found: {controller_type}")]
    ControllerNotFound { controller_type: String },

    #[error("Resource bundle '{bundle}' not found for locale '{locale}'")]
    BundleNotFound { bundle: String, locale: String },

    #[error("Invalid view document: {message}")]
    InvalidDocument { message: String },

    #[error("Lock error on resource: {resource}")]
    LockError { resource: String },

    #[error("Lifecycle error in component '{component}' during '{operation}': {source}")]
    LifecycleError {
        component: String,
        operation: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CoreError {
    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new controller-not-found error
    pub fn controller_not_found(controller_type: impl Into<String>) -> Self {
        Self::ControllerNotFound {
            controller_type: controller_type.into(),
        }
    }

    /// Create a new bundle-not-found error
    pub fn bundle_not_found(bundle: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::BundleNotFound {
            bundle: bundle.into(),
            locale: locale.into(),
        }
    }

    /// Create a new invalid-document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create a new lifecycle error with source
    pub fn lifecycle_error(
        component: impl Into<String>,
        operation: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::LifecycleError {
            component: component.into(),
            operation: operation.into(),
            source: source.into(),
        }
    }

    /// Check if the error is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Check if the error is a controller resolution failure
    pub fn is_controller_not_found(&self) -> bool {
        matches!(self, Self::ControllerNotFound { .. })
    }

    /// Check if the error is a lifecycle error
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::LifecycleError { .. })
    }

    /// Check if the error is a bundle lookup failure
    pub fn is_bundle_not_found(&self) -> bool {
        matches!(self, Self::BundleNotFound { .. })
    }
}
