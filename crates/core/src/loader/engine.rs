use crate::bundle::ResourceBundle;
use crate::container::descriptor::ControllerType;
use crate::errors::CoreError;
use crate::loader::view_loader::ControllerFactory;
use std::any::Any;
use std::sync::Arc;

/// What a view engine sees of the loader while building a view
///
/// Gives the engine the controller-construction hook and the optional
/// bundle; nothing else of the loader leaks across the boundary.
pub struct LoaderContext {
    controller_factory: ControllerFactory,
    resource_bundle: Option<Arc<ResourceBundle>>,
}

impl LoaderContext {
    pub(crate) fn new(
        controller_factory: ControllerFactory,
        resource_bundle: Option<Arc<ResourceBundle>>,
    ) -> Self {
        Self {
            controller_factory,
            resource_bundle,
        }
    }

    /// Construct the controller for a controller-class reference
    pub fn construct_controller(
        &self,
        request: &ControllerType,
    ) -> Result<Arc<dyn Any + Send + Sync>, CoreError> {
        (self.controller_factory)(request)
    }

    /// The attached resource bundle, if any
    pub fn resource_bundle(&self) -> Option<&Arc<ResourceBundle>> {
        self.resource_bundle.as_ref()
    }

    /// Localize a key through the attached bundle
    ///
    /// Without a bundle, or for an unknown key, the key itself comes back.
    pub fn localize<'a>(&'a self, key: &'a str) -> &'a str {
        match &self.resource_bundle {
            Some(bundle) => bundle.get_or_key(key),
            None => key,
        }
    }
}

impl std::fmt::Debug for LoaderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderContext")
            .field(
                "resource_bundle",
                &self.resource_bundle.as_ref().map(|b| b.base_name()),
            )
            .finish()
    }
}

/// Boundary to the external view-loading engine
///
/// The engine owns the view-description grammar and the construction of the
/// live UI tree; the bridge only supplies the [`LoaderContext`].
pub trait ViewEngine {
    /// Build a view tree from a decoded view description
    fn build_view(&self, document: &str, context: &LoaderContext) -> Result<ViewTree, CoreError>;
}

/// A node of a built view
#[derive(Debug, Clone, Default)]
pub struct ViewNode {
    name: String,
    text: Option<String>,
    children: Vec<ViewNode>,
}

impl ViewNode {
    /// Create a node with the given element name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set the node's (already localized) text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child node
    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node text, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Child nodes
    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }
}

/// The result of a view build: a node tree wired to its controller
pub struct ViewTree {
    root: ViewNode,
    controller: Option<Arc<dyn Any + Send + Sync>>,
}

impl ViewTree {
    /// Create a tree without a controller
    pub fn new(root: ViewNode) -> Self {
        Self {
            root,
            controller: None,
        }
    }

    /// Attach the controller the view was wired to
    pub fn with_controller(mut self, controller: Arc<dyn Any + Send + Sync>) -> Self {
        self.controller = Some(controller);
        self
    }

    /// Root node of the tree
    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    /// The wired controller, if the view referenced one
    pub fn controller(&self) -> Option<&Arc<dyn Any + Send + Sync>> {
        self.controller.as_ref()
    }

    /// The wired controller, downcast to its concrete type
    pub fn controller_as<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.controller
            .as_ref()
            .and_then(|controller| controller.clone().downcast::<T>().ok())
    }
}

impl std::fmt::Debug for ViewTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewTree")
            .field("root", &self.root.name())
            .field("has_controller", &self.controller.is_some())
            .finish()
    }
}
