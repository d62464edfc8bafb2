use crate::bundle::ResourceBundle;
use crate::container::descriptor::ControllerType;
use crate::errors::CoreError;
use crate::loader::engine::{LoaderContext, ViewEngine, ViewTree};
use std::any::Any;
use std::sync::Arc;

/// Controller-construction hook handed to the view engine
///
/// The engine calls this for every controller reference it encounters while
/// building a view, instead of constructing the controller itself.
pub type ControllerFactory =
    Arc<dyn Fn(&ControllerType) -> Result<Arc<dyn Any + Send + Sync>, CoreError> + Send + Sync>;

/// Text encoding for view descriptions
///
/// Fixed to UTF-8; there is no per-call override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
}

/// A configured view loader
///
/// Produced by [`ViewLoaderFactory`](crate::loader::ViewLoaderFactory).
/// Carries the controller-construction hook, the optional resource bundle
/// selected at creation time and the fixed charset. The loader does not
/// parse view descriptions itself; [`build`](Self::build) hands the document
/// to an external [`ViewEngine`].
pub struct ViewLoader {
    controller_factory: ControllerFactory,
    resource_bundle: Option<Arc<ResourceBundle>>,
    charset: Charset,
}

impl ViewLoader {
    pub(crate) fn new(
        controller_factory: ControllerFactory,
        resource_bundle: Option<Arc<ResourceBundle>>,
    ) -> Self {
        Self {
            controller_factory,
            resource_bundle,
            charset: Charset::Utf8,
        }
    }

    /// The controller-construction hook
    pub fn controller_factory(&self) -> &ControllerFactory {
        &self.controller_factory
    }

    /// The attached resource bundle, if a marker was given
    pub fn resource_bundle(&self) -> Option<&Arc<ResourceBundle>> {
        self.resource_bundle.as_ref()
    }

    /// The loader's charset
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Decode raw view-description bytes using the fixed charset
    pub fn decode_document(&self, bytes: &[u8]) -> Result<String, CoreError> {
        match self.charset {
            Charset::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|err| {
                    CoreError::invalid_document(format!(
                        "view description is not valid UTF-8: {}",
                        err
                    ))
                }),
        }
    }

    /// Build a view tree from a decoded document
    ///
    /// Resolution failures raised by the engine's controller callbacks
    /// surface to the caller unchanged.
    pub fn build<E: ViewEngine>(&self, engine: &E, document: &str) -> Result<ViewTree, CoreError> {
        let context = LoaderContext::new(
            self.controller_factory.clone(),
            self.resource_bundle.clone(),
        );
        engine.build_view(document, &context)
    }

    /// Decode raw bytes and build a view tree
    pub fn build_from_bytes<E: ViewEngine>(
        &self,
        engine: &E,
        bytes: &[u8],
    ) -> Result<ViewTree, CoreError> {
        let document = self.decode_document(bytes)?;
        self.build(engine, &document)
    }
}

impl std::fmt::Debug for ViewLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewLoader")
            .field("charset", &self.charset)
            .field(
                "resource_bundle",
                &self.resource_bundle.as_ref().map(|b| b.base_name()),
            )
            .finish()
    }
}
