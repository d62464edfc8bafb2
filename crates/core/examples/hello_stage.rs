//! Drives the whole bridge once: register a controller and an application,
//! let the lifecycle adapter boot the container, then build a localized view
//! through a toy engine.
//!
//! Run with `cargo run --example hello_stage -- --title=Hello`.

use stagewire_core::{
    Application, ApplicationLifecycle, BundleMarker, ControllerRegistry, ControllerResolver,
    ControllerType, CoreError, HookError, LaunchParameters, Locale, LoaderContext, Stage,
    StaticBundleProvider, ViewEngine, ViewLoaderFactory, ViewNode, ViewTree,
};
use std::sync::Arc;

struct GreetingController;

struct EchoEngine;

impl ViewEngine for EchoEngine {
    fn build_view(&self, document: &str, context: &LoaderContext) -> Result<ViewTree, CoreError> {
        let mut root = ViewNode::new("pane");
        let mut controller = None;
        for line in document.lines().filter(|l| !l.trim().is_empty()) {
            match line.split_once(':') {
                Some(("controller", name)) => {
                    controller =
                        Some(context.construct_controller(&ControllerType::named(name.trim()))?);
                }
                Some(("label", key)) => {
                    root = root.with_child(ViewNode::new("label").with_text(context.localize(key.trim())));
                }
                _ => return Err(CoreError::invalid_document(line)),
            }
        }
        let mut tree = ViewTree::new(root);
        if let Some(controller) = controller {
            tree = tree.with_controller(controller);
        }
        Ok(tree)
    }
}

struct DemoApp;

impl Application for DemoApp {
    fn start(&self, stage: &mut Stage, parameters: &LaunchParameters) -> Result<(), HookError> {
        stage.set_title(parameters.get_named("title").unwrap_or("stagewire demo"));
        stage.show();
        Ok(())
    }
}

fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut registry = ControllerRegistry::new();
    registry.register_controller(GreetingController)?;
    registry.register_application(Arc::new(DemoApp))?;

    let mut lifecycle = ApplicationLifecycle::new(registry);
    lifecycle.on_platform_init()?;

    let mut stage = Stage::new();
    let parameters = LaunchParameters::from_args(std::env::args().skip(1).collect());
    lifecycle.on_platform_start(&mut stage, &parameters)?;
    println!("stage '{}' showing: {}", stage.title(), stage.is_showing());

    let container = lifecycle
        .container()
        .cloned()
        .expect("container available after init");
    let mut bundles = StaticBundleProvider::new();
    bundles.insert_entry("messages", Locale::new("en"), "greeting", "Hello from the bundle");
    let factory = ViewLoaderFactory::new(
        ControllerResolver::new(container),
        Box::new(bundles),
        Locale::new("en"),
    );

    let loader = factory.create_loader(Some(&BundleMarker::new("messages")))?;
    let tree = loader.build(&EchoEngine, "controller: GreetingController\nlabel: greeting\n")?;
    for child in tree.root().children() {
        println!("{}: {}", child.name(), child.text().unwrap_or(""));
    }
    println!("controller wired: {}", tree.controller().is_some());

    lifecycle.on_platform_stop()?;
    Ok(())
}
