use serial_test::serial;
use stagewire_core::{
    Application, ApplicationLifecycle, Bootstrap, BundleMarker, ControllerRegistry,
    ControllerResolver, ControllerType, CoreError, HookError, LaunchParameters, LifecycleState,
    Locale, LoaderContext, Stage, StaticBundleProvider, ViewEngine, ViewLoaderFactory, ViewNode,
    ViewTree,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Records the order lifecycle hooks fire in.
#[derive(Default)]
struct CallLog(Mutex<Vec<&'static str>>);

impl CallLog {
    fn push(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

struct TestApp {
    log: Arc<CallLog>,
    fail_init: bool,
    fail_stop: bool,
}

impl TestApp {
    fn new(log: Arc<CallLog>) -> Self {
        Self {
            log,
            fail_init: false,
            fail_stop: false,
        }
    }
}

impl Application for TestApp {
    fn init(&self) -> Result<(), HookError> {
        self.log.push("init");
        if self.fail_init {
            return Err("init failed".into());
        }
        Ok(())
    }

    fn start(&self, stage: &mut Stage, parameters: &LaunchParameters) -> Result<(), HookError> {
        self.log.push("start");
        stage.set_title(
            parameters
                .get_named("title")
                .unwrap_or("stagewire")
                .to_string(),
        );
        stage.show();
        Ok(())
    }

    fn stop(&self) -> Result<(), HookError> {
        self.log.push("stop");
        if self.fail_stop {
            return Err("stop failed".into());
        }
        Ok(())
    }
}

struct HomeController {
    greeting_shown: AtomicBool,
}

impl HomeController {
    fn new() -> Self {
        Self {
            greeting_shown: AtomicBool::new(false),
        }
    }
}

/// Minimal stand-in for the external view engine. One directive per line:
/// `controller: <name>` wires a controller, `label: <key>` adds a localized
/// text node.
struct LineEngine;

impl ViewEngine for LineEngine {
    fn build_view(&self, document: &str, context: &LoaderContext) -> Result<ViewTree, CoreError> {
        let mut root = ViewNode::new("pane");
        let mut controller = None;

        for line in document.lines().filter(|l| !l.trim().is_empty()) {
            match line.split_once(':') {
                Some(("controller", name)) => {
                    let request = ControllerType::named(name.trim());
                    controller = Some(context.construct_controller(&request)?);
                }
                Some(("label", key)) => {
                    let text = context.localize(key.trim());
                    root = root.with_child(ViewNode::new("label").with_text(text));
                }
                _ => {
                    return Err(CoreError::invalid_document(format!(
                        "unknown directive: {}",
                        line
                    )))
                }
            }
        }

        let mut tree = ViewTree::new(root);
        if let Some(controller) = controller {
            tree = tree.with_controller(controller);
        }
        Ok(tree)
    }
}

fn registry_with_app(log: Arc<CallLog>) -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    registry
        .register_application(Arc::new(TestApp::new(log)))
        .unwrap();
    registry
}

#[test]
#[serial]
fn full_lifecycle_relays_hooks_in_order() {
    init_tracing();
    Bootstrap::reset();
    let log = Arc::new(CallLog::default());
    let mut lifecycle = ApplicationLifecycle::new(registry_with_app(log.clone()));

    assert_eq!(lifecycle.state(), LifecycleState::NotStarted);
    lifecycle.on_platform_init().unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Initialized);

    let mut stage = Stage::new();
    let params = LaunchParameters::from_args(vec!["--title=Demo".to_string()]);
    lifecycle.on_platform_start(&mut stage, &params).unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Running);
    assert_eq!(stage.title(), "Demo");
    assert!(stage.is_showing());

    lifecycle.on_platform_stop().unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Stopped);

    assert_eq!(log.calls(), vec!["init", "start", "stop"]);
}

#[test]
#[serial]
fn zero_registered_applications_is_a_configuration_error() {
    Bootstrap::reset();
    let mut lifecycle = ApplicationLifecycle::new(ControllerRegistry::new());

    let err = lifecycle.on_platform_init().unwrap_err();
    assert!(err.is_configuration());
    // Startup aborted; start must now be rejected.
    let mut stage = Stage::new();
    assert!(lifecycle
        .on_platform_start(&mut stage, &LaunchParameters::empty())
        .is_err());
}

#[test]
#[serial]
fn multiple_registered_applications_fail_deterministically() {
    Bootstrap::reset();
    let log = Arc::new(CallLog::default());
    let mut registry = registry_with_app(log.clone());
    registry
        .register_application(Arc::new(TestApp::new(log.clone())))
        .unwrap();

    let mut lifecycle = ApplicationLifecycle::new(registry);
    let err = lifecycle.on_platform_init().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("found 2"));
    // Neither candidate was picked or initialized.
    assert!(log.calls().is_empty());
}

#[test]
#[serial]
fn start_before_init_is_rejected() {
    Bootstrap::reset();
    let log = Arc::new(CallLog::default());
    let mut lifecycle = ApplicationLifecycle::new(registry_with_app(log.clone()));

    let mut stage = Stage::new();
    let err = lifecycle
        .on_platform_start(&mut stage, &LaunchParameters::empty())
        .unwrap_err();
    assert!(err.is_lifecycle());
    assert!(log.calls().is_empty());
}

#[test]
#[serial]
fn stop_before_init_is_rejected() {
    Bootstrap::reset();
    let log = Arc::new(CallLog::default());
    let mut lifecycle = ApplicationLifecycle::new(registry_with_app(log));

    assert!(lifecycle.on_platform_stop().is_err());
    assert_eq!(lifecycle.state(), LifecycleState::NotStarted);
}

#[test]
#[serial]
fn failing_init_hook_aborts_startup() {
    Bootstrap::reset();
    let log = Arc::new(CallLog::default());
    let mut registry = ControllerRegistry::new();
    let mut app = TestApp::new(log.clone());
    app.fail_init = true;
    registry.register_application(Arc::new(app)).unwrap();

    let mut lifecycle = ApplicationLifecycle::new(registry);
    let err = lifecycle.on_platform_init().unwrap_err();
    assert!(err.is_lifecycle());
    assert_eq!(lifecycle.state(), LifecycleState::Initializing);

    // The platform may still drive shutdown after a failed startup.
    lifecycle.on_platform_stop().unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Stopped);
}

#[test]
#[serial]
fn failing_stop_hook_does_not_prevent_shutdown() {
    Bootstrap::reset();
    let log = Arc::new(CallLog::default());
    let mut registry = ControllerRegistry::new();
    let mut app = TestApp::new(log.clone());
    app.fail_stop = true;
    registry.register_application(Arc::new(app)).unwrap();

    let mut lifecycle = ApplicationLifecycle::new(registry);
    lifecycle.on_platform_init().unwrap();
    let mut stage = Stage::new();
    lifecycle
        .on_platform_start(&mut stage, &LaunchParameters::empty())
        .unwrap();

    lifecycle.on_platform_stop().unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Stopped);
    assert_eq!(log.calls(), vec!["init", "start", "stop"]);
}

#[test]
#[serial]
fn second_bootstrap_in_one_process_fails() {
    Bootstrap::reset();
    let log = Arc::new(CallLog::default());
    let mut first = ApplicationLifecycle::new(registry_with_app(log.clone()));
    first.on_platform_init().unwrap();

    let mut second = ApplicationLifecycle::new(registry_with_app(log));
    let err = second.on_platform_init().unwrap_err();
    assert!(err.is_configuration());
}

#[test]
#[serial]
fn view_build_wires_container_managed_controller() {
    Bootstrap::reset();
    let mut registry = ControllerRegistry::new();
    registry.register_controller(HomeController::new()).unwrap();

    let container = Bootstrap::initialize(registry).unwrap();
    let resolver = ControllerResolver::new(container.clone());
    let factory = ViewLoaderFactory::new(
        resolver,
        Box::new(StaticBundleProvider::new()),
        Locale::new("en"),
    );

    let loader = factory.create_loader(None).unwrap();
    let tree = loader
        .build(&LineEngine, "controller: HomeController\n")
        .unwrap();

    let wired = tree.controller_as::<HomeController>().unwrap();
    let direct = container.resolve::<HomeController>().unwrap();
    assert!(Arc::ptr_eq(&wired, &direct));
    assert!(!wired.greeting_shown.load(Ordering::SeqCst));

    Bootstrap::reset();
}

#[test]
#[serial]
fn unresolvable_controller_aborts_the_view_load() {
    Bootstrap::reset();
    let container = Bootstrap::initialize(ControllerRegistry::new()).unwrap();
    let factory = ViewLoaderFactory::new(
        ControllerResolver::new(container),
        Box::new(StaticBundleProvider::new()),
        Locale::new("en"),
    );

    let loader = factory.create_loader(None).unwrap();
    let err = loader
        .build(&LineEngine, "controller: GhostController\nlabel: greeting\n")
        .unwrap_err();

    assert!(err.is_controller_not_found());
    assert!(err.to_string().contains("GhostController"));

    Bootstrap::reset();
}

#[test]
#[serial]
fn marker_attaches_bundle_and_localizes_labels() {
    Bootstrap::reset();
    let mut registry = ControllerRegistry::new();
    registry.register_controller(HomeController::new()).unwrap();
    let container = Bootstrap::initialize(registry).unwrap();

    let mut provider = StaticBundleProvider::new();
    provider.insert_entry("messages", Locale::new("de"), "greeting", "Hallo");
    let factory = ViewLoaderFactory::new(
        ControllerResolver::new(container),
        Box::new(provider),
        Locale::parse("de_DE"),
    );

    let marker = BundleMarker::new("messages");
    let loader = factory.create_loader(Some(&marker)).unwrap();
    let bundle = loader.resource_bundle().unwrap();
    assert_eq!(bundle.get("greeting"), Some("Hallo"));

    let tree = loader
        .build(&LineEngine, "controller: HomeController\nlabel: greeting\n")
        .unwrap();
    assert_eq!(tree.root().children()[0].text(), Some("Hallo"));

    Bootstrap::reset();
}

#[test]
#[serial]
fn loader_without_marker_has_no_bundle() {
    Bootstrap::reset();
    let container = Bootstrap::initialize(ControllerRegistry::new()).unwrap();
    let factory = ViewLoaderFactory::new(
        ControllerResolver::new(container),
        Box::new(StaticBundleProvider::new()),
        Locale::new("en"),
    );

    let loader = factory.create_loader(None).unwrap();
    assert!(loader.resource_bundle().is_none());

    // Labels fall back to their keys without a bundle.
    let tree = loader.build(&LineEngine, "label: greeting\n").unwrap();
    assert_eq!(tree.root().children()[0].text(), Some("greeting"));

    Bootstrap::reset();
}

#[test]
#[serial]
fn unknown_marker_fails_loader_creation() {
    Bootstrap::reset();
    let container = Bootstrap::initialize(ControllerRegistry::new()).unwrap();
    let factory = ViewLoaderFactory::new(
        ControllerResolver::new(container),
        Box::new(StaticBundleProvider::new()),
        Locale::new("en"),
    );

    let marker = BundleMarker::new("missing");
    let err = factory.create_loader(Some(&marker)).unwrap_err();
    assert!(err.is_bundle_not_found());

    Bootstrap::reset();
}

#[test]
#[serial]
fn build_from_bytes_enforces_utf8() {
    Bootstrap::reset();
    let container = Bootstrap::initialize(ControllerRegistry::new()).unwrap();
    let factory = ViewLoaderFactory::new(
        ControllerResolver::new(container),
        Box::new(StaticBundleProvider::new()),
        Locale::new("en"),
    );

    let loader = factory.create_loader(None).unwrap();
    let err = loader
        .build_from_bytes(&LineEngine, &[0xc3, 0x28])
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidDocument { .. }));

    Bootstrap::reset();
}
