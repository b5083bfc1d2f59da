//! Construction-time behavior: contention detection and fail-fast startup.

use std::sync::Arc;

use console_server::lifecycle::{FatalSignal, Runner, Shutdown, StartupError};
use console_server::net::{acquire, ListenerError};
use console_server::registry::{Module, Plugin};

mod common;

/// Two sequential acquisitions of the same address: the second one reports
/// contention, not a generic bind failure.
#[tokio::test]
async fn sequential_acquirers_report_contention() {
    let first = acquire("127.0.0.1:0").await.unwrap();
    let addr = first.local_addr().unwrap().to_string();

    match acquire(&addr).await {
        Err(ListenerError::AddressInUse { addr: reported }) => assert_eq!(reported, addr),
        other => panic!("expected AddressInUse, got {:?}", other),
    }
}

/// A second runner on a served address fails with contention, and its
/// already-started plugins are stopped again.
#[tokio::test]
async fn contended_startup_unwinds_plugins() {
    let log = common::EventLog::new();
    let config = common::test_config("127.0.0.1:27761");
    let shutdown = Shutdown::new();

    let (fatal, _fatal_rx) = FatalSignal::channel();
    let _first = Runner::new(&config, Vec::new(), Vec::new(), shutdown.clone(), fatal)
        .await
        .expect("first startup failed");

    let (fatal, _fatal_rx) = FatalSignal::channel();
    let plugins: Vec<Arc<dyn Plugin>> = vec![common::RecordingPlugin::new("store", &log)];
    let second = Runner::new(&config, Vec::new(), plugins, shutdown.clone(), fatal).await;

    match second {
        Err(StartupError::Listener(ListenerError::AddressInUse { .. })) => {}
        other => panic!("expected listener contention, got {:?}", other.err()),
    }

    // The plugin came up before acquisition failed and was stopped again.
    assert_eq!(log.snapshot(), vec!["start:store", "stop:store"]);
}

/// A failing plugin aborts construction before the listener exists.
#[tokio::test]
async fn plugin_failure_fails_fast() {
    let log = common::EventLog::new();
    let config = common::test_config("127.0.0.1:27762");
    let shutdown = Shutdown::new();
    let (fatal, _fatal_rx) = FatalSignal::channel();

    let plugins: Vec<Arc<dyn Plugin>> = vec![
        common::RecordingPlugin::new("store", &log),
        common::RecordingPlugin::failing("broken", &log),
    ];

    match Runner::new(&config, Vec::new(), plugins, shutdown, fatal).await {
        Err(StartupError::Plugin(_)) => {}
        other => panic!("expected plugin failure, got {:?}", other.err()),
    }

    // The earlier plugin was unwound, and the address was never bound.
    assert_eq!(log.snapshot(), vec!["start:store", "stop:store"]);
    assert!(tokio::net::TcpListener::bind("127.0.0.1:27762").await.is_ok());
}

/// Duplicate module names are rejected during construction.
#[tokio::test]
async fn duplicate_module_rejected() {
    let log = common::EventLog::new();
    let config = common::test_config("127.0.0.1:27763");
    let shutdown = Shutdown::new();
    let (fatal, _fatal_rx) = FatalSignal::channel();

    let modules: Vec<Arc<dyn Module>> = vec![
        common::RecordingModule::new("overview", &log),
        common::RecordingModule::new("overview", &log),
    ];

    match Runner::new(&config, modules, Vec::new(), shutdown, fatal).await {
        Err(StartupError::Registry(_)) => {}
        other => panic!("expected registry error, got {:?}", other.err()),
    }
}
