//! Integration tests for hierlog
//!
//! These tests verify:
//! - Configuration files with root and per-logger targets
//! - Hierarchical level and target inheritance
//! - Target pool limits
//! - Line layout written to files
//! - The process-wide registry

use hierlog::prelude::*;
use hierlog::{TargetId, DEFAULT_TARGET_CAPACITY};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("logging.properties");
    fs::write(&path, body).expect("Failed to write config");
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// `YYYY/MM/DDTHH:MM:SS [LEVEL] name message`
fn assert_line_layout(line: &str, level: &str, name: &str) {
    let bytes = line.as_bytes();
    assert!(line.len() > 20, "line too short: {line:?}");
    for (i, b) in bytes[..19].iter().enumerate() {
        match i {
            4 | 7 => assert_eq!(*b, b'/', "line {line:?}"),
            10 => assert_eq!(*b, b'T', "line {line:?}"),
            13 | 16 => assert_eq!(*b, b':', "line {line:?}"),
            _ => assert!(b.is_ascii_digit(), "line {line:?}"),
        }
    }
    let rest = &line[19..];
    assert!(
        rest.starts_with(&format!(" [{}] {} ", level, name)),
        "unexpected header in {line:?}"
    );
}

#[test]
fn test_end_to_end_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().join("out.log");
    let config = write_config(
        temp_dir.path(),
        &format!("rootLogger={}\nlogger.svc=WARN\n", out.display()),
    );

    let registry = Registry::builder().build_shared();
    assert!(registry.configure(&config).expect("configure"));

    let logger = registry.logger("svc.worker");
    logger.info("start {}", &[Arg::from(1)]);
    logger.error("fail {}", &[Arg::from("timeout")]);

    let lines = read_lines(&out);
    assert_eq!(lines.len(), 1, "lines: {lines:?}");
    assert!(lines[0].ends_with("fail timeout"));
    assert_line_layout(&lines[0], "ERROR", "svc.worker");
}

#[test]
fn test_child_inherits_parent_target() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app = temp_dir.path().join("app.log");
    let connector = temp_dir.path().join("connector.log");
    let config = write_config(
        temp_dir.path(),
        &format!(
            "# logging setup\n\
             rootLogger={}\n\
             logger.Net.Connector=DEBUG,{}\n\
             logger.Net.Connector.Handshake=TRACE\n",
            app.display(),
            connector.display()
        ),
    );

    let registry = Registry::builder().build_shared();
    registry.configure(&config).expect("configure");

    let handshake = registry.logger("Net.Connector.Handshake");
    let connector_logger = registry.logger("Net.Connector");
    let other = registry.logger("Storage");

    assert_eq!(handshake.level(), LogLevel::Trace);
    assert_eq!(connector_logger.level(), LogLevel::Debug);
    assert_eq!(other.level(), LogLevel::Info);

    handshake.trace("hello {}", &[Arg::from(1u8)]);
    connector_logger.debug("dialing", &[]);
    connector_logger.trace("suppressed", &[]);
    other.debug("suppressed", &[]);
    other.info("stored {} bytes", &[Arg::from(4096u64)]);

    let connector_lines = read_lines(&connector);
    assert_eq!(connector_lines.len(), 2, "lines: {connector_lines:?}");
    assert_line_layout(&connector_lines[0], "TRACE", "Net.Connector.Handshake");
    assert!(connector_lines[0].ends_with("hello 1"));
    assert_line_layout(&connector_lines[1], "DEBUG", "Net.Connector");

    let app_lines = read_lines(&app);
    assert!(app_lines.iter().any(|l| l.ends_with("[INFO] Storage stored 4096 bytes")));
    assert!(!app_lines.iter().any(|l| l.contains("suppressed")));
}

#[test]
fn test_pool_exhaustion_with_seventeen_targets() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("root.log");
    let mut body = format!("rootLogger={}\n", root.display());
    for i in 0..17 {
        body.push_str(&format!(
            "logger.l{}=DEBUG,{}\n",
            i,
            temp_dir.path().join(format!("l{}.log", i)).display()
        ));
    }
    let config = write_config(temp_dir.path(), &body);

    let registry = Registry::builder().build_shared();
    registry.configure(&config).expect("configure");

    assert_eq!(registry.open_targets(), DEFAULT_TARGET_CAPACITY);
    assert_eq!(registry.resolve_level("l16"), LogLevel::Debug);
    assert_eq!(registry.resolve_target("l16"), TargetId::Root);
    assert_eq!(registry.resolve_target("l15"), TargetId::Pool(15));
    assert!(!temp_dir.path().join("l16.log").exists());

    let root_lines = read_lines(&root);
    assert!(root_lines
        .iter()
        .any(|l| l.contains("limit of 16 targets reached for \"l16\"")));
}

#[test]
fn test_shared_target_path_uses_one_slot() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let shared = temp_dir.path().join("shared.log");
    let registry = Registry::builder().target_capacity(1).build_shared();
    registry
        .configure_str(
            "inline",
            &format!(
                "logger.a=INFO,{0}\nlogger.b=INFO,{0}\n",
                shared.display()
            ),
        )
        .expect("configure");

    assert_eq!(registry.open_targets(), 1);
    registry.logger("a").info("from a", &[]);
    registry.logger("b").info("from b", &[]);

    let lines = read_lines(&shared);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("from a"));
    assert!(lines[1].ends_with("from b"));
}

#[test]
fn test_missing_config_file_is_noop() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let registry = Registry::builder().build_shared();

    let applied = registry
        .configure(temp_dir.path().join("absent.properties"))
        .expect("missing file is not an error");

    assert!(!applied);
    assert!(!registry.is_configured());
    let snapshot = registry.snapshot();
    assert!(!snapshot.configured);
    assert!(snapshot.levels.is_empty());
    assert!(snapshot.targets.is_empty());

    // Logging before configuration must not fail
    let logger = registry.logger("early");
    logger.fatal("never written", &[]);
    assert_eq!(logger.level(), LogLevel::Uninitialized);
}

#[test]
fn test_existing_file_is_appended() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().join("out.log");
    fs::write(&out, "previous run\n").expect("seed log");

    let registry = Registry::builder().build_shared();
    registry
        .configure_str("inline", &format!("rootLogger={}", out.display()))
        .expect("configure");
    registry.logger("x").warn("next run", &[]);

    let lines = read_lines(&out);
    assert_eq!(lines[0], "previous run");
    assert!(lines.last().unwrap().ends_with("[WARN] x next run"));
}

#[test]
fn test_comments_and_malformed_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().join("out.log");
    let registry = Registry::builder().build_shared();
    registry
        .configure_str(
            "inline",
            &format!(
                "; leading comment\n\
                 \n\
                 rootLogger = {} # trailing comment\n\
                 logger.broken DEBUG\n\
                 appender.ignored = whatever\n\
                 logger.ok = DEBUG ; inline\n",
                out.display()
            ),
        )
        .expect("configure");

    assert_eq!(registry.resolve_level("ok"), LogLevel::Debug);
    assert_eq!(registry.resolve_level("broken"), LogLevel::Info);

    let lines = read_lines(&out);
    assert!(lines
        .iter()
        .any(|l| l.contains("no '=' in \"logger.broken DEBUG\"")));
}

#[test]
fn test_snapshot_reports_configuration() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let net = temp_dir.path().join("net.log");
    let registry = Registry::builder().build_shared();
    registry
        .configure_str(
            "inline",
            &format!("rootLogger=ERROR,STDERR\nlogger.Net=DEBUG,{}\n", net.display()),
        )
        .expect("configure");

    let snapshot = registry.snapshot();
    assert!(snapshot.configured);
    assert_eq!(snapshot.configured_from.as_deref(), Some("inline"));
    assert_eq!(snapshot.root_level, LogLevel::Error);
    assert_eq!(snapshot.root_target, "STDERR");
    assert_eq!(snapshot.levels.get("Net"), Some(&LogLevel::Debug));
    assert_eq!(snapshot.targets.get("Net"), Some(&net.display().to_string()));
    assert_eq!(snapshot.open_targets, 1);

    let json = snapshot.to_json().expect("render json");
    assert!(json.contains("\"root_level\": \"Error\""));
}

#[test]
fn test_global_registry() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out = temp_dir.path().join("global.log");
    let config = write_config(
        temp_dir.path(),
        &format!("rootLogger={}\nlogger.global=DEBUG\n", out.display()),
    );

    assert!(hierlog::configure(&config).expect("configure"));
    // Second call is a documented no-op
    assert!(!hierlog::configure(&config).expect("configure again"));

    let logger = hierlog::get_logger("global.test");
    assert!(logger.is_debug_enabled());
    hierlog::debug!(logger, "answer is {}", 42);

    let lines = read_lines(&out);
    assert!(lines.iter().any(|l| l.ends_with("[DEBUG] global.test answer is 42")));
}
