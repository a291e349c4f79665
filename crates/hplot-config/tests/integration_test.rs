//! Integration tests for hplot-config crate.
//!
//! These tests load configuration files from disk the way the binaries do.
//! Every test takes `ENV_LOCK` because loading reads process-wide `HPLOT_*`
//! variables and the lookup tests change them.

use hplot_config::{
    Config, ConfigError, ConfigLoader, MalformedPolicy, SegmentColoring, CONFIG_PATH_ENV,
};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const OVERRIDE_VARS: [&str; 8] = [
    CONFIG_PATH_ENV,
    "HPLOT_WIDTH",
    "HPLOT_HEIGHT",
    "HPLOT_BACKGROUND_COLOR",
    "HPLOT_MARKER_SIZE",
    "HPLOT_SEGMENT_COLORING",
    "HPLOT_MALFORMED_POLICY",
    "HPLOT_LOG_LEVEL",
];

/// Holds the lock and clears every `HPLOT_*` variable on both ends
struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn acquire() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_vars();
        Self { _lock: lock }
    }

    fn set(&self, var: &str, value: impl AsRef<std::ffi::OsStr>) {
        env::set_var(var, value);
    }

    fn remove_all(&self) {
        clear_vars();
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_vars();
    }
}

fn clear_vars() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

/// Switches the working directory and restores it on drop
struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    fn enter(dir: &std::path::Path) -> Self {
        let previous = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { previous }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config_file() {
    let _env = EnvGuard::acquire();
    let file = write_config(
        r##"
render:
  title: "Hilbert path"
  width: 1024
  height: 768
  background_color: "#202020"
  segment_coloring: color_map
  stride: 1
  show_axes: false
input:
  malformed_policy: skip_and_warn
  echo: true
hilbert:
  dims: 2
  order: 4
  npoints: 256
  seed: 7
logging:
  level: debug
  format: pretty
"##,
    );

    let config = ConfigLoader::load_config(file.path()).unwrap();
    assert_eq!(config.render.title.as_deref(), Some("Hilbert path"));
    assert_eq!(config.render.width, 1024);
    assert_eq!(config.render.segment_coloring, SegmentColoring::ColorMap);
    assert!(!config.render.show_axes);
    assert_eq!(config.input.malformed_policy, MalformedPolicy::SkipAndWarn);
    assert!(config.input.echo);
    assert_eq!(config.hilbert.dims, 2);
    assert_eq!(config.hilbert.seed, Some(7));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_rejects_invalid_values() {
    let _env = EnvGuard::acquire();
    let file = write_config(
        r#"
hilbert:
  dims: 3
  order: 1
  npoints: 9
"#,
    );

    let result = ConfigLoader::load_config(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_load_rejects_bad_color() {
    let _env = EnvGuard::acquire();
    let file = write_config("render:\n  background_color: \"#12345G\"\n");

    let error = ConfigLoader::load_from_file(file.path()).unwrap_err();
    assert!(error.to_string().contains("Configuration error"));
}

#[test]
fn test_missing_file_is_io_error() {
    let _env = EnvGuard::acquire();
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::load_config(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_load_optional_with_path() {
    let _env = EnvGuard::acquire();
    let file = write_config("render:\n  width: 640\n");
    let config = ConfigLoader::load_optional(Some(file.path())).unwrap();
    assert_eq!(config.render.width, 640);
}

#[test]
fn test_env_overrides_apply_over_file() {
    let env = EnvGuard::acquire();
    let file = write_config("render:\n  width: 640\n  height: 480\n");

    env.set("HPLOT_WIDTH", "1200");
    env.set("HPLOT_HEIGHT", " 900 ");
    env.set("HPLOT_BACKGROUND_COLOR", "#000000");
    env.set("HPLOT_MARKER_SIZE", "9");
    env.set("HPLOT_SEGMENT_COLORING", "colormap");
    env.set("HPLOT_MALFORMED_POLICY", "skip");
    env.set("HPLOT_LOG_LEVEL", "hplot_graphs=debug");

    let config = ConfigLoader::load_config(file.path()).unwrap();
    assert_eq!(config.render.width, 1200);
    assert_eq!(config.render.height, 900);
    assert_eq!(config.render.background_color, "#000000");
    assert_eq!(config.render.marker_size, 9);
    assert_eq!(config.render.segment_coloring, SegmentColoring::ColorMap);
    assert_eq!(config.input.malformed_policy, MalformedPolicy::SkipAndWarn);
    assert_eq!(config.logging.level, "hplot_graphs=debug");
}

#[test]
fn test_unparsable_env_value_names_variable() {
    let env = EnvGuard::acquire();
    let file = write_config("render:\n  width: 640\n");
    env.set("HPLOT_WIDTH", "abc");

    match ConfigLoader::load_config(file.path()) {
        Err(ConfigError::EnvParseError { var, .. }) => assert_eq!(var, "HPLOT_WIDTH"),
        other => panic!("expected EnvParseError, got {other:?}"),
    }

    env.set("HPLOT_WIDTH", "800");
    env.set("HPLOT_SEGMENT_COLORING", "rainbow");
    let error = ConfigLoader::load_config(file.path()).unwrap_err();
    assert!(error.to_string().contains("HPLOT_SEGMENT_COLORING"));
}

#[test]
fn test_env_override_is_validated() {
    let env = EnvGuard::acquire();
    let file = write_config("render:\n  width: 640\n");
    env.set("HPLOT_WIDTH", "50");

    let result = ConfigLoader::load_config(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));

    env.remove_all();
    env.set("HPLOT_LOG_LEVEL", "loud");
    assert!(ConfigLoader::load().is_err());
}

#[test]
fn test_load_uses_config_path_variable() {
    let env = EnvGuard::acquire();
    let file = write_config("render:\n  width: 720\n");
    env.set(CONFIG_PATH_ENV, file.path());

    let config = ConfigLoader::load().unwrap();
    assert_eq!(config.render.width, 720);
}

#[test]
fn test_load_finds_file_in_working_directory() {
    let _env = EnvGuard::acquire();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hplot.yml"), "hilbert:\n  order: 6\n").unwrap();

    let config = {
        let _cwd = CwdGuard::enter(dir.path());
        ConfigLoader::load().unwrap()
    };
    assert_eq!(config.hilbert.order, 6);

    std::fs::write(dir.path().join("hplot.yaml"), "hilbert:\n  order: 7\n").unwrap();
    let config = {
        let _cwd = CwdGuard::enter(dir.path());
        ConfigLoader::load().unwrap()
    };
    assert_eq!(config.hilbert.order, 7);
}

#[test]
fn test_load_without_file_uses_defaults() {
    let _env = EnvGuard::acquire();
    let dir = tempfile::tempdir().unwrap();

    let config = {
        let _cwd = CwdGuard::enter(dir.path());
        ConfigLoader::load().unwrap()
    };
    assert_eq!(config, Config::default());
}

#[test]
fn test_explicit_path_beats_config_path_variable() {
    let env = EnvGuard::acquire();
    let from_env = write_config("render:\n  width: 700\n");
    let explicit = write_config("render:\n  width: 900\n");
    env.set(CONFIG_PATH_ENV, from_env.path());

    let config = ConfigLoader::load_optional(Some(explicit.path())).unwrap();
    assert_eq!(config.render.width, 900);

    let config = ConfigLoader::load_optional(None::<&std::path::Path>).unwrap();
    assert_eq!(config.render.width, 700);
}
