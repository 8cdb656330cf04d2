#![allow(missing_docs)]
//! Reference-data resolution through `ADMIT_STANDARDS_DIR`.
//!
//! Kept in its own test binary because it mutates the process environment.
//! Tests within it serialize on `ENV_LOCK`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use admit_standards::{STANDARDS_ENV_VAR, load, standards_override};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn set_env(value: &str) {
    // SAFETY: every test in this binary holds ENV_LOCK while touching the environment.
    #[allow(unsafe_code)]
    unsafe {
        std::env::set_var(STANDARDS_ENV_VAR, value);
    }
}

fn clear_env() {
    // SAFETY: see `set_env`.
    #[allow(unsafe_code)]
    unsafe {
        std::env::remove_var(STANDARDS_ENV_VAR);
    }
}

fn standards_dir(name: &str, program: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "admit-standards-env-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    write(
        &dir.join("programs.json"),
        &format!(
            r#"{{ "levels": ["MS"], "programs": ["{program}"], "masters": [], "type": {{ "CS": ["{program}"] }} }}"#
        ),
    );
    write(
        &dir.join("majors.csv"),
        "major_id,major_name,major_cabbr,major_type\n",
    );
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn explicit_dir_wins_over_environment() {
    let _guard = lock_env();
    let from_env = standards_dir("env", "MSFromEnv");
    let explicit = standards_dir("flag", "MSFromFlag");
    set_env(from_env.to_str().unwrap());

    let catalog = load(Some(explicit.as_path()));
    clear_env();

    assert_eq!(catalog.unwrap().programs(), ["MSFromFlag"]);
}

#[test]
fn environment_dir_replaces_embedded_data() {
    let _guard = lock_env();
    let from_env = standards_dir("env-only", "MSFromEnv");
    set_env(from_env.to_str().unwrap());

    let resolved = standards_override();
    let catalog = load(None);
    clear_env();

    assert_eq!(resolved.as_deref(), Some(from_env.as_path()));
    let catalog = catalog.unwrap();
    assert_eq!(catalog.programs(), ["MSFromEnv"]);
    assert!(catalog.majors().is_empty());
}

#[test]
fn empty_environment_value_falls_back_to_embedded_data() {
    let _guard = lock_env();
    set_env("");

    let resolved = standards_override();
    let catalog = load(None);
    clear_env();

    assert_eq!(resolved, None);
    let catalog = catalog.unwrap();
    assert_eq!(catalog.programs()[0], "MSCS");
    assert!(!catalog.majors().is_empty());
}

#[test]
fn unset_environment_uses_embedded_data() {
    let _guard = lock_env();
    clear_env();

    let catalog = load(None).unwrap();
    assert_eq!(catalog.levels()[0], "MS");
    assert_eq!(catalog.majors()[0].id, "CSIE");
}
