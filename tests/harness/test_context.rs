//! Shared testing harness for `ppk` integration tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_toolkit::FakeToolkit;

pub(crate) const TEMPLATE: &str = "\
# rnx2rtkp options
pos1-posmode       =kinematic  # (0:single,1:dgps,2:kinematic,3:static)
pos1-frequency     =l1+l2      # (1:l1,2:l1+l2,3:l1+l2+l5)
out-solformat      =llh        # (0:llh,1:xyz,2:enu,3:nmea)
out-solstatic      =all        # (0:all,1:single)
ant1-anttype       =
ant1-antdelu       =0
file-rcvantfile    =
";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    tmp_dir: PathBuf,
    toolkit: FakeToolkit,
}

impl TestContext {
    /// Create a new isolated environment with the fake toolkit installed.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let tmp_dir = root.path().join("tmp");
        fs::create_dir_all(&tmp_dir).expect("Failed to create test tmp directory");
        let toolkit = FakeToolkit::install(root.path());

        Self { root, work_dir, tmp_dir, toolkit }
    }

    /// Path to the directory used as the caller's working directory.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn toolkit(&self) -> &FakeToolkit {
        &self.toolkit
    }

    /// Build a command for invoking the compiled `ppk` binary.
    ///
    /// The fake toolkit shadows any real one on `PATH`, and `TMPDIR` points
    /// at a private directory so staging leftovers are observable.
    pub(crate) fn cli(&self) -> Command {
        let mut path = self.toolkit.bin_dir.clone().into_os_string();
        if let Some(original) = env::var_os("PATH") {
            path.push(":");
            path.push(original);
        }

        let mut cmd = Command::cargo_bin("ppk").expect("Failed to locate ppk binary");
        cmd.current_dir(&self.work_dir)
            .env("PATH", path)
            .env("TMPDIR", &self.tmp_dir)
            .env_remove("PPK_TOOLKIT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory.
    pub(crate) fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the default solver configuration template as `ppk.conf`.
    pub(crate) fn write_template(&self) -> PathBuf {
        self.write("ppk.conf", TEMPLATE)
    }

    /// Write a fake archive listing the entries it extracts to.
    pub(crate) fn write_archive(&self, relative: &str, entries: &[&str]) -> PathBuf {
        let manifest: String = entries.iter().map(|entry| format!("{}\n", entry)).collect();
        self.write(relative, &manifest)
    }

    /// Result directories (`ppk-<timestamp>/`) created in the work directory.
    pub(crate) fn result_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .map(|entry| entry.expect("Failed to read entry").path())
            .filter(|path| {
                path.is_dir()
                    && path.file_name().is_some_and(|n| n.to_string_lossy().starts_with("ppk-"))
            })
            .collect();
        dirs.sort();
        dirs
    }

    /// Run logs (`ppk-<timestamp>.log`) written to the work directory.
    pub(crate) fn run_logs(&self) -> Vec<PathBuf> {
        fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .map(|entry| entry.expect("Failed to read entry").path())
            .filter(|path| {
                path.is_file()
                    && path.file_name().is_some_and(|n| {
                        let name = n.to_string_lossy();
                        name.starts_with("ppk-") && name.ends_with(".log")
                    })
            })
            .collect()
    }

    /// Assert exactly one result directory exists and return it with its timestamp.
    pub(crate) fn single_result(&self) -> (PathBuf, String) {
        let dirs = self.result_dirs();
        assert_eq!(dirs.len(), 1, "expected one result directory, found {:?}", dirs);
        let dir = dirs.into_iter().next().unwrap();
        let stamp = dir
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_prefix("ppk-"))
            .expect("result directory should be named ppk-<timestamp>")
            .to_string();
        (dir, stamp)
    }

    /// Assert the private temp directory holds no staging leftovers.
    pub(crate) fn assert_staging_removed(&self) {
        let leftovers: Vec<_> = fs::read_dir(&self.tmp_dir)
            .expect("Failed to read tmp directory")
            .map(|entry| entry.expect("Failed to read entry").path())
            .collect();
        assert!(leftovers.is_empty(), "staging directory should be removed: {:?}", leftovers);
    }
}
