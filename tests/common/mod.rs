//! Shared integration-test harness for running the `embedpage` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers around the compiled `embedpage` binary.
pub struct EmbedPageProcess;

impl EmbedPageProcess {
    /// Path of the binary under test.
    pub fn bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_embedpage"))
    }

    /// Runs the binary to completion with `args`.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command(&Self::bin(), args)
            .output()
            .expect("failed to run embedpage")
    }

    /// Runs the binary at `bin` with `args` from working directory `cwd`.
    ///
    /// Retries briefly on `ETXTBSY`, which a freshly copied binary can hit
    /// while another test thread is forking.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_in(bin: &Path, cwd: &Path, args: &[&str]) -> Output {
        const ETXTBSY: i32 = 26;
        for _ in 0..20 {
            match Self::command(bin, args).current_dir(cwd).output() {
                Ok(output) => return output,
                Err(e) if e.raw_os_error() == Some(ETXTBSY) => {
                    std::thread::sleep(std::time::Duration::from_millis(50));
                }
                Err(e) => panic!("failed to run embedpage: {e}"),
            }
        }
        panic!("embedpage binary stayed busy");
    }

    fn command(bin: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin);
        cmd.args(args);
        for (key, _) in std::env::vars_os() {
            if key.to_string_lossy().starts_with("EMBEDPAGE_") {
                cmd.env_remove(key);
            }
        }
        cmd
    }
}

/// Creates a temp directory holding `frontend/index.html` with `html`.
#[allow(clippy::missing_panics_doc)]
pub fn site_with_frontend(html: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let frontend = dir.path().join("frontend");
    std::fs::create_dir(&frontend).expect("create frontend dir");
    std::fs::write(frontend.join("index.html"), html).expect("write index.html");
    dir
}
