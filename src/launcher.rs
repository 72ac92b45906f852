use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};

/// Argument the maintenance tool expects when started for an update run.
const UPDATER_ARG: &str = "--updater";

#[cfg(windows)]
const TOOL_NAME: &str = "maintenancetool.exe";
#[cfg(not(windows))]
const TOOL_NAME: &str = "maintenancetool";

/// Starts an external program without waiting for it.
pub trait ProcessSpawner {
    fn spawn(&self, program: &Path, args: &[&str]) -> io::Result<()>;
}

impl<S: ProcessSpawner + ?Sized> ProcessSpawner for &S {
    fn spawn(&self, program: &Path, args: &[&str]) -> io::Result<()> {
        (**self).spawn(program, args)
    }
}

/// Spawner backed by `std::process::Command`. The child handle is dropped on
/// purpose so the tool outlives this process.
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, program: &Path, args: &[&str]) -> io::Result<()> {
        Command::new(program).args(args).spawn().map(|_child| ())
    }
}

/// Where the installer places the maintenance tool: the parent of the
/// directory the application runs from.
pub fn expected_tool_path() -> PathBuf {
    let installer_dir = std::env::current_dir()
        .map(|dir| dir.parent().map(Path::to_path_buf).unwrap_or(dir))
        .unwrap_or_else(|_| PathBuf::from(".."));
    installer_dir.join(TOOL_NAME)
}

/// Hand-off to the IFW maintenance tool.
pub struct MaintenanceTool<S = SystemSpawner> {
    spawner: S,
}

impl MaintenanceTool<SystemSpawner> {
    pub fn system() -> Self {
        Self {
            spawner: SystemSpawner,
        }
    }
}

impl<S: ProcessSpawner> MaintenanceTool<S> {
    pub fn with_spawner(spawner: S) -> Self {
        Self { spawner }
    }

    /// Start the maintenance tool in updater mode, fire and forget.
    ///
    /// Returns true only when the tool exists and its process start was
    /// requested successfully. Never waits for the tool to finish.
    pub fn launch(&self, path: Option<PathBuf>) -> bool {
        let tool_path = path.unwrap_or_else(expected_tool_path);

        if !tool_path.exists() {
            warn!("cannot find updater at [{}], aborting", tool_path.display());
            return false;
        }

        info!("launching updater [{}]", tool_path.display());
        match self.spawner.spawn(&tool_path, &[UPDATER_ARG]) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to start updater [{}]: {e}", tool_path.display());
                false
            }
        }
    }
}
