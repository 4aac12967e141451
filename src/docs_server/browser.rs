// ABOUTME: Opens a URL in the platform's default browser
// ABOUTME: Spawns the OS launcher without waiting on it

use std::io;
use std::process::{Command, Stdio};

/// Launch the default browser at `url`
///
/// # Errors
///
/// Returns the spawn error if the platform launcher is unavailable
pub fn open(url: &str) -> io::Result<()> {
    launcher(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url]);
    command
}

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
