//! Hands maps links to the platform's URL handler.

use grubl_core::MapsLink;
use tokio::process::Command;

fn opener(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Opens `link`, or prints it when `print_only` is set or no handler works.
/// Never fails: a link the user can copy is always shown.
pub(crate) async fn open_link(link: &MapsLink, print_only: bool) {
    if print_only {
        println!("{link}");
        return;
    }

    match opener(link.as_str()).status().await {
        Ok(status) if status.success() => {
            println!("Opened in maps: {link}");
        }
        Ok(status) => {
            tracing::warn!(%status, "url handler exited unsuccessfully");
            println!("Could not open maps, link: {link}");
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to launch url handler");
            println!("Could not open maps, link: {link}");
        }
    }
}
