use crate::domain::host::Navigator;
use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Opens destinations in the desktop's default browser.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser;

/// Program and arguments that open `url` on this platform.
pub fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

impl Navigator for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let (program, args) = opener_command(url);
        // Opener output would scribble over the TUI.
        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("running {program}"))?;

        if !status.success() {
            anyhow::bail!("{program} exited with {status}");
        }
        Ok(())
    }
}
