//! One-shot invocation of the external PlantUML renderer. A failure is
//! surfaced with the process's own diagnostics instead of being retried or
//! routed through a fallback, so a broken installation stays visible.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Error;

/// A located PlantUML installation: either a `plantuml` executable on PATH
/// or `java -jar $PLANTUML_JAR`.
pub struct PlantUml {
    command: PathBuf,
    leading_args: Vec<String>,
}

impl PlantUml {
    pub fn locate() -> Result<Self, Error> {
        if let Ok(bin) = which::which("plantuml") {
            return Ok(Self {
                command: bin,
                leading_args: Vec::new(),
            });
        }
        if let Ok(jar) = std::env::var("PLANTUML_JAR") {
            let java = which::which("java").map_err(|_| {
                Error::Render(
                    "PLANTUML_JAR is set but no java executable was found on PATH".into(),
                )
            })?;
            return Ok(Self {
                command: java,
                leading_args: vec!["-jar".into(), jar],
            });
        }
        Err(Error::Render(
            "no plantuml executable on PATH and PLANTUML_JAR is not set".into(),
        ))
    }

    /// Converts one diagram file to `<out_dir>/<stem>.pdf` in a single
    /// blocking subprocess call.
    pub fn render_pdf(&self, puml: &Path, out_dir: &Path) -> Result<PathBuf, Error> {
        std::fs::create_dir_all(out_dir).map_err(|source| Error::Io {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let stem = puml
            .file_stem()
            .ok_or_else(|| Error::Render(format!("{} has no file stem", puml.display())))?;
        let pdf = out_dir.join(stem).with_extension("pdf");

        tracing::info!(input = %puml.display(), "rendering mind map to PDF");
        let output = Command::new(&self.command)
            .args(&self.leading_args)
            .arg("-tpdf")
            .arg("-o")
            .arg(out_dir)
            .arg(puml)
            .output()
            .map_err(|err| {
                Error::Render(format!("failed to run {}: {err}", self.command.display()))
            })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(status = %output.status, "PlantUML failed");
            return Err(Error::Render(format!(
                "{} exited with {}: {}{}",
                self.command.display(),
                output.status,
                stdout.trim(),
                stderr.trim(),
            )));
        }

        let size = std::fs::metadata(&pdf).map(|m| m.len()).unwrap_or(0);
        if size == 0 {
            return Err(Error::Render(format!(
                "renderer produced no usable PDF at {} (is PDF support installed?)",
                pdf.display()
            )));
        }

        tracing::info!(output = %pdf.display(), "PDF written");
        Ok(pdf)
    }
}
