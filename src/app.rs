use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::report::theme::write_styled_line;
use crate::report::{self, ReportOptions};
use crate::store;
use crate::system::Probe;
use crate::system::collector::collect_snapshot;

/// Resolved settings for a single run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub output_path: PathBuf,
    pub disk_path: PathBuf,
    pub report: ReportOptions,
}

impl RunSettings {
    pub fn from_config(config: &Config, color: bool) -> Self {
        RunSettings {
            output_path: config.general.output_path.clone(),
            disk_path: config.general.disk_path.clone(),
            report: ReportOptions {
                color,
                human_bytes: config.display.human_bytes,
                max_model_width: config.display.max_model_width,
                ..Default::default()
            },
        }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self::from_config(&Config::default(), false)
    }
}

/// Collect, print, save. Returns the path the snapshot was written to.
///
/// Nothing is printed and no file is touched unless every query succeeded.
pub fn run<P, W>(settings: &RunSettings, probe: &mut P, out: &mut W) -> Result<PathBuf>
where
    P: Probe + ?Sized,
    W: Write,
{
    let snapshot = collect_snapshot(probe, &settings.disk_path)?;

    report::render(&snapshot, out, &settings.report).map_err(Error::Render)?;

    store::save(&snapshot, &settings.output_path)?;

    let message = format!("\nJSON data saved to {}", settings.output_path.display());
    write_styled_line(
        out,
        &message,
        settings.report.palette.section,
        settings.report.color,
    )
    .and_then(|()| out.flush())
    .map_err(Error::Render)?;

    Ok(settings.output_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Category;
    use crate::system::fake::FakeProbe;

    fn settings(name: &str) -> RunSettings {
        RunSettings {
            output_path: std::env::temp_dir()
                .join(format!("sysnap_app_{}_{name}", std::process::id())),
            ..Default::default()
        }
    }

    #[test]
    fn successful_run_prints_and_saves() {
        let settings = settings("ok.json");
        let mut out = Vec::new();
        let path = run(&settings, &mut FakeProbe::healthy(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("System Information"));
        assert!(text.contains("JSON data saved to"));
        assert!(path.exists());

        let saved = store::load(&path).unwrap();
        assert_eq!(saved.host_info.hostname, "testbox");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn failed_collection_renders_and_writes_nothing() {
        for category in [
            Category::Cpu,
            Category::Memory,
            Category::Disk,
            Category::Host,
            Category::Network,
        ] {
            let settings = settings(&format!("fail_{category}.json"));
            let _ = std::fs::remove_file(&settings.output_path);
            let mut out = Vec::new();

            let err = run(&settings, &mut FakeProbe::failing(category), &mut out).unwrap_err();

            assert_eq!(err.category(), Some(category));
            assert!(out.is_empty(), "render reached after {category} failure");
            assert!(!settings.output_path.exists());
        }
    }

    #[test]
    fn failed_collection_leaves_existing_file_alone() {
        let settings = settings("untouched.json");
        std::fs::write(&settings.output_path, "previous run").unwrap();

        let result = run(
            &settings,
            &mut FakeProbe::failing(Category::Network),
            &mut Vec::new(),
        );

        assert!(result.is_err());
        assert_eq!(
            std::fs::read_to_string(&settings.output_path).unwrap(),
            "previous run"
        );
        let _ = std::fs::remove_file(&settings.output_path);
    }

    #[test]
    fn persistence_failure_is_reported_after_render() {
        let settings = RunSettings {
            output_path: PathBuf::from("/nonexistent/dir/system-info.json"),
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run(&settings, &mut FakeProbe::healthy(), &mut out).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(String::from_utf8(out).unwrap().contains("Network Information:"));
    }
}
