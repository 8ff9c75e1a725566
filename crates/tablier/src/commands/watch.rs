//! Watch mode: regenerate previews whenever a template changes.

use std::path::PathBuf;

use anyhow::Result;
use tablier_static::{GenerateError, Generator};
use tablier_watch::{run_watch_loop, FileWatcher};

use crate::commands::generate::{build_generator, log_report};
use crate::config::ConfigFile;

/// Run one pass, then regenerate on every relevant template change.
///
/// Only returns on a fatal error; stop it by terminating the process.
pub async fn run(config: &ConfigFile, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Generating all possible template variations");

    let mut generator = build_generator(config, output, true)?;
    regenerate(&generator)?;

    let templates_dir = &config.paths.templates;
    let (watcher, mut rx) = FileWatcher::new(templates_dir, config.watch.settle())?;

    tracing::info!("Watching for template changes at {}", templates_dir.display());

    run_watch_loop(&mut rx, &config.watch.suffix, |_| {
        generator.reload_templates();
        regenerate(&generator)?;
        tracing::info!("Regeneration complete!");
        Ok::<(), GenerateError>(())
    })
    .await?;

    // Keep watcher alive for the whole loop
    drop(watcher);

    Ok(())
}

/// A half-edited template should not end the session, so render failures are
/// reported and skipped. Write failures are fatal.
fn regenerate(generator: &Generator) -> Result<(), GenerateError> {
    match generator.generate() {
        Ok(report) => {
            log_report(&report);
            Ok(())
        }
        Err(e) if e.is_render() => {
            tracing::error!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    use crate::config::PathsConfig;

    fn config(root: &Path) -> ConfigFile {
        ConfigFile {
            paths: PathsConfig {
                samples: root.join("missing.jsonlines"),
                output: root.join("preview"),
                templates: root.join("templates"),
            },
            ..Default::default()
        }
    }

    #[test]
    fn watch_generator_reads_templates_from_disk() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());

        let watching = build_generator(&config, None, true).unwrap();
        let one_shot = build_generator(&config, None, false).unwrap();

        assert!(watching.is_reloading());
        assert!(!one_shot.is_reloading());
    }

    #[test]
    fn template_edits_show_up_after_reload() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        let index = config.paths.templates.join("index.html");
        fs::create_dir_all(&config.paths.templates).unwrap();
        fs::write(&index, "<p>first</p>").unwrap();

        let mut generator = build_generator(&config, None, true).unwrap();
        regenerate(&generator).unwrap();
        let output = config.paths.output.join("index.html");
        assert_eq!(fs::read_to_string(&output).unwrap(), "<p>first</p>");

        fs::write(&index, "<p>second</p>").unwrap();
        generator.reload_templates();
        regenerate(&generator).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "<p>second</p>");
    }

    #[test]
    fn render_errors_do_not_stop_regeneration() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());

        let generator = build_generator(&config, None, true).unwrap();

        assert!(regenerate(&generator).is_ok());
    }

    #[test]
    fn write_errors_stop_regeneration() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        fs::write(&config.paths.output, "not a directory").unwrap();

        let generator = build_generator(&config, None, true).unwrap();
        let err = regenerate(&generator).unwrap_err();

        assert!(!err.is_render());
    }

    #[test]
    fn write_error_is_fatal_alongside_render_errors() {
        let temp = tempdir().unwrap();
        let config = config(temp.path());
        fs::create_dir_all(&config.paths.templates).unwrap();
        fs::write(config.paths.templates.join("index.html"), "<p>index</p>").unwrap();
        fs::create_dir_all(config.paths.output.join("index.html")).unwrap();

        let generator = build_generator(&config, None, true).unwrap();
        let err = regenerate(&generator).unwrap_err();

        assert!(!err.is_render());
    }
}
