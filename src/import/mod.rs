//! Sprite import: folder lookup, representative pick, format conversion.
//!
//! For every `[assets]` row, in table order:
//!
//! ```text
//! source/<key>/ missing         → [SKIP]
//! source/<key>/ has no image    → [WARN]
//! source/<key>/<first image>    → dest/<name>.<format ext>   [OK]
//! listing/decode/write failure  → [ERR], run continues
//! ```
//!
//! Only creating the destination root can fail the run as a whole.

mod convert;
mod error;
mod outcome;
mod pick;

pub use convert::convert_image;
pub use error::ImportError;
pub use outcome::{ImportReport, Outcome};
pub use pick::find_representative;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{AssetEntry, ImportConfig};
use crate::utils::path::display_relative;
use crate::{debug, log};

/// Run the import for every mapping entry.
///
/// Per-entry failures are logged and recorded in the report; they never
/// abort the run. Existing destination files are overwritten.
pub fn import_assets(config: &ImportConfig) -> Result<ImportReport> {
    ensure_dest_dir(config.dest_root())?;

    debug!(
        "import";
        "{} -> {} ({} entries)",
        config.source_root().display(),
        config.dest_root().display(),
        config.assets.len()
    );

    let mut report = ImportReport::default();
    for entry in &config.assets {
        let outcome = import_entry(config, entry);
        outcome.log(entry);
        report.push(entry.clone(), outcome);
    }

    log!("done"; "{}", report.summary());
    Ok(report)
}

/// Create the destination root if missing. Existing contents are untouched.
fn ensure_dest_dir(dest: &Path) -> Result<()> {
    if dest.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create destination directory '{}'", dest.display()))?;
    log!("dir"; "Created directory: {}", dest.display());
    Ok(())
}

/// Process a single mapping entry.
fn import_entry(config: &ImportConfig, entry: &AssetEntry) -> Outcome {
    let folder = config.source_root().join(&entry.source_key);
    if !folder.is_dir() {
        return Outcome::Skipped;
    }

    let source = match find_representative(&folder, &config.import) {
        Ok(Some(source)) => source,
        Ok(None) => {
            return Outcome::Warned {
                extensions: config.import.extensions.clone(),
            };
        }
        Err(err) => return errored(err),
    };

    let dest = config.dest_path(entry);
    debug!(
        "import";
        "{} -> {}",
        display_relative(&source, config.source_root()),
        display_relative(&dest, config.dest_root())
    );

    match convert_image(&source, &dest, config.import.format) {
        Ok((width, height)) => Outcome::Imported {
            output: dest,
            width,
            height,
        },
        Err(err) => Outcome::Errored {
            path: source,
            message: err.to_string(),
        },
    }
}

fn errored(err: ImportError) -> Outcome {
    Outcome::Errored {
        path: err.path().clone(),
        message: err.to_string(),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AssetMap, ImportSectionConfig, OutputFormat};
    use image::{Rgba, RgbaImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        source: PathBuf,
        dest: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let source = temp.path().join("sprites copy");
            let dest = temp.path().join("sprites/holo");
            fs::create_dir_all(&source).unwrap();
            Self {
                _temp: temp,
                source,
                dest,
            }
        }

        fn sprite(&self, key: &str, file: &str, width: u32, height: u32) {
            let dir = self.source.join(key);
            fs::create_dir_all(&dir).unwrap();
            RgbaImage::from_pixel(width, height, Rgba([10, 200, 30, 255]))
                .save(dir.join(file))
                .unwrap();
        }

        fn raw(&self, key: &str, file: &str, bytes: &[u8]) {
            let dir = self.source.join(key);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(file), bytes).unwrap();
        }

        fn config(&self, assets: &[(&str, &str)]) -> ImportConfig {
            ImportConfig {
                config_path: None,
                root: self._temp.path().to_path_buf(),
                import: ImportSectionConfig {
                    source: self.source.clone(),
                    dest: self.dest.clone(),
                    ..Default::default()
                },
                assets: AssetMap::new(
                    assets
                        .iter()
                        .map(|(key, name)| AssetEntry::new(*key, *name))
                        .collect(),
                ),
            }
        }
    }

    #[test]
    fn test_gura_scenario() {
        let fx = Fixture::new();
        fx.sprite("sGuraIdle", "frame0.png", 32, 40);

        let report = import_assets(&fx.config(&[("sGuraIdle", "char_gura.png")])).unwrap();

        let out = fx.dest.join("char_gura.webp");
        assert_eq!(
            report.outcome("sGuraIdle"),
            Some(&Outcome::Imported {
                output: out.clone(),
                width: 32,
                height: 40,
            })
        );
        let img = image::open(&out).unwrap();
        assert_eq!((img.width(), img.height()), (32, 40));
        assert!(!fx.dest.join("char_gura.png").exists());
    }

    #[test]
    fn test_missing_folder_is_skipped() {
        let fx = Fixture::new();
        let report = import_assets(&fx.config(&[("sKiaraIdle", "char_kiara.png")])).unwrap();

        assert_eq!(report.outcome("sKiaraIdle"), Some(&Outcome::Skipped));
        assert_eq!(fs::read_dir(&fx.dest).unwrap().count(), 0);
    }

    #[test]
    fn test_folder_without_image_warns() {
        let fx = Fixture::new();
        fx.raw("sMenu", "notes.txt", b"todo");

        let report = import_assets(&fx.config(&[("sMenu", "ui_menu_bg.png")])).unwrap();

        assert!(matches!(report.outcome("sMenu"), Some(Outcome::Warned { .. })));
        assert!(!fx.dest.join("ui_menu_bg.webp").exists());
    }

    #[test]
    fn test_only_one_file_per_entry() {
        let fx = Fixture::new();
        fx.sprite("sShrimp", "sShrimp_1.png", 8, 8);
        fx.sprite("sShrimp", "sShrimp_0.png", 16, 12);
        fx.sprite("sShrimp", "sShrimp_2.PNG", 4, 4);

        let report = import_assets(&fx.config(&[("sShrimp", "enemy_shrimp.png")])).unwrap();

        let written: Vec<_> = fs::read_dir(&fx.dest)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(written, vec![std::ffi::OsString::from("enemy_shrimp.webp")]);
        // sorted pick takes the lexicographically first frame
        assert!(matches!(
            report.outcome("sShrimp"),
            Some(Outcome::Imported { width: 16, height: 12, .. })
        ));
    }

    #[test]
    fn test_corrupt_image_does_not_stop_run() {
        let fx = Fixture::new();
        fx.raw("sDeadBeat", "0.png", b"\x89PNG garbage");
        fx.sprite("sKFP", "0.png", 5, 7);

        let report = import_assets(&fx.config(&[
            ("sDeadBeat", "enemy_deadbeat.png"),
            ("sKFP", "enemy_kfp.png"),
        ]))
        .unwrap();

        match report.outcome("sDeadBeat") {
            Some(Outcome::Errored { path, .. }) => {
                assert_eq!(path, &fx.source.join("sDeadBeat/0.png"));
            }
            other => panic!("expected error outcome, got {other:?}"),
        }
        assert!(!fx.dest.join("enemy_deadbeat.webp").exists());
        assert!(fx.dest.join("enemy_kfp.webp").exists());
        assert_eq!(report.imported(), 1);
        assert_eq!(report.errored(), 1);
    }

    #[test]
    fn test_file_named_like_key_is_skipped() {
        let fx = Fixture::new();
        fs::write(fx.source.join("sBaeIdle"), b"not a folder").unwrap();

        let report = import_assets(&fx.config(&[("sBaeIdle", "char_bae.png")])).unwrap();

        assert_eq!(report.outcome("sBaeIdle"), Some(&Outcome::Skipped));
        assert_eq!(fs::read_dir(&fx.dest).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_unlistable_folder_errors_and_run_continues() {
        use std::os::unix::fs::PermissionsExt;

        let fx = Fixture::new();
        fx.sprite("sFauna", "0.png", 4, 4);
        fx.sprite("sMumei", "0.png", 6, 6);
        let locked = fx.source.join("sFauna");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(&locked).is_ok() {
            // permission bits are not enforced for this user (e.g. root)
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let report = import_assets(&fx.config(&[
            ("sFauna", "char_fauna.png"),
            ("sMumei", "char_mumei.png"),
        ]))
        .unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match report.outcome("sFauna") {
            Some(Outcome::Errored { path, .. }) => assert_eq!(path, &locked),
            other => panic!("expected error outcome, got {other:?}"),
        }
        assert!(matches!(
            report.outcome("sMumei"),
            Some(Outcome::Imported { width: 6, height: 6, .. })
        ));
        assert!(!fx.dest.join("char_fauna.webp").exists());
    }

    #[test]
    fn test_jpeg_named_png_is_imported() {
        let fx = Fixture::new();
        let dir = fx.source.join("sGuraIdle");
        fs::create_dir_all(&dir).unwrap();
        image::RgbImage::from_pixel(10, 14, image::Rgb([30, 90, 220]))
            .save(dir.join("frame0.jpg"))
            .unwrap();
        fs::rename(dir.join("frame0.jpg"), dir.join("frame0.png")).unwrap();

        let report = import_assets(&fx.config(&[("sGuraIdle", "char_gura.png")])).unwrap();

        assert!(matches!(
            report.outcome("sGuraIdle"),
            Some(Outcome::Imported { width: 10, height: 14, .. })
        ));
        assert!(fx.dest.join("char_gura.webp").exists());
    }

    #[test]
    fn test_rerun_is_identical() {
        let fx = Fixture::new();
        fx.sprite("sHudButton", "a.png", 12, 9);
        let config = fx.config(&[("sHudButton", "ui_button.png")]);

        import_assets(&config).unwrap();
        let first = fs::read(fx.dest.join("ui_button.webp")).unwrap();
        import_assets(&config).unwrap();
        let second = fs::read(fx.dest.join("ui_button.webp")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_dest_created_without_touching_siblings() {
        let fx = Fixture::new();
        let sibling = fx.dest.parent().unwrap().join("ui");
        fs::create_dir_all(&sibling).unwrap();
        fs::write(sibling.join("keep.webp"), b"keep").unwrap();
        assert!(!fx.dest.exists());

        import_assets(&fx.config(&[])).unwrap();

        assert!(fx.dest.is_dir());
        assert_eq!(fs::read(sibling.join("keep.webp")).unwrap(), b"keep");
    }

    #[test]
    fn test_existing_dest_contents_are_kept() {
        let fx = Fixture::new();
        fs::create_dir_all(&fx.dest).unwrap();
        fs::write(fx.dest.join("manual.webp"), b"hand made").unwrap();

        import_assets(&fx.config(&[("sIrysIdle", "char_irys.png")])).unwrap();

        assert_eq!(fs::read(fx.dest.join("manual.webp")).unwrap(), b"hand made");
    }

    #[test]
    fn test_dest_creation_failure_is_fatal() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.dest.parent().unwrap()).unwrap();
        fs::write(&fx.dest, b"a file, not a directory").unwrap();

        assert!(import_assets(&fx.config(&[("sAmeIdle", "char_ame.png")])).is_err());
    }

    #[test]
    fn test_png_output_format() {
        let fx = Fixture::new();
        fx.sprite("sSake", "0.png", 3, 3);
        let mut config = fx.config(&[("sSake", "item_sake.gif")]);
        config.import.format = OutputFormat::Png;

        import_assets(&config).unwrap();

        let out = fx.dest.join("item_sake.png");
        assert_eq!(
            image::guess_format(&fs::read(out).unwrap()).unwrap(),
            image::ImageFormat::Png
        );
    }

    #[test]
    fn test_entries_keep_table_order() {
        let fx = Fixture::new();
        fx.sprite("sTakodachi", "0.png", 2, 2);

        let report = import_assets(&fx.config(&[
            ("sUberSheep", "item_ubersheep.png"),
            ("sTakodachi", "enemy_takodachi.png"),
            ("sHalu", "item_halu.png"),
        ]))
        .unwrap();

        let keys: Vec<_> = report
            .entries
            .iter()
            .map(|(e, _)| e.source_key.as_str())
            .collect();
        assert_eq!(keys, ["sUberSheep", "sTakodachi", "sHalu"]);
    }
}
