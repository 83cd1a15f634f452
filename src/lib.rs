// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`icongen` generates small application icon PNGs at fixed sizes.

Two independent pipelines produce the same artifact set:

- [`convert`] rasterizes existing SVG sources.
- [`letter`] draws a letter on a solid background, resolving a font
  through an ordered fallback chain.
*/

use std::path::{Path, PathBuf};

use usvg::fontdb;

pub mod convert;
pub mod letter;

/// Icon sizes produced by both pipelines, in pixels.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Directory holding the SVG sources and the PNG outputs.
pub const ICONS_DIR: &str = "icons";

/// A single icon to produce.
///
/// Instances are built once per run and never mutated.
#[derive(Clone, Debug)]
pub struct IconSpec {
    /// The SVG source, if the icon is converted rather than drawn.
    pub source: Option<PathBuf>,
    /// Output width and height in pixels.
    pub size: u32,
    /// Output PNG path.
    pub output: PathBuf,
}

impl IconSpec {
    /// An icon rasterized from `dir/icon{size}.svg`.
    pub fn converted(dir: &Path, size: u32) -> Self {
        IconSpec {
            source: Some(dir.join(format!("icon{}.svg", size))),
            size,
            output: dir.join(format!("icon{}.png", size)),
        }
    }

    /// An icon drawn procedurally, with no vector source.
    pub fn drawn(dir: &Path, size: u32) -> Self {
        IconSpec {
            source: None,
            size,
            output: dir.join(format!("icon{}.png", size)),
        }
    }
}

/// The fixed, ordered list of icons the converter produces.
pub fn converter_set(dir: &Path) -> Vec<IconSpec> {
    ICON_SIZES.iter().map(|&size| IconSpec::converted(dir, size)).collect()
}

/// A font database with all system fonts loaded.
pub fn load_system_fontdb() -> fontdb::Database {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    fontdb
}

/// Installs a stderr logger for library warnings.
pub fn init_logger() {
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, record.args()),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, record.args()),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, record.args()),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, record.args()),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, record.args()),
            }
        }
    }

    fn flush(&self) {}
}
