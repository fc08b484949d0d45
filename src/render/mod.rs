mod card;
mod theme;

use log::info;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::stats::StreakStats;

pub use card::render_card;
pub use theme::ThemeName;

/// Writes one `streak-<theme>.svg` per theme into `dir`, creating it if needed.
pub fn write_cards(stats: &StreakStats, themes: &[ThemeName], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(themes.len());
    for &name in themes {
        let path = dir.join(name.file_name());
        std::fs::write(&path, render_card(stats, &name.theme()))?;
        info!("Saved: {}", path.display());
        written.push(path);
    }

    Ok(written)
}
