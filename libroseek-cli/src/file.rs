use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use libroseek::file::FavoritesFile;

use directories::ProjectDirs;
use eyre::{eyre, Context};
use log::{info, trace};

const FAVORITES_FILE_NAME: &str = "favorites.json";
const THEME_FILE_NAME: &str = "theme";

/// Resolve where the favorites live: an explicit `--file` path, or the
/// per-user data directory.
pub fn favorites_path(file: Option<PathBuf>) -> eyre::Result<PathBuf> {
    if let Some(path) = file {
        trace!("Using {} as the favorites file", path.display());
        Ok(path)
    } else {
        let dirs = ProjectDirs::from("", "", "libroseek")
            .ok_or_else(|| eyre!("Cannot determine a home directory for the favorites file"))?;
        let dir = dirs.data_dir();
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create the '{}' directory", dir.display()))?;
        Ok(dir.join(FAVORITES_FILE_NAME))
    }
}

pub fn open_or_create_favorites_file(path: &Path) -> eyre::Result<FavoritesFile> {
    if let Ok(file) = FavoritesFile::open(path) {
        Ok(file)
    } else {
        info!(
            "No favorites file found - creating the new file `{}`",
            path.display()
        );
        FavoritesFile::create(path)
            .wrap_err_with(|| format!("Failed to create the '{}' file", path.display()))
    }
}

/// The display theme preference, persisted as one of two literal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    const fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    const fn stored(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn from_stored(text: &str) -> Self {
        // anything unrecognised falls back to the default light theme
        if text == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("Light"),
            Self::Dark => f.write_str("Dark"),
        }
    }
}

/// Flip the persisted theme preference and return the new value.
pub fn toggle_theme(dir: &Path) -> eyre::Result<Theme> {
    let path = dir.join(THEME_FILE_NAME);
    let current = fs::read_to_string(&path)
        .map_or(Theme::Light, |text| Theme::from_stored(text.trim()));
    let next = current.flip();

    trace!("Switching the theme preference from {current} to {next}");
    fs::write(&path, next.stored())
        .wrap_err_with(|| format!("Failed to write the '{}' file", path.display()))?;
    Ok(next)
}
