use std::{
    fmt::Debug,
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub fn read_toml<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    (|| toml::from_str(&fs_err::read_to_string(&path)?).map_err(anyhow::Error::new))().with_context(
        || {
            format!(
                "While trying to parse {path:?} as {}",
                std::any::type_name::<T>()
            )
        },
    )
}

/// Like [`read_toml`], but a missing file yields `T::default()`.
pub fn read_toml_or_default<P, T>(path: P) -> anyhow::Result<T>
where
    P: Into<PathBuf> + Debug,
    T: for<'de> Deserialize<'de> + Default,
{
    let path = path.into();
    match fs_err::metadata(&path) {
        Ok(_) => read_toml(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

pub fn create_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs_err::create_dir_all(parent),
        _ => Ok(()),
    }
}
