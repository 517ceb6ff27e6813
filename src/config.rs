use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::LutError;

/* Both palette file shapes in the wild are accepted: a bare list of color
   strings (colors.json) and a named object with a "colors" list. */
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaletteFile {
    Bare(Vec<String>),
    Named {
        #[serde(default)]
        name: Option<String>,
        colors: Vec<String>
    }
}

pub(crate) fn read_specs(path: &Path) -> Result<Vec<String>, LutError> {
    let raw = fs::read_to_string(path).map_err(|source| LutError::Io {
        path: path.to_path_buf(),
        source
    })?;

    parse_specs(&raw).map_err(|source| LutError::Format {
        path: path.to_path_buf(),
        source
    })
}

fn parse_specs(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    match serde_json::from_str(raw)? {
        PaletteFile::Bare(colors) => Ok(colors),
        PaletteFile::Named { name, colors } => {
            if let Some(name) = name {
                tracing::debug!(name = %name, "reading named palette");
            }
            Ok(colors)
        }
    }
}
