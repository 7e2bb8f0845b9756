use std::path::PathBuf;

use thiserror::Error;

use crate::tokens::PaletteRole;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("palette override for `{role}` has no `main` color to derive variants from")]
    MissingMain { role: PaletteRole },

    #[error("failed to read theme options from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme options: {0}")]
    Toml(#[from] toml::de::Error),
}
