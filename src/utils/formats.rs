use std::fmt;
use std::path::Path;
use std::str::FromStr;
use crate::utils::PipelineError;

/// Formats a qualifying source file can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    JPEG,
    PNG,
}

impl SourceFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Returns the format of `path` when its extension is on the allow-list.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        [Self::PNG, Self::JPEG]
            .into_iter()
            .find(|format| format.matches_extension(ext))
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JPEG => f.write_str("jpeg"),
            Self::PNG => f.write_str("png"),
        }
    }
}

/// Formats the converter can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetFormat {
    #[default]
    WebP,
    AVIF,
}

impl TargetFormat {
    /// Extension written on converted siblings
    pub fn extension(&self) -> &'static str {
        match self {
            Self::WebP => "webp",
            Self::AVIF => "avif",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for TargetFormat {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "webp" => Ok(Self::WebP),
            "avif" => Ok(Self::AVIF),
            other => Err(PipelineError::format(format!(
                "Unsupported target format: {other}"
            ))),
        }
    }
}
