use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of a config element, used to point validation issues at their source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Origin {
    pub file: PathBuf,
    pub section: String,
    pub index: Option<usize>,
}

impl Origin {
    pub fn new(file: &Path, section: &str, index: Option<usize>) -> Self {
        Self {
            file: file.to_path_buf(),
            section: section.to_string(),
            index,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]", self.section, i),
            None => f.write_str(&self.section),
        }
    }
}
