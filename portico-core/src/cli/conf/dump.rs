use crate::conf::{DocumentFormat, encode_bootstrap, load_document};
use std::path::PathBuf;

/// Prints the decoded document. JSON unless `--yaml` is given.
pub fn dump(path: PathBuf, json: bool, yaml: bool) -> anyhow::Result<()> {
    let bootstrap = load_document(&path)?;

    let format = if yaml && !json {
        DocumentFormat::Yaml
    } else {
        DocumentFormat::Json
    };

    println!("{}", encode_bootstrap(&bootstrap, format)?);
    Ok(())
}
