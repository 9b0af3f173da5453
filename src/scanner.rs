use crate::settings::GeotagConfig;
use anyhow::{anyhow, bail, Result};
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Lists the images directly inside the input directory, sorted by file name.
///
/// Each call to [`ImageScanner::iter`] walks the directory again.
pub struct ImageScanner<'a> {
    config: &'a GeotagConfig,
}

impl<'a> ImageScanner<'a> {
    pub fn new(config: &'a GeotagConfig) -> Self {
        Self { config }
    }

    pub fn iter(&self) -> Result<impl Iterator<Item = Result<PathBuf>> + 'a> {
        let input_dir = &self.config.input_dir;
        if !input_dir.is_dir() {
            bail!("Input directory not found: {}", input_dir.display());
        }

        let config = self.config;
        let walker = WalkBuilder::new(input_dir)
            .max_depth(Some(1))
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        Ok(walker.filter_map(move |entry| match entry {
            // Depth 0 is the input directory itself
            Ok(e) if e.depth() == 0 => None,
            // is_file follows symlinks, so linked images are kept and
            // dangling links are dropped
            Ok(e) => {
                let path = e.into_path();
                (config.is_image(&path) && path.is_file()).then_some(Ok(path))
            }
            Err(e) => Some(Err(anyhow!("Failed to list input directory: {}", e))),
        }))
    }
}
