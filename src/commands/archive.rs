use serde::Serialize;
use crate::core::{
    compression::ArchiveProcessor,
    file_ops::{scanner::ImageScanner, workspace::ExtractionWorkspace},
    imaging::{ImageBatch, ImageDecoder},
};
use crate::models::{FolderPaths, LoaderError, SkippedImage, SortMethod};

/// Result of one `load_from_archive` invocation
#[derive(Debug, Clone)]
pub struct ArchiveLoadOutput {
    /// `IMAGE` output
    pub images: ImageBatch,
    /// `STRING` output; empty only when no archive was given
    pub directory_path: String,
    /// Images that were left out because they could not be decoded
    pub skipped: Vec<SkippedImage>,
}

impl ArchiveLoadOutput {
    fn empty(directory_path: String) -> Self {
        Self {
            images: ImageBatch::empty(),
            directory_path,
            skipped: Vec::new(),
        }
    }

    /// Outputs in the order the host wires them: `(images, directory_path)`
    pub fn into_outputs(self) -> (ImageBatch, String) {
        (self.images, self.directory_path)
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            image_count: self.images.len(),
            directory_path: self.directory_path.clone(),
            skipped: self.skipped.clone(),
        }
    }
}

/// Serializable digest of a load, for host UIs that show what happened
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    pub image_count: usize,
    pub directory_path: String,
    pub skipped: Vec<SkippedImage>,
}

/// The "Load Images from Archive" node
///
/// # Flow
/// 1. Blank `archive_file` → empty batch, empty path
/// 2. Resolve the upload in the temp folder (missing → `NotFound`)
/// 3. Create `<input>/<archive stem>` and extract into it
/// 4. List top-level images, sorted ascending, then by `sort_method`
/// 5. Decode each image, skipping unreadable ones, and stack them
pub struct ArchiveImageLoader {
    folders: FolderPaths,
    processor: ArchiveProcessor,
    scanner: ImageScanner,
    decoder: ImageDecoder,
}

impl ArchiveImageLoader {
    pub fn new(folders: FolderPaths) -> Self {
        Self {
            folders,
            processor: ArchiveProcessor::new(),
            scanner: ImageScanner::new(),
            decoder: ImageDecoder::new(),
        }
    }

    pub fn folders(&self) -> &FolderPaths {
        &self.folders
    }

    pub fn load_from_archive(
        &self,
        archive_file: &str,
        sort_method: SortMethod,
    ) -> Result<ArchiveLoadOutput, LoaderError> {
        if archive_file.trim().is_empty() {
            return Ok(ArchiveLoadOutput::empty(String::new()));
        }

        // === Step 1: Resolve paths ===
        let workspace = ExtractionWorkspace::resolve(&self.folders, archive_file)?;
        workspace.prepare()?;
        let directory_path = workspace.extract_dir_string();

        // === Step 2: Extract ===
        log::info!(
            "Extracting '{}' to '{}'...",
            workspace.archive_path().display(),
            workspace.extract_dir().display()
        );
        self.processor
            .extract(workspace.archive_path(), workspace.extract_dir())?;
        log::info!("Extraction complete.");

        // === Step 3: List images ===
        let files = self.scanner.scan_sorted(workspace.extract_dir(), sort_method)?;
        if files.is_empty() {
            log::info!("No images found in '{}'", directory_path);
            return Ok(ArchiveLoadOutput::empty(directory_path));
        }

        // === Step 4: Decode and stack ===
        let decoded = self.decoder.decode_batch(&files)?;
        if decoded.batch.is_empty() {
            log::warn!("None of the {} image files in '{}' could be loaded", files.len(), directory_path);
        } else {
            log::info!(
                "Loaded {} of {} images from '{}'",
                decoded.batch.len(),
                files.len(),
                directory_path
            );
        }

        Ok(ArchiveLoadOutput {
            images: decoded.batch,
            directory_path,
            skipped: decoded.skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{Cursor, Write};
    use std::path::Path;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use tempfile::TempDir;
    use zip::{write::FileOptions, ZipWriter};

    fn png_bytes(value: u8) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([value, 0, 0])))
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn write_zip(path: &Path, entries: &[(&str, Vec<u8>)]) {
        let mut zip = ZipWriter::new(fs::File::create(path).unwrap());
        for (name, data) in entries {
            zip.start_file(*name, FileOptions::<()>::default()).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap();
    }

    fn setup() -> (TempDir, ArchiveImageLoader) {
        let root = TempDir::new().unwrap();
        let folders = FolderPaths::from_base_dir(root.path());
        fs::create_dir_all(&folders.temp_directory).unwrap();
        (root, ArchiveImageLoader::new(folders))
    }

    #[test]
    fn test_blank_input() {
        let (root, loader) = setup();

        for blank in ["", "   ", "\t\n"] {
            let output = loader.load_from_archive(blank, SortMethod::None).unwrap();
            assert!(output.images.is_empty());
            assert_eq!(output.directory_path, "");
        }
        assert!(!root.path().join("input").exists());
    }

    #[test]
    fn test_loads_in_order() {
        let (_root, loader) = setup();
        write_zip(
            &loader.folders().temp_directory.join("set.zip"),
            &[("b.png", png_bytes(20)), ("a.png", png_bytes(10)), ("c.png", png_bytes(30))],
        );

        let output = loader.load_from_archive("set.zip", SortMethod::ReverseAlphabetical).unwrap();
        let reds: Vec<f32> = (0..3)
            .map(|i| output.images.as_array()[[i, 0, 0, 0]] * 255.0)
            .collect();
        assert_eq!(reds.iter().map(|v| v.round() as u8).collect::<Vec<_>>(), vec![30, 20, 10]);
        assert_eq!(
            output.directory_path,
            loader.folders().input_directory.join("set").to_string_lossy()
        );
        assert!(output.skipped.is_empty());
    }

    #[test]
    fn test_summary() {
        let (_root, loader) = setup();
        write_zip(
            &loader.folders().temp_directory.join("mixed.zip"),
            &[("a.png", png_bytes(1)), ("b.png", b"junk".to_vec())],
        );

        let summary = loader.load_from_archive("mixed.zip", SortMethod::None).unwrap().summary();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["imageCount"], 1);
        assert_eq!(json["skipped"][0]["fileName"], "b.png");
    }
}
