use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Once;

use archive_image_loader::{ArchiveImageLoader, FolderPaths};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use sevenz_rust::{SevenZArchiveEntry, SevenZWriter};
use tempfile::TempDir;
use zip::{write::FileOptions, ZipWriter};

static INIT: Once = Once::new();

pub struct TestContext {
    pub root: TempDir,
    pub folders: FolderPaths,
    pub loader: ArchiveImageLoader,
}

pub fn init_context() -> TestContext {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });

    let root = TempDir::new().expect("Failed to create test root");
    let folders = FolderPaths::from_base_dir(root.path());
    fs::create_dir_all(&folders.temp_directory).expect("Failed to create temp folder");
    let loader = ArchiveImageLoader::new(folders.clone());

    TestContext { root, folders, loader }
}

/// 2x2 image whose red channel is `red`, encoded as `format`
pub fn image_bytes(red: u8, format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([red, 0, 0])))
        .write_to(&mut Cursor::new(&mut buf), format)
        .expect("Failed to encode test image");
    buf
}

pub fn png(red: u8) -> Vec<u8> {
    image_bytes(red, ImageFormat::Png)
}

pub fn write_zip(path: &Path, entries: &[(&str, Vec<u8>)]) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    let opts = FileOptions::<()>::default();
    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, opts).unwrap();
        } else {
            zip.start_file(*name, opts).unwrap();
            zip.write_all(data).unwrap();
        }
    }
    zip.finish().unwrap();
}

pub fn write_7z(path: &Path, entries: &[(&str, Vec<u8>)]) {
    let staging = TempDir::new().unwrap();
    let mut writer = SevenZWriter::new(File::create(path).unwrap()).unwrap();
    for (i, (name, data)) in entries.iter().enumerate() {
        let source = staging.path().join(format!("entry_{}", i));
        fs::write(&source, data).unwrap();
        let mut file = File::open(&source).unwrap();
        writer
            .push_archive_entry(SevenZArchiveEntry::from_path(&source, name.to_string()), Some(&mut file))
            .unwrap();
    }
    writer.finish().unwrap();
}

/// Red channel of every image in the batch, back on the 0-255 scale
pub fn reds(output: &archive_image_loader::ArchiveLoadOutput) -> Vec<u8> {
    let data = output.images.as_array();
    (0..output.images.len())
        .map(|i| (data[[i, 0, 0, 0]] * 255.0).round() as u8)
        .collect()
}
