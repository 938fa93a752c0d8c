use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::foundation::error::{FodError, FodResult};

/// PNG files available as decorative foregrounds.
#[derive(Clone, Debug)]
pub struct ImageLibrary {
    dir: PathBuf,
    files: Vec<PathBuf>,
}

impl ImageLibrary {
    /// List the `.png` files (any case) directly inside `dir`, sorted by path.
    ///
    /// A missing directory or one without PNGs is an error.
    pub fn scan(dir: &Path) -> FodResult<Self> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FodError::NoImages(dir.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_png(&path) {
                files.push(path);
            }
        }
        if files.is_empty() {
            return Err(FodError::NoImages(dir.to_path_buf()));
        }
        files.sort();

        Ok(Self {
            dir: dir.to_path_buf(),
            files,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Uniformly pick one file; `None` only for an empty library.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Path> {
        self.files.choose(rng).map(PathBuf::as_path)
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Decoded decorative image, shrunk to its bounding box, in premultiplied RGBA8.
#[derive(Clone, Debug)]
pub struct DecorativeImage {
    pub width: u32,
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

impl DecorativeImage {
    pub fn load(path: &Path, max_box: u32) -> FodResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read image '{}'", path.display()))?;
        Self::decode(&bytes, max_box)
    }

    pub fn decode(bytes: &[u8], max_box: u32) -> FodResult<Self> {
        let img = image::load_from_memory(bytes)?;
        let (w, h) = fit_within(img.width(), img.height(), max_box);
        let img = if (w, h) == (img.width(), img.height()) {
            img
        } else {
            img.resize_exact(w, h, image::imageops::FilterType::Lanczos3)
        };

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgba8_premul = rgba.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);

        Ok(Self {
            width,
            height,
            rgba8_premul,
        })
    }
}

/// Size of a `width`×`height` image scaled down (never up) to fit a `max_box` square,
/// preserving aspect ratio.
pub fn fit_within(width: u32, height: u32, max_box: u32) -> (u32, u32) {
    if width <= max_box && height <= max_box {
        return (width, height);
    }
    let scale = f64::min(
        max_box as f64 / width as f64,
        max_box as f64 / height as f64,
    );
    let w = ((width as f64 * scale).round() as u32).clamp(1, max_box);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_box);
    (w, h)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/images.rs"]
mod tests;
