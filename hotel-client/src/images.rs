//! Image selection for upload forms
//!
//! Images already stored on the server and images picked for upload are
//! tracked separately; the preview is their union. Dropping a pending
//! upload releases its bytes.

use std::path::Path;

use crate::error::ClientResult;

/// An image picked for upload
#[derive(Debug, Clone, PartialEq)]
pub struct PendingImage {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PendingImage {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read an image file, guessing its MIME type from the extension
    pub fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.jpg")
            .to_string();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self::new(file_name, mime, bytes))
    }
}

/// One entry of the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewImage<'a> {
    Stored(&'a str),
    Pending(&'a str),
}

/// Existing and newly picked images of one form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSet {
    existing: Vec<String>,
    pending: Vec<PendingImage>,
    single: bool,
}

impl ImageSet {
    /// Gallery accepting any number of images
    pub fn gallery(existing: Vec<String>) -> Self {
        Self {
            existing,
            pending: Vec::new(),
            single: false,
        }
    }

    /// Single-image slot (profile photo): a new pick replaces the old one
    pub fn single(existing: Option<String>) -> Self {
        Self {
            existing: existing.into_iter().collect(),
            pending: Vec::new(),
            single: true,
        }
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    pub fn existing(&self) -> &[String] {
        &self.existing
    }

    pub fn pending(&self) -> &[PendingImage] {
        &self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn add(&mut self, image: PendingImage) {
        if self.single {
            self.existing.clear();
            self.pending.clear();
        }
        self.pending.push(image);
    }

    /// Remove a stored image; it will not be kept on save
    pub fn remove_existing(&mut self, url: &str) -> bool {
        let before = self.existing.len();
        self.existing.retain(|u| u != url);
        before != self.existing.len()
    }

    /// Drop a pending upload
    pub fn remove_pending(&mut self, index: usize) -> Option<PendingImage> {
        (index < self.pending.len()).then(|| self.pending.remove(index))
    }

    /// Stored images first, then pending ones in pick order
    pub fn preview(&self) -> Vec<PreviewImage<'_>> {
        self.existing
            .iter()
            .map(|u| PreviewImage::Stored(u.as_str()))
            .chain(self.pending.iter().map(|p| PreviewImage::Pending(p.file_name.as_str())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.existing.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
