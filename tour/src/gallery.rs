//! Image gallery and lightbox state.
//!
//! A gallery is a fixed list of images plus the lightbox cursor: whether it is
//! open, which image it shows and the zoom factor. Navigation wraps in both
//! directions. Zoom moves in fixed steps between [`ZOOM_MIN`] and [`ZOOM_MAX`]
//! and returns to 1.0 every time the lightbox opens.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    /// Caption under the thumbnail, if any.
    pub label: Option<String>,
}

impl GalleryImage {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into(), label: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    current: usize,
    open: bool,
    zoom: f64,
}

impl Gallery {
    #[must_use]
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images, current: 0, open: false, zoom: 1.0 }
    }

    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&GalleryImage> {
        self.images.get(self.current)
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    // --- Lightbox ---

    /// Open the lightbox on image `index`. Out-of-range indexes are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            log::warn!("gallery: no image at index {index}");
            return false;
        }
        self.current = index;
        self.open = true;
        self.zoom = 1.0;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Jump to a thumbnail without touching the zoom.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next_image(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    pub fn previous_image(&mut self) {
        let len = self.images.len();
        if len > 0 {
            self.current = (self.current + len - 1) % len;
        }
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    // --- Keyboard ---

    /// Apply a `KeyboardEvent.key` value. Keys only act while the lightbox is
    /// open. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowLeft" => self.previous_image(),
            "ArrowRight" => self.next_image(),
            _ => return false,
        }
        true
    }

    // --- Rendering ---

    /// Position label such as `"3 / 8"`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }

    /// Zoom as a whole percentage, e.g. `"150%"`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{:.0}%", self.zoom * 100.0)
    }

    #[must_use]
    pub fn zoom_style(&self) -> String {
        format!("transform: scale({});", self.zoom)
    }

    /// Arrows and thumbnails are hidden for single-image galleries.
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }
}
