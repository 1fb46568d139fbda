//! Multi-resolution `.ico` container.

use crate::{BadgeError, BadgeResult};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;
use std::{fs, path::Path};

/// Frame sizes of the application icon, smallest first.
pub const ICON_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Largest edge an icon directory entry can declare.
pub const MAX_FRAME_EDGE: u32 = 256;

/// Ordered set of frames; the first frame is the primary image.
#[derive(Debug, Default, Clone)]
pub struct IconContainer {
    frames: Vec<RgbaImage>,
}

impl IconContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: RgbaImage) -> BadgeResult<()> {
        let (w, h) = frame.dimensions();
        if w == 0 || h == 0 || w > MAX_FRAME_EDGE || h > MAX_FRAME_EDGE {
            return Err(BadgeError::InvalidParameter(format!(
                "icon frame {w}x{h} outside 1..={MAX_FRAME_EDGE}"
            )));
        }

        self.frames.push(frame);
        Ok(())
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Encode every frame, each declaring its own width and height.
    pub fn encode(&self) -> BadgeResult<Vec<u8>> {
        if self.frames.is_empty() {
            return Err(BadgeError::InvalidParameter(
                "icon container has no frames".to_string(),
            ));
        }

        let mut dir = IconDir::new(ResourceType::Icon);
        for frame in &self.frames {
            let (w, h) = frame.dimensions();
            let image = IconImage::from_rgba_data(w, h, frame.as_raw().clone());
            dir.add_entry(IconDirEntry::encode(&image)?);
        }

        let mut buf = vec![];
        dir.write(&mut buf)?;
        Ok(buf)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> BadgeResult<()> {
        fs::write(path, self.encode()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{badge::render_icon, font::FontChain};
    use std::io::Cursor;

    fn full_container() -> IconContainer {
        let fonts = FontChain::builtin_only();
        let mut container = IconContainer::new();
        for size in ICON_SIZES {
            container.push(render_icon(size, &fonts).unwrap()).unwrap();
        }
        container
    }

    #[test]
    fn test_encode_declares_every_frame() {
        let bytes = full_container().encode().unwrap();
        let dir = IconDir::read(Cursor::new(bytes)).unwrap();

        assert_eq!(dir.resource_type(), ResourceType::Icon);
        assert_eq!(dir.entries().len(), ICON_SIZES.len());
        for (entry, size) in dir.entries().iter().zip(ICON_SIZES) {
            assert_eq!(entry.width(), size);
            assert_eq!(entry.height(), size);
        }
    }

    #[test]
    fn test_primary_frame_decodes() {
        let container = full_container();
        let bytes = container.encode().unwrap();
        let dir = IconDir::read(Cursor::new(bytes)).unwrap();

        let primary = dir.entries()[0].decode().unwrap();
        assert_eq!((primary.width(), primary.height()), (16, 16));
        assert_eq!(primary.rgba_data(), container.frames()[0].as_raw().as_slice());
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(
            full_container().encode().unwrap(),
            full_container().encode().unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_frames() {
        let mut container = IconContainer::new();
        assert!(container.encode().is_err());
        assert!(container.push(RgbaImage::new(512, 512)).is_err());
        assert!(container.push(RgbaImage::new(0, 16)).is_err());
        assert!(container.is_empty());
    }
}
