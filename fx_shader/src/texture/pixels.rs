/// TexturePixels - CPU copy of one texture level
///
/// Region copies address the region as a row-major sequence of elements:
/// element `i` is the `i`-th pixel visited walking the region's rows top to
/// bottom and each row left to right.

use bytemuck::Pod;

use crate::error::{Error, Result};
use crate::geometry::Rectangle;

pub struct TexturePixels<T: Pod> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Pod> TexturePixels<T> {
    /// Zero-filled storage
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![T::zeroed(); width as usize * height as usize],
        }
    }

    /// Wrap existing pixels, which must hold exactly `width * height` elements
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidResource(format!(
                "pixel data holds {} elements, {}x{} texture needs {}",
                data.len(), width, height, expected
            )));
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whole-texture rectangle
    pub fn bounds(&self) -> Rectangle {
        Rectangle::from_size(self.width as i32, self.height as i32)
    }

    pub fn pixels(&self) -> &[T] {
        &self.data
    }

    /// Raw bytes, as handed to an upload call
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    // ===== REGION COPIES =====

    /// Copy region elements from `start_index` on into the front of `dst`
    ///
    /// Region elements before `start_index` are skipped; the first copied
    /// element lands at `dst[0]`. `rect` defaults to the whole texture.
    /// Copying stops once `element_count` elements have been written or the
    /// region runs out. Returns the number of elements written.
    pub fn get_data(
        &self,
        rect: Option<Rectangle>,
        dst: &mut [T],
        start_index: usize,
        element_count: usize,
    ) -> Result<usize> {
        check_buffer_len("destination", dst.len(), start_index, element_count)?;
        let region = self.resolve_region(rect)?;

        let mut written = 0;
        for (element, offset) in self.region_offsets(region).enumerate() {
            if element < start_index {
                continue;
            }
            if written >= element_count {
                break;
            }
            dst[element - start_index] = self.data[offset];
            written += 1;
        }
        Ok(written)
    }

    /// Copy `src[start_index..start_index + element_count]` into the region
    ///
    /// `src[start_index + i]` goes to region element `i`, starting at the
    /// region's origin. Returns the number of elements written, fewer than
    /// `element_count` when the region is smaller.
    pub fn set_data(
        &mut self,
        rect: Option<Rectangle>,
        src: &[T],
        start_index: usize,
        element_count: usize,
    ) -> Result<usize> {
        check_buffer_len("source", src.len(), start_index, element_count)?;
        let region = self.resolve_region(rect)?;

        let offsets: Vec<usize> = self
            .region_offsets(region)
            .take(element_count)
            .collect();
        for (i, offset) in offsets.iter().enumerate() {
            self.data[*offset] = src[start_index + i];
        }
        Ok(offsets.len())
    }

    // ===== INTERNAL =====

    fn resolve_region(&self, rect: Option<Rectangle>) -> Result<Rectangle> {
        let region = rect.unwrap_or_else(|| self.bounds());
        let overflows = region.x.checked_add(region.width).is_none()
            || region.y.checked_add(region.height).is_none();
        if overflows
            || region.width < 0
            || region.height < 0
            || !self.bounds().contains_rect(&region)
        {
            crate::fx_warn!("fx::TexturePixels", "Region {} outside texture {}", region, self.bounds());
            return Err(Error::InvalidResource(format!(
                "region {} outside texture bounds {}",
                region, self.bounds()
            )));
        }
        Ok(region)
    }

    /// Storage offsets of the region's pixels in row-major order
    fn region_offsets(&self, region: Rectangle) -> impl Iterator<Item = usize> {
        let width = self.width as usize;
        let columns = region.left() as usize..region.right() as usize;
        (region.top() as usize..region.bottom() as usize)
            .flat_map(move |row| columns.clone().map(move |col| row * width + col))
    }
}

fn check_buffer_len(which: &str, len: usize, start_index: usize, element_count: usize) -> Result<()> {
    match start_index.checked_add(element_count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(Error::InvalidResource(format!(
            "{} buffer has a length of {} but elements {}..{}+{} were requested",
            which, len, start_index, start_index, element_count
        ))),
    }
}

/// Number of levels in a full mip chain down to 1x1
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let mut size = width.max(height);
    let mut levels = 1;
    while size > 1 {
        size /= 2;
        levels += 1;
    }
    levels
}

#[cfg(test)]
#[path = "pixels_tests.rs"]
mod tests;
