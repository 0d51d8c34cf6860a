// Sprite-sheet slicing
//
// Source art is a horizontal strip of fixed-width frames. Frames are cut
// out, doubled with nearest-neighbour scaling to keep hard pixel edges,
// and mirrored for the left-facing variants.

use super::library::SpriteFrame;
use super::AssetError;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::Path;

/// Double an image with nearest-neighbour sampling
pub fn scale2x(image: &RgbaImage) -> RgbaImage {
    let (w, h) = image.dimensions();
    imageops::resize(image, w * 2, h * 2, FilterType::Nearest)
}

/// Cut a horizontal strip sheet into `sheet_width / frame_width` frames
pub fn slice_strip(sheet: &RgbaImage, frame_width: u32, frame_height: u32) -> Vec<RgbaImage> {
    let columns = sheet.width() / frame_width;
    (0..columns)
        .map(|i| imageops::crop_imm(sheet, i * frame_width, 0, frame_width, frame_height).to_image())
        .collect()
}

fn open_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.display().to_string()));
    }
    Ok(image::open(path)?.to_rgba8())
}

/// Load a strip sheet into scaled frames with masks
pub fn load_sheet(
    path: &Path,
    frame_width: u32,
    frame_height: u32,
) -> Result<Vec<SpriteFrame>, AssetError> {
    let sheet = open_rgba(path)?;
    if sheet.width() < frame_width {
        return Err(AssetError::SheetTooNarrow {
            path: path.display().to_string(),
            width: sheet.width(),
            frame_width,
        });
    }

    Ok(slice_strip(&sheet, frame_width, frame_height)
        .iter()
        .map(|frame| SpriteFrame::new(scale2x(frame)))
        .collect())
}

/// Load a strip sheet as a (right-facing, left-facing) pair, the left set
/// being a horizontal mirror of the art
pub fn load_directional_sheet(
    path: &Path,
    frame_width: u32,
    frame_height: u32,
) -> Result<(Vec<SpriteFrame>, Vec<SpriteFrame>), AssetError> {
    let right = load_sheet(path, frame_width, frame_height)?;
    let left = right
        .iter()
        .map(|frame| SpriteFrame::new(imageops::flip_horizontal(&frame.image)))
        .collect();
    Ok((right, left))
}

/// Cut one terrain block out of the tile atlas.
///
/// The solid square lives at (96, 0) in the atlas.
pub fn load_terrain_block(path: &Path, size: u32) -> Result<SpriteFrame, AssetError> {
    let atlas = open_rgba(path)?;
    let block = imageops::crop_imm(&atlas, 96, 0, size, size).to_image();
    Ok(SpriteFrame::new(block))
}

/// Load a background tile as a single frame
pub fn load_background(path: &Path) -> Result<SpriteFrame, AssetError> {
    Ok(SpriteFrame::new(open_rgba(path)?))
}
