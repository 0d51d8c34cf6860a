// Sprite library: frame images plus masks, keyed by sprite-set name

use super::{sheet, AssetError};
use crate::engine::physics::PixelMask;
use image::{Rgba, RgbaImage};
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// One animation frame: the drawable image and its occupancy mask
#[derive(Debug, Clone)]
pub struct SpriteFrame {
    pub image: RgbaImage,
    pub mask: PixelMask,
}

impl SpriteFrame {
    /// Wrap an image, deriving the mask from its alpha channel
    pub fn new(image: RgbaImage) -> Self {
        let mask = PixelMask::from_alpha(&image);
        Self { image, mask }
    }

    /// Fully-opaque single-colour frame (placeholder art)
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let mut image = RgbaImage::new(width, height);
        for pixel in image.pixels_mut() {
            *pixel = Rgba(color);
        }
        Self::new(image)
    }
}

/// All sprite sets for a level, keyed by name (`"run_right"`, `"fire_on"`,
/// `"terrain"`, ...). Constructed once at startup, owned by the frame
/// orchestrator, and passed by reference into lookups.
#[derive(Debug, Default)]
pub struct SpriteLibrary {
    sets: HashMap<String, Vec<SpriteFrame>>,
}

impl SpriteLibrary {
    pub fn new() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: &str, frames: Vec<SpriteFrame>) {
        self.sets.insert(key.to_string(), frames);
    }

    pub fn frames(&self, key: &str) -> Option<&[SpriteFrame]> {
        self.sets.get(key).map(Vec::as_slice)
    }

    /// Number of frames in a set (0 if the set is missing)
    pub fn frame_count(&self, key: &str) -> usize {
        self.sets.get(key).map_or(0, Vec::len)
    }

    /// Look up a frame by raw index, wrapping by the set's length
    pub fn frame(&self, key: &str, raw_index: usize) -> Option<&SpriteFrame> {
        let frames = self.sets.get(key)?;
        if frames.is_empty() {
            return None;
        }
        frames.get(raw_index % frames.len())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Startup validation: every required key must resolve to a non-empty
    /// frame list. A miss here is a fatal configuration error, not a
    /// per-frame runtime fault.
    pub fn validate(&self, required: &[&str]) -> Result<(), AssetError> {
        for &key in required {
            match self.sets.get(key) {
                None => return Err(AssetError::MissingSprites(key.to_string())),
                Some(frames) if frames.is_empty() => {
                    return Err(AssetError::EmptySet(key.to_string()))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Load the on-disk asset layout:
    ///
    /// ```text
    /// assets/MainCharacters/MaskDude/{idle,run,jump,double_jump,fall,hit}.png
    /// assets/Traps/Fire/{on,off}.png
    /// assets/Terrain/Terrain.png
    /// assets/Background/Blue.png
    /// ```
    pub fn load(root: &Path) -> Result<Self, AssetError> {
        let mut library = Self::new();

        let character_dir = root.join("MainCharacters").join("MaskDude");
        for stem in ["idle", "run", "jump", "double_jump", "fall", "hit"] {
            let path = character_dir.join(format!("{stem}.png"));
            let (right, left) = sheet::load_directional_sheet(&path, 32, 32)?;
            library.insert(&format!("{stem}_right"), right);
            library.insert(&format!("{stem}_left"), left);
        }

        let fire_dir = root.join("Traps").join("Fire");
        for stem in ["on", "off"] {
            let frames = sheet::load_sheet(&fire_dir.join(format!("{stem}.png")), 16, 32)?;
            library.insert(&format!("fire_{stem}"), frames);
        }

        let terrain = sheet::load_terrain_block(&root.join("Terrain").join("Terrain.png"), 96)?;
        library.insert("terrain", vec![terrain]);

        let background = sheet::load_background(&root.join("Background").join("Blue.png"))?;
        library.insert("background", vec![background]);

        info!(
            "Loaded {} sprite sets from {}",
            library.sets.len(),
            root.display()
        );
        Ok(library)
    }

    /// Builtin flat-colour stand-in art, used when no asset directory is
    /// available (and by headless tests). Same keys and frame sizes as
    /// the on-disk layout: player frames are 64x64, like the 2x-scaled
    /// 32px character sheets.
    pub fn placeholder() -> Self {
        let mut library = Self::new();

        let player_sets: [(&str, usize, [u8; 4]); 6] = [
            ("idle", 11, [200, 200, 210, 255]),
            ("run", 12, [120, 180, 240, 255]),
            ("jump", 1, [120, 240, 160, 255]),
            ("double_jump", 6, [100, 220, 220, 255]),
            ("fall", 1, [240, 200, 120, 255]),
            ("hit", 7, [240, 90, 90, 255]),
        ];
        for (stem, count, color) in player_sets {
            let frames: Vec<SpriteFrame> =
                (0..count).map(|_| SpriteFrame::solid(64, 64, color)).collect();
            library.insert(&format!("{stem}_right"), frames.clone());
            library.insert(&format!("{stem}_left"), frames);
        }

        library.insert(
            "fire_on",
            (0..3)
                .map(|_| SpriteFrame::solid(32, 64, [250, 130, 40, 255]))
                .collect(),
        );
        library.insert(
            "fire_off",
            vec![SpriteFrame::solid(32, 64, [120, 70, 40, 255])],
        );
        library.insert(
            "terrain",
            vec![SpriteFrame::solid(96, 96, [110, 160, 90, 255])],
        );
        library.insert(
            "background",
            vec![SpriteFrame::solid(64, 64, [90, 140, 200, 255])],
        );

        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_wraps_by_set_length() {
        let mut library = SpriteLibrary::new();
        library.insert(
            "run_right",
            (0..3).map(|i| SpriteFrame::solid(4, 4, [i, 0, 0, 255])).collect(),
        );

        assert_eq!(library.frame_count("run_right"), 3);
        let wrapped = library.frame("run_right", 7).unwrap();
        let direct = library.frame("run_right", 1).unwrap();
        assert_eq!(wrapped.image.get_pixel(0, 0), direct.image.get_pixel(0, 0));
    }

    #[test]
    fn test_validate_missing_key() {
        let library = SpriteLibrary::new();
        let err = library.validate(&["idle_left"]).unwrap_err();
        assert!(matches!(err, AssetError::MissingSprites(_)));
    }

    #[test]
    fn test_validate_empty_set() {
        let mut library = SpriteLibrary::new();
        library.insert("idle_left", Vec::new());
        let err = library.validate(&["idle_left"]).unwrap_err();
        assert!(matches!(err, AssetError::EmptySet(_)));
    }

    #[test]
    fn test_placeholder_covers_standard_keys() {
        let library = SpriteLibrary::placeholder();
        let required = [
            "idle_left",
            "idle_right",
            "run_left",
            "run_right",
            "jump_left",
            "jump_right",
            "double_jump_left",
            "double_jump_right",
            "fall_left",
            "fall_right",
            "hit_left",
            "hit_right",
            "fire_on",
            "fire_off",
            "terrain",
            "background",
        ];
        assert!(library.validate(&required).is_ok());
    }

    #[test]
    fn test_placeholder_player_frames_are_opaque_64x64() {
        let library = SpriteLibrary::placeholder();
        let frame = library.frame("idle_right", 0).unwrap();
        assert_eq!(frame.image.dimensions(), (64, 64));
        assert_eq!(frame.mask.count(), 64 * 64);
    }
}
