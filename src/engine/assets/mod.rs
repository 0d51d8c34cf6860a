// Sprite asset loading and lookup
//
// Sheets are sliced once at startup into per-frame images plus pixel
// masks, collected into an explicitly-constructed `SpriteLibrary` that
// the frame orchestrator owns and passes by reference. There is no
// process-wide sprite cache.

pub mod library;
pub mod sheet;

pub use library::{SpriteFrame, SpriteLibrary};

/// Asset loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("No sprites registered for \"{0}\"")]
    MissingSprites(String),

    #[error("Sprite set \"{0}\" has no frames")]
    EmptySet(String),

    #[error("Sheet {path} is {width}px wide, narrower than one {frame_width}px frame")]
    SheetTooNarrow {
        path: String,
        width: u32,
        frame_width: u32,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::MissingSprites("run_left".to_string());
        assert_eq!(err.to_string(), "No sprites registered for \"run_left\"");
    }
}
