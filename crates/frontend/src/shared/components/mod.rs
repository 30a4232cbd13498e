pub mod feature_tile;
pub mod file_drop_zone;
pub mod ui;

pub use feature_tile::FeatureTile;
pub use file_drop_zone::FileDropZone;
