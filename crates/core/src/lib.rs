pub mod error;
pub mod materialize;
pub mod models;
pub mod payload;

pub use error::MaterializeError;
pub use materialize::{
    ensure_directory, icon_file_name, materialize_icons, materialize_icons_with, write_icon_file,
    FsSink, IconSink,
};
pub use models::{IconRole, MaterializeConfig, MaterializeReport, WrittenIcon};
