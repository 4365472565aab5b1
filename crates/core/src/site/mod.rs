mod error;
mod types;

pub use error::ExportError;
pub use types::{
    Availability, Block, BusinessInfo, GlobalSections, Page, PageMeta, ProjectData, Props, Theme,
    ThemeColors, Typography,
};
