//! Static-site composition engine for sitewright.
//!
//! The engine takes an in-memory project snapshot (pages of typed blocks,
//! a theme, business metadata and the raw client questionnaire) and
//! deterministically produces a self-contained static artifact. Every
//! step is a pure function of its inputs: the same snapshot always yields
//! the same bytes.
//!
//! The pipeline, leaf-first:
//!
//! 1. [`analyze`] derives a completeness profile from the raw client data.
//! 2. [`template`] maps that profile to an ordered structural plan and can
//!    materialize it into a page of seed blocks.
//! 3. [`personalize`] substitutes business-data tokens inside block props.
//! 4. [`render`] sanitizes each block's prop bag and invokes its renderer
//!    through an error boundary that never fails.
//! 5. [`compose`] merges the per-block fragments in block order.
//! 6. [`enhance`] post-processes the composed document (scroll effects,
//!    development hot-reload client).
//! 7. [`export`] wraps everything into the final HTML5 document plus
//!    ancillary files.
//!
//! The engine performs no I/O; callers hand it values and receive values.

pub mod analyze;
pub mod compose;
pub mod enhance;
pub mod export;
pub mod personalize;
pub mod render;
pub mod site;
pub mod template;

pub use analyze::{analyze, ClientDataAnalysis};
pub use compose::{compose, compose_fragments, BlockFragment};
pub use export::{
    export_site, export_with_registry, AdditionalFile, ExportArtifact, ExportMode, ExportOptions,
};
pub use render::{
    invoke, sanitize_props, RenderContext, RenderError, RenderFn, RenderResult, RendererRegistry,
};
pub use site::{
    Availability, Block, BusinessInfo, ExportError, GlobalSections, Page, PageMeta, ProjectData,
    Props, Theme, ThemeColors, Typography,
};
pub use template::{select_structure, TemplateBlock, TemplateStructure, PORTFOLIO_THRESHOLD};
