//! Post-processing passes over an already-composed document.
//!
//! Passes are independent and composable: each one either rewrites a
//! block fragment or pushes payloads into the structured document
//! builder. Injection goes through explicit head/body slots rather than
//! string search-and-replace, while keeping the final byte-level
//! contract (CSS before `</head>`, JS before `</body>`).

mod document;
pub mod hot_reload;
pub mod parallax;

pub use document::HtmlDocument;
pub use parallax::ScrollCategory;
