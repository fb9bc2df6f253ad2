//! JFLAP document boundary.
//!
//! This crate provides:
//! - A reader from JFLAP XML into the core's element records
//! - The one-call `convert` pipeline from XML source to rendered notation

mod reader;

pub use reader::{read_document, JffError};

use autospec_formal::formalize;

/// Convert JFLAP XML source to the rendered formal definition.
pub fn convert(source: &str) -> Result<String, JffError> {
    let doc = read_document(source)?;
    Ok(formalize(&doc)?)
}
