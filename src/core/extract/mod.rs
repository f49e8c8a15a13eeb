//! Field extractors
//!
//! Each extractor queries the [`DocumentContext`] for a fixed set of node
//! locations and returns a plain record. Extraction never fails: a missing node
//! or attribute simply leaves the corresponding field as `None`.

pub mod encounter;
pub mod medication;
pub mod patient;

use super::document::{DocumentContext, Scope};
use crate::domain::{CodedValue, ExtractedDocument};

/// Runs all three extractors against one document
pub fn extract_document(ctx: &DocumentContext<'_>) -> ExtractedDocument {
    ExtractedDocument {
        patient: patient::extract(ctx),
        encounter: encounter::extract(ctx),
        medication: medication::extract(ctx),
    }
}

/// Reads a CDA coded element
///
/// Display text comes from `displayName`, falling back to a bare `display`
/// attribute. An absent element yields an all-`None` value.
pub(crate) fn read_coded(element: Option<Scope<'_, '_>>) -> CodedValue {
    let Some(element) = element else {
        return CodedValue::default();
    };

    CodedValue {
        code: element.own_attr("code"),
        code_system: element.own_attr("codeSystem"),
        code_system_name: element.own_attr("codeSystemName"),
        display: element
            .own_attr("displayName")
            .or_else(|| element.own_attr("display")),
    }
}
