//! Terminology command implementation
//!
//! Looks a term up in every built-in table: vocabulary names, code system
//! OIDs, encounter class codes and discharge disposition codes.

use crate::core::terminology::tables::CODE_SYSTEM_MAPPINGS;
use crate::core::terminology::{map_discharge_disposition, map_encounter_class, vocabulary};
use crate::domain::Coding;
use clap::Args;
use serde::Serialize;

/// Arguments for the terminology command
#[derive(Args, Debug)]
pub struct TerminologyArgs {
    /// Vocabulary name, code system OID, or clinical code
    pub term: String,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything the built-in tables know about one term
#[derive(Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TermLookup {
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<VocabularyMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter_class: Option<Coding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discharge_disposition: Option<Coding>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyMatch {
    pub name: &'static str,
    pub code_system: &'static str,
    pub system_uri: &'static str,
    pub value_set_base: &'static str,
}

impl TermLookup {
    /// Run every table lookup for `term`
    pub fn resolve(term: &str) -> Self {
        let term = term.trim();
        Self {
            term: term.to_string(),
            vocabulary: vocabulary(term).map(|entry| VocabularyMatch {
                name: entry.name,
                code_system: entry.code_system,
                system_uri: entry.system_uri,
                value_set_base: entry.value_set_base,
            }),
            // Unlike map_code_system, only report OIDs that are actually in the table
            code_system: CODE_SYSTEM_MAPPINGS
                .iter()
                .find(|(oid, _)| *oid == term)
                .map(|(_, uri)| uri.to_string()),
            encounter_class: map_encounter_class(Some(term)),
            discharge_disposition: map_discharge_disposition(Some(term)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_none()
            && self.code_system.is_none()
            && self.encounter_class.is_none()
            && self.discharge_disposition.is_none()
    }
}

impl TerminologyArgs {
    /// Execute the terminology command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let lookup = TermLookup::resolve(&self.term);
        tracing::debug!(term = %lookup.term, found = !lookup.is_empty(), "Terminology lookup");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&lookup)?);
            return Ok(if lookup.is_empty() { 1 } else { 0 });
        }

        if lookup.is_empty() {
            println!("❌ No mapping found for '{}'", lookup.term);
            return Ok(1);
        }

        println!("🔍 {}", lookup.term);
        if let Some(v) = &lookup.vocabulary {
            println!("  Vocabulary: {} ({})", v.name, v.code_system);
            println!("    System: {}", v.system_uri);
            println!("    Value sets: {}", v.value_set_base);
        }
        if let Some(uri) = &lookup.code_system {
            println!("  Code system: {uri}");
        }
        if let Some(coding) = &lookup.encounter_class {
            println!("  Encounter class: {}", describe(coding));
        }
        if let Some(coding) = &lookup.discharge_disposition {
            println!("  Discharge disposition: {}", describe(coding));
        }
        Ok(0)
    }
}

fn describe(coding: &Coding) -> String {
    format!(
        "{} \"{}\" ({})",
        coding.code.as_deref().unwrap_or("-"),
        coding.display.as_deref().unwrap_or(""),
        coding.system.as_deref().unwrap_or("-")
    )
}
