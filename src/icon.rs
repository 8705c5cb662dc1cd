//! A single icon variant loaded from the source tree.

use crate::variance::Variance;

/// One icon variant: canonical name, cleaned XML text, auto-mirror flag
/// and variance. Immutable once constructed.
///
/// The name is the PascalCase form of the source directory name, with
/// icons starting with a digit prefixed by an underscore (`add_alarm`
/// becomes `AddAlarm`, `360` becomes `_360`).
#[derive(Debug, Clone)]
pub struct Icon {
    pub name: String,
    pub xml: String,
    pub auto_mirrored: bool,
    pub variance: Variance,
}

/// Converts a lowercase-underscore icon name to its canonical PascalCase
/// form. A leading digit gets an underscore prefix, since identifiers
/// must not start with one.
pub fn canonical_name(source_name: &str) -> String {
    let mut name = String::with_capacity(source_name.len());
    for segment in source_name.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.push(first.to_ascii_uppercase());
            name.push_str(chars.as_str());
        }
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Rust identifier for a property, derived from the canonical name:
/// `AddAlarm` becomes `add_alarm`, `_360` stays `_360`.
pub fn property_ident(canonical: &str) -> String {
    let mut ident = String::with_capacity(canonical.len() + 4);
    for (i, c) in canonical.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                ident.push('_');
            }
            ident.push(c.to_ascii_lowercase());
        } else {
            ident.push(c);
        }
    }
    ident
}
