use crate::core::{DiscoveredString, TranslationCatalog, TranslationEntry, UntranslatedSet};

/// Compute the discovered strings that have no entry in the catalog.
///
/// Each missing id appears once, as a fresh entry with an empty translation,
/// in the order it was first discovered.
pub fn filter_untranslated(
    catalog: &TranslationCatalog,
    discovered: &[DiscoveredString],
) -> UntranslatedSet {
    let mut untranslated = UntranslatedSet::new();
    for string in discovered {
        if catalog.contains(&string.text) || untranslated.contains(&string.text) {
            continue;
        }
        untranslated.insert(TranslationEntry::untranslated(&string.text));
    }
    untranslated
}
