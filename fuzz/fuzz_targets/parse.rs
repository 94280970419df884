#![no_main]

use libfuzzer_sys::fuzz_target;
use rigid_markup::{Document, PatternTable, SearchPattern, search};

fuzz_target!(|data: &[u8]| {
    // Parsing may fail; it must never panic
    if let Ok(document) = Document::parse(data) {
        // If parsing succeeds, fuzz the attribute search
        let patterns = PatternTable::new()
            .with(0u8, SearchPattern::any("storyboardIdentifier"))
            .with(1u8, SearchPattern::named("entity", "name"));
        let _ = search(&document, &patterns, |_, value| value.to_string());
    }
});
