#![no_main]

use glossgen::glossary::{parse_glossary, DuplicatePolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing arbitrary text should fail cleanly, never panic
    if let Ok(glossary) = parse_glossary(data, DuplicatePolicy::LastWriteWins) {
        assert_eq!(glossary.iter().count(), glossary.len());
        assert_eq!(glossary.sorted_terms().len(), glossary.len());
    }
});
