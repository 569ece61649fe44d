//! Fuzz target for the variant record parser
//!
//! This target feeds arbitrary byte strings to the parser to find crashes,
//! panics, or memory issues.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to convert bytes to a string
    if let Ok(input) = std::str::from_utf8(data) {
        // Don't fuzz extremely long inputs - diminishing returns
        if input.len() > 1000 {
            return;
        }

        // The parser should never panic or crash on any input
        if let Ok(record) = vcf_leftalign::VariantRecord::parse(input, 1) {
            // Serialization of anything that parsed must not panic either
            let _ = record.to_string();
        }
    }
});
