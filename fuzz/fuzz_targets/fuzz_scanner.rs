#![no_main]

use arbitrary::Arbitrary;
use glossgen::utils::{next_run, runs, SeparatorSet};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    separators: &'a str,
    position: usize,
}

fuzz_target!(|input: Input| {
    let seps = SeparatorSet::from_chars(input.separators);

    // Runs must tile the text exactly
    let rebuilt: String = runs(input.text, &seps).map(|r| r.text).collect();
    assert_eq!(rebuilt, input.text);

    // Arbitrary offsets must never panic
    if let Some(run) = next_run(input.text, input.position, &seps) {
        assert!(!run.is_empty());
        assert_eq!(&input.text[run.start..run.end()], run.text);
    }
});
