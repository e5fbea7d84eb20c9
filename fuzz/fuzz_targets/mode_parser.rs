//! Fuzz target for channel mode parsing
//!
//! The first line of the input is the mode string, the remaining
//! space-separated words are its parameters. Every parameter must end up
//! either consumed or left over.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

use slirc_events::ModeParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        let (modestring, rest) = input.split_once('\n').unwrap_or((input, ""));
        let params: Vec<&str> = rest.split(' ').filter(|p| !p.is_empty()).collect();

        let result = ModeParser::default()
            .parse(modestring, &params)
            .expect("default grammar is complete");
        assert_eq!(
            result.consumed_params() + result.leftover_params().len(),
            params.len()
        );
    }
});
