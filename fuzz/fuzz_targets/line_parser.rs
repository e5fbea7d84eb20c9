//! Fuzz target for IRC line parsing
//!
//! Feeds arbitrary input to the line parser and the CTCP/hostmask helpers
//! it relies on; none of them may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > 8191 {
            return;
        }

        if let Ok(line) = slirc_events::ParsedLine::parse("Sopel", input) {
            let _ = line.account();
            let _ = line.ctcp_kind();
        }

        let _ = slirc_events::CtcpFrame::parse(input);
        let _ = slirc_events::Hostmask::parse(input);
    }
});
