#![no_main]

use libfuzzer_sys::fuzz_target;
use singlehdr::directive::{classify, filter_body, ONCE_PRAGMA, QUOTED_INCLUDE};
use singlehdr::GuardStyle;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let body = filter_body(input);

        // Dropped directives never survive filtering
        assert!(!body.text.contains(ONCE_PRAGMA));
        assert!(!body.text.contains(QUOTED_INCLUDE));
        assert_eq!(body.lines_kept, body.text.split_inclusive('\n').count());

        for line in input.lines() {
            let _ = classify(line);
        }

        let token = GuardStyle::Upper.canonicalize(input);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
});
