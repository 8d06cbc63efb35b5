#![no_main]
use libfuzzer_sys::fuzz_target;

use rill_lua::{parse_with_options, InputStream, ParserOptions, TokenStream};

fuzz_target!(|data: &[u8]| {
    // The fuzzer gives us raw bytes.
    // We only care about inputs that are valid UTF-8.
    if let Ok(s) = std::str::from_utf8(data) {
        // We are looking for panics, so results are ignored.
        let _ = TokenStream::new(InputStream::new(s)).count();
        let _ = parse_with_options(s, ParserOptions::default());
        let _ = parse_with_options(s, ParserOptions::default().strict());
    }
});
