#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    if let Ok(buffer) = std::str::from_utf8(rest) {
        // Field splitting should never panic, for any index or delimiter
        let delimiter = buffer.chars().next().unwrap_or('\n');
        let _ = pang_installer::field_at(buffer, usize::from(selector), delimiter);
        let _ = pang_installer::field_at(buffer, usize::from(selector), '\n');
    }
});
