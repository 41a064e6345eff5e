#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Config parsing should never panic
        let _ = toml::from_str::<pang_installer::Config>(s);
    }
});
