#![no_main]

use libfuzzer_sys::fuzz_target;
use pang_installer::{EntryPath, ManifestBuffer};

fuzz_target!(|data: &[u8]| {
    let Ok(manifest) = ManifestBuffer::from_bytes(data.to_vec()) else {
        return;
    };

    // Walk entries the way the installer does; the walk must terminate
    for index in 0..=manifest.len() {
        let Ok(field) = manifest.entry(index) else {
            return;
        };
        if field.is_empty() {
            break;
        }
        let _ = EntryPath::new(field.as_str());
    }
});
