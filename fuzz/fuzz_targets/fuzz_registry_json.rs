#![no_main]

use libfuzzer_sys::fuzz_target;
use mddbl::domain::ports::RegistryRepository;
use mddbl::infrastructure::JsonRegistryRepository;

fuzz_target!(|data: &[u8]| {
    // Loading arbitrary mddbl.json content should never panic
    let Ok(dir) = tempfile::tempdir() else {
        return;
    };
    let path = dir.path().join("mddbl.json");
    if std::fs::write(&path, data).is_ok() {
        let _ = JsonRegistryRepository::with_path(path).load();
    }
});
