#![no_main]

use libfuzzer_sys::fuzz_target;
use mddbl::{synthesize, Module, RootCommand, Target};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Some((module, target)) = content.split_once('\n') else {
        return;
    };
    let (Ok(module), Ok(target)) = (
        serde_json::from_str::<Module>(module),
        serde_json::from_str::<Target>(target),
    ) else {
        return;
    };

    let root = RootCommand::for_module(&module);
    let cmd = synthesize(root.as_str(), &module, Some(&target));
    assert!(cmd.starts_with(root.as_str()));
    assert!(cmd.ends_with(' '));
});
