use super::*;

fn module(name: &str) -> Module {
    Module::named(name)
}

fn target(name: &str) -> Target {
    Target::named(name)
}

#[test]
fn registry_new_is_empty() {
    let registry = Registry::new();
    assert!(!registry.debug);
    assert!(registry.modules.is_empty());
    assert!(registry.targets.is_empty());
}

#[test]
fn registry_add_module_rejects_duplicate() {
    let mut registry = Registry::new();
    registry.add_module(module("blink")).unwrap();

    let err = registry.add_module(module("blink")).unwrap_err();
    assert_eq!(err, DuplicateName("blink".to_string()));
    assert_eq!(registry.modules.len(), 1);
}

#[test]
fn registry_add_target_rejects_duplicate() {
    let mut registry = Registry::new();
    registry.add_target(target("esp32")).unwrap();
    assert!(registry.add_target(target("esp32")).is_err());
    assert!(registry.add_target(target("ESP32")).is_ok());
    assert_eq!(registry.targets.len(), 2);
}

#[test]
fn registry_remove_first_match_only() {
    let mut registry = Registry::new();
    registry.modules.push(Module {
        description: "first".to_string(),
        ..module("blink")
    });
    registry.modules.push(Module {
        description: "second".to_string(),
        ..module("blink")
    });

    let removed = registry.remove_module("blink").unwrap();
    assert_eq!(removed.description, "first");
    assert_eq!(registry.modules.len(), 1);
    assert_eq!(registry.modules[0].description, "second");
}

#[test]
fn registry_remove_missing_returns_none() {
    let mut registry = Registry::new();
    assert!(registry.remove_module("nope").is_none());
    assert!(registry.remove_target("nope").is_none());
}

#[test]
fn registry_sort_by_name_is_ordinal() {
    let mut registry = Registry::new();
    for name in ["zeta", "Alpha", "beta", "alpha"] {
        registry.modules.push(module(name));
        registry.targets.push(target(name));
    }

    registry.sort_by_name();

    let names: Vec<&str> = registry.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "alpha", "beta", "zeta"]);
    let names: Vec<&str> = registry.targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "alpha", "beta", "zeta"]);
}

#[test]
fn registry_sort_keeps_duplicate_order() {
    let mut registry = Registry::new();
    registry.modules.push(module("b"));
    registry.modules.push(Module {
        description: "first".to_string(),
        ..module("a")
    });
    registry.modules.push(Module {
        description: "second".to_string(),
        ..module("a")
    });

    registry.sort_by_name();

    assert_eq!(registry.modules[0].description, "first");
    assert_eq!(registry.modules[1].description, "second");
}

#[test]
fn registry_toggle_debug() {
    let mut registry = Registry::new();
    assert!(registry.toggle_debug());
    assert!(!registry.toggle_debug());
}

#[test]
fn registry_duplicate_names() {
    let mut registry = Registry::new();
    registry.modules.push(module("blink"));
    registry.modules.push(module("blink"));
    registry.modules.push(module("blink"));
    registry.modules.push(module("hello"));
    registry.targets.push(target("esp32"));
    registry.targets.push(target("esp32"));

    assert_eq!(
        registry.duplicate_names(),
        vec!["blink".to_string(), "esp32".to_string()]
    );
}

#[test]
fn registry_deserializes_file_shape() {
    let registry: Registry = serde_json::from_str(
        r#"{
  "debug": true,
  "modules": [{"name": "blink", "isHost": true, "folderPath": "./blink"}],
  "targets": [{"name": "sim", "platform": "mac"}]
}"#,
    )
    .unwrap();

    assert!(registry.debug);
    assert!(registry.edit_command.is_empty());
    assert!(registry.modules[0].is_host);
    assert_eq!(registry.targets[0].platform, "mac");
}

#[test]
fn registry_lists_unknown_keys_by_path() {
    let registry: Registry = serde_json::from_str(
        r#"{
  "theme": "dark",
  "modules": [{"name": "blink"}],
  "targets": [{"name": "sim"}, {"name": "esp32", "wipeComand": "esptool.py erase_flash"}]
}"#,
    )
    .unwrap();

    assert_eq!(
        registry.unknown_keys(),
        vec!["theme".to_string(), "targets.1.wipeComand".to_string()]
    );
    assert_eq!(registry.targets[1].wipe_command, "");
}
