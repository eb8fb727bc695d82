//! Property tests for registry persistence.

use proptest::prelude::*;

use mddbl::domain::ports::RegistryRepository;
use mddbl::infrastructure::JsonRegistryRepository;
use mddbl::{Module, Registry, Target};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,10}").unwrap()
}

fn registry() -> impl Strategy<Value = Registry> {
    (
        any::<bool>(),
        proptest::collection::vec(name(), 0..6),
        proptest::collection::vec((name(), -1i32..400), 0..6),
    )
        .prop_map(|(debug, modules, targets)| Registry {
            debug,
            edit_command: String::new(),
            modules: modules.into_iter().map(Module::named).collect(),
            targets: targets
                .into_iter()
                .map(|(name, rotation_value)| Target {
                    rotation_value,
                    ..Target::named(name)
                })
                .collect(),
            ..Registry::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// Loading never panics on arbitrary file content.
    #[test]
    fn property_load_never_panics(content in "(?s).{0,256}") {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mddbl.json");
        std::fs::write(&path, content).unwrap();

        let _ = JsonRegistryRepository::with_path(path).load();
    }

    /// Saving sorts by name and a second save leaves the file unchanged.
    #[test]
    fn property_save_is_idempotent(mut registry in registry()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mddbl.json");
        let repo = JsonRegistryRepository::with_path(path.clone());

        repo.save(&mut registry).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        let mut loaded = repo.load().unwrap();
        prop_assert!(loaded.warnings.iter().all(|w| !matches!(
            w.kind,
            mddbl::domain::value_objects::ConfigWarningKind::UnknownKey
        )));
        prop_assert_eq!(&loaded.registry, &registry);

        repo.save(&mut loaded.registry).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        prop_assert_eq!(first, second);

        let names: Vec<&str> = registry.modules.iter().map(|m| m.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        prop_assert_eq!(names, sorted);
    }
}
