//! Property tests for command synthesis.

use proptest::prelude::*;

use mddbl::domain::services::EntityResolver;
use mddbl::{synthesize, Module, Registry, RootCommand, Target};

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_]{1,12}").unwrap()
}

fn module() -> impl Strategy<Value = Module> {
    (token(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(name, is_host, debug_flag, make_flag)| Module {
            name,
            is_host,
            debug_flag,
            make_flag,
            folder_path: ".".to_string(),
            ..Module::default()
        },
    )
}

fn target() -> impl Strategy<Value = Target> {
    (
        token(),
        token(),
        any::<bool>(),
        proptest::option::of(token()),
        any::<bool>(),
        prop_oneof![Just(-1), Just(0), Just(90), Just(180), Just(270)],
    )
        .prop_map(
            |(name, platform, format_flag, format_str, rotation_flag, rotation_value)| Target {
                name,
                platform,
                format_flag,
                format_str: format_str.unwrap_or_default(),
                rotation_flag,
                rotation_value,
                ..Target::default()
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// The command starts with the root and every token is followed by one space.
    #[test]
    fn property_command_shape(module in module(), target in proptest::option::of(target())) {
        let root = RootCommand::for_module(&module);
        let cmd = synthesize(root.as_str(), &module, target.as_ref());

        let expected_root = if module.is_host { "mcconfig " } else { "mcrun " };
        prop_assert!(cmd.starts_with(expected_root));
        prop_assert!(cmd.ends_with(' '));
        prop_assert!(!cmd.contains("  "));
    }

    /// Flags appear in fixed order: -d, -m, -p, -f, -r.
    #[test]
    fn property_flag_order(module in module(), target in target()) {
        let cmd = synthesize("mcrun", &module, Some(&target));
        let tokens: Vec<&str> = cmd.split_whitespace().collect();

        let flags: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|t| t.len() == 2 && t.starts_with('-'))
            .collect();
        let order = ["-d", "-m", "-p", "-f", "-r"];
        let positions: Vec<usize> = flags
            .iter()
            .map(|f| order.iter().position(|o| o == f).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let p = tokens.iter().position(|t| *t == "-p").unwrap();
        prop_assert_eq!(tokens[p + 1], target.platform.as_str());
    }

    /// Without a target no target flag is emitted.
    #[test]
    fn property_no_target_flags(module in module()) {
        let cmd = synthesize("mcrun", &module, None);
        prop_assert!(!cmd.contains("-p"));
        prop_assert!(!cmd.contains("-f"));
        prop_assert!(!cmd.contains("-r"));
    }

    /// Resolution returns the first entry with a matching name.
    #[test]
    fn property_first_match_wins(
        modules in proptest::collection::vec(module(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let registry = Registry { modules: modules.clone(), ..Registry::default() };
        let wanted = &modules[pick.index(modules.len())].name;

        let resolver = EntityResolver::new(&registry, "mddbl.json");
        let found = resolver.find_module(wanted).unwrap();

        let first = modules.iter().find(|m| &m.name == wanted).unwrap();
        prop_assert_eq!(found, first);
    }
}
