//! Command synthesis
//!
//! Builds the SDK command line from a module and an optional target. The SDK
//! tools parse flags positionally and value-taking flags (`-p`, `-f`, `-r`)
//! expect their value as the next token, so the order below is fixed.

use crate::domain::entities::{Module, Target};

/// Assemble `root` plus the module's and target's flags.
///
/// Every token is followed by a single space, so the result always ends with
/// one trailing space (`"mcrun -d -p esp32 "`).
pub fn synthesize(root: &str, module: &Module, target: Option<&Target>) -> String {
    let mut cmd = String::with_capacity(64);
    push(&mut cmd, root);

    if module.debug_flag {
        push(&mut cmd, "-d");
    }
    if module.make_flag {
        push(&mut cmd, "-m");
    }

    if let Some(target) = target {
        push(&mut cmd, "-p");
        push(&mut cmd, &target.platform);

        if target.format_flag {
            push(&mut cmd, "-f");
            if !target.format_str.is_empty() {
                push(&mut cmd, &target.format_str);
            }
        }

        if target.rotation_flag {
            push(&mut cmd, "-r");
            if target.rotation_value >= 0 {
                push(&mut cmd, &target.rotation_value.to_string());
            }
        }
    }

    cmd
}

fn push(cmd: &mut String, token: &str) {
    cmd.push_str(token);
    cmd.push(' ');
}
