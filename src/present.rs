//! Turning a parsed [`Descriptor`] into an output line.
//!
//! All four modes share the same gating: an entry is only printed when it has a non-empty
//! `Name` and `Exec` and is not marked `NoDisplay=true`.

use crate::{args::Mode, desktop::Descriptor};

/// Field codes removed from `Exec` values, in removal order. Other `%` codes are left untouched.
const PLACEHOLDERS: [&str; 4] = ["%F", "%f", "%U", "%u"];

/// Remove the `%f`, `%F`, `%u` and `%U` field codes and trim the result.
///
/// Only the ends are trimmed; the gap left inside the command stays as is:
/// `vlc %F --foo` becomes `vlc  --foo`.
pub fn strip_placeholders(exec: &str) -> String {
    let stripped = PLACEHOLDERS
        .iter()
        .fold(exec.to_string(), |acc, code| acc.replace(code, ""));
    stripped.trim().to_string()
}

/// Choose what to show for an application.
///
/// `name` is the lowercased `Name`, `exec` the stripped command. The name wins when it is
/// strictly shorter. Otherwise a command without `/` or `=` is short and clean enough to be
/// its own alias. Any `=` in the result is escaped as `\=` so it cannot be read as the
/// `name=command` separator.
pub fn select_display_name(name: &str, exec: &str) -> String {
    let chosen = if name.chars().count() < exec.chars().count() {
        name
    } else if !exec.contains('/') && !exec.contains('=') {
        exec
    } else {
        name
    };

    chosen.trim().replace('=', "\\=")
}

/// Render `desc` for `mode`, or `None` if nothing should be printed.
pub fn render(desc: &Descriptor, mode: Mode) -> Option<String> {
    if desc.is_empty() {
        return None;
    }

    let name = desc.get("Name").filter(|s| !s.is_empty())?;
    let exec = desc.get("Exec").filter(|s| !s.is_empty())?;
    if desc.get("NoDisplay") == Some("true") {
        return None;
    }

    let name = name.to_lowercase();
    let exec = strip_placeholders(exec);

    match mode {
        Mode::ShowNames => Some(select_display_name(&name, &exec)),
        Mode::ShowCommands => Some(exec),
        Mode::ShowAll => Some(format!("{}={exec}", select_display_name(&name, &exec))),
        Mode::ShowAliases => {
            let display = select_display_name(&name, &exec);
            (display != exec).then(|| format!("{display}={exec}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [Mode; 4] = [
        Mode::ShowNames,
        Mode::ShowCommands,
        Mode::ShowAll,
        Mode::ShowAliases,
    ];

    fn descriptor(pairs: &[(&str, &str)]) -> Descriptor {
        let mut desc = Descriptor::default();
        for (k, v) in pairs {
            desc.insert(*k, *v);
        }
        desc
    }

    #[test]
    fn strips_field_codes() {
        assert_eq!(strip_placeholders("firefox %u"), "firefox");
        assert_eq!(strip_placeholders("vlc %F --foo"), "vlc  --foo");
        assert_eq!(strip_placeholders("  app %f %U  "), "app");
        assert_eq!(strip_placeholders("app %F%F%u"), "app");
    }

    #[test]
    fn keeps_other_field_codes() {
        assert_eq!(strip_placeholders("app %i %c %k"), "app %i %c %k");
        assert_eq!(strip_placeholders("app %%u"), "app %");
    }

    #[test]
    fn removal_is_a_single_pass_per_code() {
        // removing a lowercase code can expose an uppercase one, which is not removed again
        assert_eq!(strip_placeholders("x %%uU"), "x %U");
        assert_eq!(strip_placeholders("x %%fF"), "x %F");
    }

    #[test]
    fn shorter_name_wins() {
        assert_eq!(select_display_name("gimp", "gimp-2.10 --new"), "gimp");
    }

    #[test]
    fn clean_command_doubles_as_name() {
        assert_eq!(select_display_name("gimp image editor", "gimp"), "gimp");
        // equal length still prefers the command
        assert_eq!(select_display_name("abcd", "wxyz"), "wxyz");
    }

    #[test]
    fn path_or_assignment_falls_back_to_name() {
        assert_eq!(select_display_name("code editor", "/bin/code"), "code editor");
        assert_eq!(select_display_name("some long app", "env A=1 x"), "some long app");
    }

    #[test]
    fn length_counts_characters() {
        // 5 chars but 10 bytes; the 6-char command is longer, so the name wins
        assert_eq!(select_display_name("ääääa", "abcdef"), "ääääa");
    }

    #[test]
    fn equals_in_name_is_escaped() {
        assert_eq!(select_display_name("a=b", "/usr/bin/ab"), "a\\=b");
    }

    #[test]
    fn gimp_example() {
        let desc = descriptor(&[("Name", "GIMP Image Editor"), ("Exec", "gimp %U")]);
        assert_eq!(render(&desc, Mode::ShowNames).as_deref(), Some("gimp"));
        assert_eq!(render(&desc, Mode::ShowCommands).as_deref(), Some("gimp"));
        assert_eq!(render(&desc, Mode::ShowAll).as_deref(), Some("gimp=gimp"));
        assert_eq!(render(&desc, Mode::ShowAliases), None);
    }

    #[test]
    fn vscode_example() {
        let desc = descriptor(&[
            ("Name", "Visual Studio Code"),
            ("Exec", "/usr/bin/code --foo %F"),
        ]);
        assert_eq!(
            render(&desc, Mode::ShowNames).as_deref(),
            Some("visual studio code")
        );
        assert_eq!(
            render(&desc, Mode::ShowCommands).as_deref(),
            Some("/usr/bin/code --foo")
        );
        assert_eq!(
            render(&desc, Mode::ShowAll).as_deref(),
            Some("visual studio code=/usr/bin/code --foo")
        );
        assert_eq!(
            render(&desc, Mode::ShowAliases).as_deref(),
            Some("visual studio code=/usr/bin/code --foo")
        );
    }

    #[test]
    fn no_display_is_never_shown() {
        let desc = descriptor(&[("Name", "Foo"), ("Exec", "foo"), ("NoDisplay", "true")]);
        for mode in ALL_MODES {
            assert_eq!(render(&desc, mode), None, "{mode:?}");
        }
    }

    #[test]
    fn no_display_must_be_literal_true() {
        let desc = descriptor(&[("Name", "Foo"), ("Exec", "foo"), ("NoDisplay", "True")]);
        assert_eq!(render(&desc, Mode::ShowNames).as_deref(), Some("foo"));
    }

    #[test]
    fn missing_name_or_exec_is_never_shown() {
        let no_exec = descriptor(&[("Name", "Foo")]);
        let no_name = descriptor(&[("Exec", "foo")]);
        for mode in ALL_MODES {
            assert_eq!(render(&no_exec, mode), None, "{mode:?}");
            assert_eq!(render(&no_name, mode), None, "{mode:?}");
            assert_eq!(render(&Descriptor::default(), mode), None, "{mode:?}");
        }
    }

    #[test]
    fn exec_of_only_placeholders_still_renders() {
        // gating looks at the raw value; the empty stripped command then wins the name heuristic
        let desc = descriptor(&[("Name", "Foo"), ("Exec", "%U")]);
        assert_eq!(render(&desc, Mode::ShowCommands).as_deref(), Some(""));
        assert_eq!(render(&desc, Mode::ShowAll).as_deref(), Some("="));
        assert_eq!(render(&desc, Mode::ShowAliases), None);
    }

    #[test]
    fn alias_compares_escaped_name() {
        let desc = descriptor(&[("Name", "Calc=Pro Edition"), ("Exec", "/opt/calc/bin/run")]);
        assert_eq!(
            render(&desc, Mode::ShowAliases).as_deref(),
            Some("calc\\=pro edition=/opt/calc/bin/run")
        );
    }
}
