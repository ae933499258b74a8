// Command abbreviation matching for the ht CLI

/// Find all commands that start with the given prefix (case-insensitive)
pub fn find_matching_commands<'a>(prefix: &str, commands: &'a [&str]) -> Vec<&'a str> {
    let prefix_lower = prefix.to_lowercase();
    commands
        .iter()
        .filter(|cmd| cmd.to_lowercase().starts_with(&prefix_lower))
        .copied()
        .collect()
}

/// Find a unique command match for the given prefix
/// Returns Ok(command) if exactly one match, Err(matches) if ambiguous, Err(empty) if no match
/// Exact matches take precedence over prefix matches
pub fn find_unique_command<'a>(prefix: &str, commands: &'a [&str]) -> Result<&'a str, Vec<&'a str>> {
    let prefix_lower = prefix.to_lowercase();
    if let Some(exact) = commands.iter().find(|cmd| cmd.to_lowercase() == prefix_lower) {
        return Ok(*exact);
    }

    let matches = find_matching_commands(prefix, commands);
    if matches.len() == 1 {
        Ok(matches[0])
    } else {
        Err(matches)
    }
}

/// Top-level commands
pub const TOP_LEVEL_COMMANDS: &[&str] = &["track", "report", "pto", "add_code", "codes"];

/// Expand an abbreviated command name in the argument list
///
/// Only the first positional argument is considered; flags before it (such
/// as `--file <PATH>`) are passed through untouched.
pub fn expand_command_abbreviations(args: Vec<String>) -> Result<Vec<String>, String> {
    expand_with(args, TOP_LEVEL_COMMANDS)
}

fn expand_with(mut args: Vec<String>, commands: &[&str]) -> Result<Vec<String>, String> {
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--file" {
            i += 2;
            continue;
        }
        if arg.starts_with('-') {
            i += 1;
            continue;
        }

        match find_unique_command(arg, commands) {
            Ok(full_cmd) => args[i] = full_cmd.to_string(),
            // No match - leave it for clap to report
            Err(matches) if matches.is_empty() => {}
            Err(matches) => {
                return Err(format!(
                    "Ambiguous command '{}'. Did you mean one of: {}?",
                    arg,
                    matches.join(", ")
                ));
            }
        }
        break;
    }

    Ok(args)
}
