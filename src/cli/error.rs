// Error reporting helpers for consistent messages and exit codes

use std::process;

/// Usage reminder printed after every user-input error
pub const USAGE_REMINDER: &str = "\
Use the following format for tracking hours:
  ht track <duration> <time_code>
  Examples: 'ht track 2h PROJECT_X', 'ht track 45m PTO'
Use the following format for generating a report:
  ht report -d <date> -t <type>
  Example: 'ht report -d 2023-06-01 -t daily'
           'ht report -d 2023-06-01 -t weekly'
           'ht report -d 2023-06-01 -t monthly'
           'ht report -d 2023-06-01 -t yearly'
Use the following format for generating a PTO report:
  ht pto
Use the following format for adding a time code:
  ht add_code <new_code>";

pub fn print_usage_reminder() {
    eprintln!("{}", USAGE_REMINDER);
}

/// Exit with a user error (exit code 1)
/// User errors are for invalid input: bad durations, unknown codes, and so on.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    print_usage_reminder();
    process::exit(1);
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate a new time code label
///
/// Codes are stored verbatim, so surrounding whitespace would make them
/// impossible to type back in.
pub fn validate_time_code(code: &str) -> Result<(), String> {
    validate_non_empty(code, "Time code")?;
    if code.trim() != code {
        return Err(format!(
            "Invalid time code: '{}'. Time codes cannot start or end with whitespace.",
            code
        ));
    }
    Ok(())
}
