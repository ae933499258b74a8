use ht::cli::{print_usage_reminder, run};
use ht::error::HtError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        match e.downcast_ref::<HtError>() {
            Some(err) if err.is_user_error() => {
                eprintln!("Error: {}", err);
                print_usage_reminder();
                std::process::exit(1);
            }
            _ => {
                eprintln!("Unexpected error: {}", e);
                // Show error chain if available
                let mut causes = e.chain().skip(1).peekable();
                if causes.peek().is_some() {
                    eprintln!("\nCaused by:");
                    for (indent, cause) in causes.enumerate() {
                        eprintln!("{:indent$}  {}", "", cause, indent = indent + 1);
                    }
                }
                std::process::exit(2);
            }
        }
    }
}
