//! Command-line argument handling.
//!
//! Commands are a closed set of variants; the argument count for each one is
//! checked at parse time, so dispatch in `main` is a plain `match`.

/// Fixed usage text printed on any usage violation.
pub const USAGE: &str = "\
Usage:
    wallabag-cli add <url>
";

/// A parsed invocation of the tool.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Save a URL as a new entry.
    Add { url: String },
}

/// Parse the arguments following the program name.
///
/// Returns `None` on any usage violation: no command, an unknown command, or
/// a wrong number of arguments for the command.
pub fn parse(args: &[String]) -> Option<Command> {
    let (command, rest) = args.split_first()?;

    match command.as_str() {
        "add" => match rest {
            [url] => Some(Command::Add { url: url.clone() }),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, Command};

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| String::from(*arg)).collect()
    }

    #[test]
    fn parse_add() {
        let args = to_args(&["add", "https://example.com/article"]);

        assert_eq!(
            parse(&args),
            Some(Command::Add {
                url: String::from("https://example.com/article"),
            })
        );
    }

    #[test]
    fn parse_no_arguments() {
        assert_eq!(parse(&[]), None);
    }

    #[test]
    fn parse_unknown_command() {
        let args = to_args(&["delete", "https://example.com/article"]);

        assert_eq!(parse(&args), None);
    }

    #[test]
    fn parse_add_without_url() {
        let args = to_args(&["add"]);

        assert_eq!(parse(&args), None);
    }

    #[test]
    fn parse_add_with_extra_arguments() {
        let args = to_args(&["add", "https://example.com/a", "https://example.com/b"]);

        assert_eq!(parse(&args), None);
    }
}
