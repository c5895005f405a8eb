//! Text payload resolution: input file, positional args, or stdin, in that
//! order of precedence.

use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::error::{Result, VoxError};

/// Resolve the text to synthesize.
///
/// 1. `--input-file PATH` reads the whole file (`-` reads stdin).
/// 2. Positional arguments are joined with single spaces.
/// 3. Otherwise stdin is drained, unless it is an interactive terminal.
///
/// File and stdin sources are trimmed; an empty trimmed result is an error.
pub fn resolve_text(args: &[String], input_file: Option<&Path>) -> Result<String> {
    if let Some(path) = input_file {
        if path.as_os_str() == "-" {
            return read_stdin();
        }
        let data = std::fs::read_to_string(path)?;
        return non_empty(&data);
    }

    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    read_stdin()
}

fn non_empty(data: &str) -> Result<String> {
    let text = data.trim();
    if text.is_empty() {
        return Err(VoxError::EmptyInput);
    }
    Ok(text.to_string())
}

fn read_stdin() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        // Nothing piped in; failing beats blocking on a silent prompt.
        return Err(VoxError::NoInputProvided);
    }
    let mut data = String::new();
    stdin.lock().read_to_string(&mut data)?;
    non_empty(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn file_contents_are_trimmed() {
        let file = temp_file("  hello  \n");
        let text = resolve_text(&[], Some(file.path())).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = temp_file("");
        let err = resolve_text(&[], Some(file.path())).unwrap_err();
        assert!(matches!(err, VoxError::EmptyInput));
    }

    #[test]
    fn whitespace_only_file_is_rejected() {
        let file = temp_file(" \n\t ");
        let err = resolve_text(&[], Some(file.path())).unwrap_err();
        assert!(matches!(err, VoxError::EmptyInput));
    }

    #[test]
    fn file_takes_precedence_over_args() {
        let file = temp_file("from file");
        let args = vec!["from".to_string(), "args".to_string()];
        let text = resolve_text(&args, Some(file.path())).unwrap();
        assert_eq!(text, "from file");
    }

    #[test]
    fn positional_args_joined_with_single_spaces() {
        let args = vec!["Hello".to_string(), "world".to_string()];
        assert_eq!(resolve_text(&args, None).unwrap(), "Hello world");
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = resolve_text(&[], Some(Path::new("/no/such/file.txt"))).unwrap_err();
        assert!(matches!(err, VoxError::Io(_)));
    }
}
