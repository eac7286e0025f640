use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Asks for a website on `output` and reads one line from `input`.
/// Blank input or end of input selects `default`.
pub fn read_website<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    default: &str,
) -> std::io::Result<String> {
    write!(
        output,
        "Enter website URL to scrape (press Enter for default '{}'): ",
        default
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Uses `url` when given, otherwise prompts for one.
pub fn resolve_website<R: BufRead, W: Write>(
    url: Option<&str>,
    input: R,
    output: W,
    default: &str,
) -> Result<String> {
    match url {
        Some(url) => Ok(url.trim().to_string()),
        None => Ok(read_website(input, output, default)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorSeverity, ScoutError};

    struct BrokenInput;

    impl std::io::Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn test_blank_line_uses_default() {
        let mut prompt = Vec::new();
        let website = read_website(&b"   \n"[..], &mut prompt, "firecrawl.dev").unwrap();

        assert_eq!(website, "firecrawl.dev");
        assert_eq!(
            String::from_utf8(prompt).unwrap(),
            "Enter website URL to scrape (press Enter for default 'firecrawl.dev'): "
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        let website = read_website(&b"  cafe.example \n"[..], Vec::new(), "firecrawl.dev").unwrap();
        assert_eq!(website, "cafe.example");
    }

    #[test]
    fn test_end_of_input_uses_default() {
        let website = read_website(&b""[..], Vec::new(), "firecrawl.dev").unwrap();
        assert_eq!(website, "firecrawl.dev");
    }

    #[test]
    fn test_url_flag_skips_prompt() {
        let mut prompt = Vec::new();
        let input = std::io::BufReader::new(BrokenInput);
        let website = resolve_website(Some(" cafe.example "), input, &mut prompt, "firecrawl.dev").unwrap();

        assert_eq!(website, "cafe.example");
        assert!(prompt.is_empty());
    }

    #[test]
    fn test_unreadable_stdin_is_scout_error() {
        let input = std::io::BufReader::new(BrokenInput);
        let err = resolve_website(None, input, Vec::new(), "firecrawl.dev").unwrap_err();

        assert!(matches!(err, ScoutError::IoError(_)));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
