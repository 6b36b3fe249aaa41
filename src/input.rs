// src/input.rs
// =============================================================================
// Where the target URL and output filename come from.
//
// Values passed on the command line win. Anything missing is asked for
// interactively, so running `link-harvest` with no arguments behaves like a
// small wizard:
//
//   URL to scrape: https://example.com
//   File to save results to (e.g. data.xml): data.xml
//
// Both values are passed through untouched. No URL or filename validation
// happens here; a bad URL surfaces later as a fetch error.
// =============================================================================

use dialoguer::Input;

pub trait InputSource {
    fn target_url(&mut self) -> dialoguer::Result<String>;
    fn output_path(&mut self) -> dialoguer::Result<String>;
}

/// Uses preset values where present and prompts on the terminal otherwise.
#[derive(Debug, Clone, Default)]
pub struct PromptInput {
    url: Option<String>,
    output: Option<String>,
}

impl PromptInput {
    pub fn new(url: Option<String>, output: Option<String>) -> Self {
        Self { url, output }
    }
}

impl InputSource for PromptInput {
    fn target_url(&mut self) -> dialoguer::Result<String> {
        match self.url.take() {
            Some(url) => Ok(url),
            None => ask("URL to scrape"),
        }
    }

    fn output_path(&mut self) -> dialoguer::Result<String> {
        match self.output.take() {
            Some(output) => Ok(output),
            None => ask("File to save results to (e.g. data.xml)"),
        }
    }
}

fn ask(prompt: &str) -> dialoguer::Result<String> {
    let answer = Input::<String>::new().with_prompt(prompt).interact_text()?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values_skip_the_prompt() {
        let mut input = PromptInput::new(
            Some("https://example.com".to_string()),
            Some("out.xml".to_string()),
        );
        assert_eq!(input.target_url().unwrap(), "https://example.com");
        assert_eq!(input.output_path().unwrap(), "out.xml");
    }

    #[test]
    fn test_values_are_not_validated() {
        let mut input = PromptInput::new(Some("not a url".to_string()), Some("../x".to_string()));
        assert_eq!(input.target_url().unwrap(), "not a url");
        assert_eq!(input.output_path().unwrap(), "../x");
    }
}
