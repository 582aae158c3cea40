use clap::Parser;

#[derive(Parser)]
#[command(name = "varname")]
#[command(about = "Turn a short phrase into identifiers in five naming conventions.")]
#[command(version)]
pub struct Cli {
    /// Output the five candidates as JSON (requires a phrase)
    #[arg(long)]
    pub json: bool,

    /// Print the chosen candidate instead of copying it
    #[arg(long)]
    pub no_copy: bool,

    /// Provider to use for this run (openai, deepseek, qwen, custom)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model identifier to use for this run
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show resolved provider, endpoint and model
    #[arg(long)]
    pub status: bool,

    /// Hold the clipboard for text read from stdin (internal)
    #[arg(long, hide = true)]
    pub serve_clipboard: bool,

    /// Phrase to translate; prompts for one when omitted
    pub phrase: Vec<String>,
}

impl Cli {
    pub fn phrase(&self) -> Option<String> {
        if self.phrase.is_empty() {
            None
        } else {
            Some(self.phrase.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_words_are_joined() {
        let cli = Cli::parse_from(["varname", "用户", "列表"]);
        assert_eq!(cli.phrase().as_deref(), Some("用户 列表"));
        assert!(!cli.json);
    }

    #[test]
    fn test_no_phrase_prompts() {
        let cli = Cli::parse_from(["varname", "--no-copy", "-p", "deepseek"]);
        assert!(cli.phrase().is_none());
        assert!(cli.no_copy);
        assert_eq!(cli.provider.as_deref(), Some("deepseek"));
    }

    #[test]
    fn test_serve_clipboard_flag_matches_helper() {
        let cli = Cli::parse_from(["varname", crate::interfaces::clipboard::SERVE_FLAG]);
        assert!(cli.serve_clipboard);
        assert!(cli.phrase().is_none());
    }
}
