//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};

/// Docket CLI - Legal intake gap analysis from the command line.
#[derive(Debug, Parser)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract facts and entities from narrative text
    Extract(ExtractArgs),

    /// Analyze narrative text against cause-of-action checklists
    Analyze(AnalyzeArgs),

    /// Rank candidate causes of action by readiness
    Recommend(RecommendArgs),

    /// Generate a pleading draft from narrative text
    Draft(DraftArgs),

    /// Show the pleading element checklist for a cause (or "all")
    Requirements(RequirementsArgs),
}

/// Narrative input, inline or from a file.
#[derive(Debug, Args)]
pub struct NarrativeInput {
    /// Narrative text to process
    pub text: Option<String>,

    /// Read the narrative from a file instead
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<String>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: NarrativeInput,

    /// Provenance tag for the extracted facts
    #[arg(short, long, default_value = "document")]
    pub source_type: String,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: NarrativeInput,

    /// Causes to analyze (comma-separated snake_case names)
    #[arg(short, long, value_delimiter = ',')]
    pub causes: Vec<String>,

    /// Skip the readiness-ranked recommendations
    #[arg(long)]
    pub no_recommend: bool,
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub input: NarrativeInput,

    /// Causes to rank (comma-separated snake_case names)
    #[arg(short, long, value_delimiter = ',')]
    pub causes: Vec<String>,
}

/// Arguments for the draft command.
#[derive(Debug, Parser)]
pub struct DraftArgs {
    #[command(flatten)]
    pub input: NarrativeInput,

    /// Cause of action to plead
    #[arg(short, long, default_value = "breach_of_contract")]
    pub cause: String,

    /// Substitution variable, key=value (repeatable)
    #[arg(short = 'V', long = "var")]
    pub variables: Vec<String>,

    /// Print only the draft text instead of the full JSON result
    #[arg(long)]
    pub text_only: bool,
}

/// Arguments for the requirements command.
#[derive(Debug, Parser)]
pub struct RequirementsArgs {
    /// Cause of action in snake_case, or "all" to list every cause
    pub cause: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command_parses() {
        let cli = Cli::parse_from(["docket", "extract", "They breached the contract."]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.input.text.as_deref(), Some("They breached the contract."));
                assert_eq!(args.source_type, "document");
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_analyze_causes_are_comma_separated() {
        let cli = Cli::parse_from([
            "docket",
            "analyze",
            "--causes",
            "fraud,negligence",
            "--file",
            "narrative.txt",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.causes, vec!["fraud", "negligence"]);
                assert_eq!(args.input.file.as_deref(), Some("narrative.txt"));
                assert!(!args.no_recommend);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_draft_variables_repeat() {
        let cli = Cli::parse_from([
            "docket",
            "draft",
            "some narrative",
            "--cause",
            "fraud",
            "--var",
            "county=Kings",
            "--var",
            "plaintiff_name=Jane Roe",
        ]);
        match cli.command {
            Command::Draft(args) => {
                assert_eq!(args.cause, "fraud");
                assert_eq!(args.variables.len(), 2);
            }
            _ => panic!("Expected Draft command"),
        }
    }
}
