//! Command execution against an in-process intake service.

use crate::cli::{AnalyzeArgs, DraftArgs, ExtractArgs, NarrativeInput, RecommendArgs, RequirementsArgs};
use anyhow::{anyhow, bail, Context, Result};
use docket_domain::CauseOfAction;
use docket_extractor::{ExtractorConfig, FactExtractor};
use docket_intake::{parse_cause, requirements, IntakeService};
use docket_store::MemoryStore;
use std::fs;

fn read_narrative(input: &NarrativeInput) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return fs::read_to_string(path).with_context(|| format!("reading narrative from {}", path));
    }
    bail!("provide narrative text as an argument or via --file");
}

fn parse_causes(names: &[String]) -> Result<Option<Vec<CauseOfAction>>> {
    if names.is_empty() {
        return Ok(None);
    }
    let causes = names
        .iter()
        .map(|name| parse_cause(name).map_err(|e| anyhow!(e)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(causes))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Extract facts and entities and print them as JSON.
pub fn execute_extract(args: ExtractArgs) -> Result<()> {
    let text = read_narrative(&args.input)?;
    let extractor = FactExtractor::new(ExtractorConfig::default());
    let fact_set = extractor.extract_with_source(&text, &args.source_type);
    print_json(&fact_set)
}

/// Analyze a narrative against cause checklists and print the report.
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let text = read_narrative(&args.input)?;
    let causes = parse_causes(&args.causes)?;

    let mut service = IntakeService::new(MemoryStore::new());
    let intake = service.create_intake(Some(&text))?;
    let report = service.analyze(intake.intake_id, causes.as_deref(), !args.no_recommend)?;
    print_json(&report)
}

/// Rank candidate causes by readiness and print the ranking.
pub fn execute_recommend(args: RecommendArgs) -> Result<()> {
    let text = read_narrative(&args.input)?;
    let causes = parse_causes(&args.causes)?;

    let mut service = IntakeService::new(MemoryStore::new());
    let intake = service.create_intake(Some(&text))?;
    let report = service.analyze(intake.intake_id, causes.as_deref(), true)?;
    print_json(&report.recommendations)
}

/// Generate a pleading draft and print it.
pub fn execute_draft(args: DraftArgs) -> Result<()> {
    let text = read_narrative(&args.input)?;
    let cause = parse_cause(&args.cause)?;

    let variables = parse_variables(&args.variables)?;
    let mut service = IntakeService::new(MemoryStore::new());
    let intake = service.create_intake(Some(&text))?;
    let result = service.generate_draft(intake.intake_id, cause, &variables)?;

    if args.text_only {
        println!("{}", result.draft_text);
        return Ok(());
    }
    print_json(&result)
}

fn parse_variables(pairs: &[String]) -> Result<docket_intake::DraftVariables> {
    let mut variables = docket_intake::DraftVariables::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid variable '{}', expected key=value", pair))?;
        variables.insert(key.to_string(), value.to_string());
    }
    Ok(variables)
}

/// Print the requirement checklist for a cause, or the full cause list.
pub fn execute_requirements(args: RequirementsArgs) -> Result<()> {
    let report = requirements(&args.cause)?;
    print_json(&report)
}
