//! Docket Drafter
//!
//! Assembles a pleading draft from a gap analysis and a variable map.
//! Purely deterministic string substitution: the catalog supplies example
//! pleading language per element, the caller supplies variables, and every
//! non-satisfied element lands on a TODO list at the end of the draft. No
//! analytical logic lives here.
//!
//! # Placeholder policy
//!
//! Placeholders are `[KEY]` tokens: the variable key uppercased and wrapped
//! in brackets (`damages_amount` fills `[DAMAGES_AMOUNT]`). Placeholders
//! with no matching variable stay in the text verbatim so a reviewing
//! attorney can see exactly what is unresolved.

#![warn(missing_docs)]

use docket_analyzer::requirements_for;
use docket_domain::{CauseOfAction, GapAnalysis, SupportLevel};
use std::collections::BTreeMap;

/// Flat variable map for placeholder substitution
pub type DraftVariables = BTreeMap<String, String>;

/// Substitute `[KEY]` placeholders in one text fragment
fn fill_placeholders(text: &str, variables: &DraftVariables) -> String {
    let mut filled = text.to_string();
    for (key, value) in variables {
        let token = format!("[{}]", key.to_uppercase());
        filled = filled.replace(&token, value);
    }
    filled
}

fn lookup<'a>(variables: &'a DraftVariables, key: &str, fallback: &'a str) -> &'a str {
    variables.get(key).map(String::as_str).unwrap_or(fallback)
}

/// Generate a complaint draft for one cause of action
///
/// The skeleton is a NY Supreme Court verified complaint: caption, parties,
/// jurisdiction and venue, one numbered factual allegation per catalog
/// requirement (its example language with placeholders filled), the cause
/// of action, and a prayer for relief. The analysis contributes only the
/// trailing TODO list; the draft body is a function of catalog + variables.
pub fn generate_draft(
    cause: CauseOfAction,
    variables: &DraftVariables,
    analysis: &GapAnalysis,
) -> String {
    let requirements = requirements_for(cause);

    let county = lookup(variables, "county", "[COUNTY]");
    let plaintiff = lookup(variables, "plaintiff_name", "[PLAINTIFF NAME]");
    let defendant = lookup(variables, "defendant_name", "[DEFENDANT NAME]");
    let plaintiff_type = lookup(variables, "plaintiff_type", "[individual/corporation]");
    let defendant_type = lookup(variables, "defendant_type", "[individual/corporation]");
    let damages_amount = lookup(variables, "damages_amount", "$[AMOUNT]");
    let filing_date = lookup(variables, "filing_date", "[DATE]");

    let mut draft = format!(
        "SUPREME COURT OF THE STATE OF NEW YORK\n\
         COUNTY OF {county}\n\
         \n\
         {plaintiff},\n\
         \x20                   Plaintiff,\n\
         \x20       -against-\n\
         {defendant},\n\
         \x20                   Defendant.\n\
         \n\
         VERIFIED COMPLAINT\n\
         \n\
         PARTIES\n\
         \n\
         1. Plaintiff {plaintiff} is {plaintiff_type}.\n\
         \n\
         2. Defendant {defendant} is {defendant_type}.\n\
         \n\
         JURISDICTION AND VENUE\n\
         \n\
         3. This Court has jurisdiction pursuant to CPLR \u{00a7} 301.\n\
         \n\
         4. Venue is proper in {county} County.\n\
         \n\
         FACTUAL ALLEGATIONS\n\
         \n"
    );

    // One numbered allegation per catalog requirement
    let mut paragraph = 5;
    for requirement in requirements {
        let text = match &requirement.example_language {
            Some(example) => fill_placeholders(example, variables),
            None => format!("[Allege {}]", requirement.element_name),
        };
        draft.push_str(&format!("{}. {}\n\n", paragraph, text));
        paragraph += 1;
    }

    draft.push_str(&format!(
        "FIRST CAUSE OF ACTION - {title}\n\
         \n\
         {p}. Plaintiff repeats and realleges paragraphs 1 through {prev}.\n\
         \n\
         {p1}. By reason of the foregoing, Plaintiff has been damaged.\n\
         \n\
         PRAYER FOR RELIEF\n\
         \n\
         WHEREFORE, Plaintiff demands judgment as follows:\n\
         \n\
         (a) Compensatory damages in an amount not less than {damages_amount};\n\
         (b) Pre-judgment interest;\n\
         (c) Costs of this action; and\n\
         (d) Such other relief as the Court deems just.\n\
         \n\
         Dated: {filing_date}\n\
         \x20       {county}, New York\n\
         \n\
         \x20                                   ____________________________\n\
         \x20                                   Attorney for Plaintiff\n",
        title = cause.title(),
        p = paragraph,
        prev = paragraph - 1,
        p1 = paragraph + 1,
        damages_amount = damages_amount,
        filing_date = filing_date,
        county = county,
    ));

    // Flag everything a reviewing attorney still needs to fix
    let todos: Vec<String> = analysis
        .elements
        .iter()
        .filter(|e| e.status != SupportLevel::Satisfied)
        .map(|e| {
            format!(
                "\u{2022} {}: {} - {}",
                e.status.as_str().to_uppercase(),
                e.element_name.replace('_', " "),
                e.gap_description.as_deref().unwrap_or("needs attention"),
            )
        })
        .collect();

    if !todos.is_empty() {
        draft.push_str(&format!(
            "\n============================================================\n\
             TODO - ITEMS NEEDING ATTENTION:\n\
             ============================================================\n\
             {}\n",
            todos.join("\n")
        ));
    }

    draft
}

/// Actionable TODO items for the caller, derived from a gap analysis
///
/// Missing elements ask for new facts; partial elements ask for review.
pub fn todo_items(analysis: &GapAnalysis) -> Vec<String> {
    analysis
        .elements
        .iter()
        .filter(|e| e.status != SupportLevel::Satisfied)
        .map(|e| {
            let name = e.element_name.replace('_', " ");
            match e.status {
                SupportLevel::Missing => format!("MISSING: Add facts for {}", name),
                _ => format!(
                    "REVIEW: {} - {}",
                    name,
                    e.gap_description.as_deref().unwrap_or("needs more detail")
                ),
            }
        })
        .collect()
}
