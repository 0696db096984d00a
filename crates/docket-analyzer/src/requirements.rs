//! Static requirement catalog: New York pleading elements per cause of action
//!
//! This is versioned configuration data, not logic. The scoring engine only
//! reads it; adding a cause or element here needs no matcher or analyzer
//! changes.

use docket_domain::{AllegationRequirement, CauseOfAction, Specificity};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

fn req(
    element_name: &str,
    description: &str,
    specificity: Specificity,
    cplr_reference: Option<&str>,
    example_language: &str,
) -> AllegationRequirement {
    AllegationRequirement {
        element_name: element_name.to_string(),
        description: description.to_string(),
        // Every element in the current NY catalog is required to plead
        required: true,
        cplr_reference: cplr_reference.map(str::to_string),
        specificity_required: specificity,
        example_language: Some(example_language.to_string()),
    }
}

static CATALOG: Lazy<BTreeMap<CauseOfAction, Vec<AllegationRequirement>>> = Lazy::new(|| {
    use CauseOfAction::*;
    use Specificity::{General, Heightened};

    let mut catalog = BTreeMap::new();

    catalog.insert(
        BreachOfContract,
        vec![
            req(
                "existence_of_contract",
                "A valid and binding contract existed between the parties",
                General,
                None,
                "On or about [DATE], Plaintiff and Defendant entered into a written agreement whereby...",
            ),
            req(
                "plaintiff_performance",
                "Plaintiff performed its obligations under the contract",
                General,
                None,
                "Plaintiff fully performed all conditions precedent and all obligations required under the Agreement.",
            ),
            req(
                "defendant_breach",
                "Defendant failed to perform its obligations under the contract",
                General,
                None,
                "Defendant breached the Agreement by failing to [SPECIFIC BREACH].",
            ),
            req(
                "damages",
                "Plaintiff suffered damages as a result of the breach",
                General,
                None,
                "As a direct and proximate result of Defendant's breach, Plaintiff has suffered damages in an amount not less than $[AMOUNT].",
            ),
        ],
    );

    catalog.insert(
        Negligence,
        vec![
            req(
                "duty",
                "Defendant owed a duty of care to the plaintiff",
                General,
                None,
                "Defendant owed Plaintiff a duty to exercise reasonable care.",
            ),
            req(
                "breach",
                "Defendant breached that duty of care",
                General,
                None,
                "Defendant breached its duty of care by [SPECIFIC ACTS/OMISSIONS].",
            ),
            req(
                "causation",
                "The breach was the proximate cause of plaintiff's injuries",
                General,
                None,
                "As a direct and proximate result of Defendant's negligence, Plaintiff suffered [INJURIES].",
            ),
            req(
                "damages",
                "Plaintiff suffered actual damages",
                General,
                None,
                "Plaintiff has sustained damages including [SPECIFIC DAMAGES].",
            ),
        ],
    );

    catalog.insert(
        Fraud,
        vec![
            req(
                "material_misrepresentation",
                "Defendant made a material misrepresentation of fact",
                Heightened,
                Some("CPLR 3016(b)"),
                "On [DATE], Defendant represented that [SPECIFIC FALSE STATEMENT].",
            ),
            req(
                "falsity",
                "The representation was false when made",
                Heightened,
                Some("CPLR 3016(b)"),
                "The representation was false. In fact, [TRUE STATE OF AFFAIRS].",
            ),
            req(
                "scienter",
                "Defendant knew the representation was false or made it recklessly",
                Heightened,
                Some("CPLR 3016(b)"),
                "Defendant knew this representation was false at the time it was made.",
            ),
            req(
                "intent_to_induce",
                "Defendant made the representation to induce plaintiff's reliance",
                General,
                None,
                "Defendant made this misrepresentation to induce Plaintiff to [ACTION].",
            ),
            req(
                "justifiable_reliance",
                "Plaintiff justifiably relied on the misrepresentation",
                General,
                None,
                "Plaintiff justifiably relied on Defendant's misrepresentation.",
            ),
            req(
                "damages",
                "Plaintiff suffered damages as a result of the reliance",
                General,
                None,
                "As a result of Defendant's fraud, Plaintiff suffered damages of $[AMOUNT].",
            ),
        ],
    );

    catalog.insert(
        Conversion,
        vec![
            req(
                "ownership_or_right",
                "Plaintiff had ownership or a superior right to possession",
                General,
                None,
                "Plaintiff was the lawful owner of [PROPERTY].",
            ),
            req(
                "unauthorized_dominion",
                "Defendant exercised unauthorized dominion over the property",
                General,
                None,
                "Without authorization, Defendant took possession of Plaintiff's property.",
            ),
            req(
                "damages",
                "Plaintiff suffered damages as a result",
                General,
                None,
                "Plaintiff has been damaged in the amount of $[AMOUNT].",
            ),
        ],
    );

    catalog.insert(
        UnjustEnrichment,
        vec![
            req(
                "enrichment",
                "Defendant was enriched",
                General,
                None,
                "Defendant received a benefit in the form of [BENEFIT].",
            ),
            req(
                "at_plaintiff_expense",
                "The enrichment was at plaintiff's expense",
                General,
                None,
                "Defendant's enrichment came at Plaintiff's expense.",
            ),
            req(
                "inequity",
                "It would be inequitable for defendant to retain the benefit",
                General,
                None,
                "It would be against equity for Defendant to retain the benefit.",
            ),
        ],
    );

    catalog.insert(
        BreachOfFiduciaryDuty,
        vec![
            req(
                "fiduciary_relationship",
                "A fiduciary relationship existed between the parties",
                General,
                None,
                "Defendant owed fiduciary duties to Plaintiff.",
            ),
            req(
                "breach",
                "Defendant breached its fiduciary duties",
                General,
                None,
                "Defendant breached its fiduciary duties by [ACTS/OMISSIONS].",
            ),
            req(
                "damages",
                "Plaintiff suffered damages as a result",
                General,
                None,
                "Plaintiff sustained damages as a result of the breach.",
            ),
        ],
    );

    catalog.insert(
        Defamation,
        vec![
            req(
                "false_statement",
                "Defendant made a false statement of fact",
                General,
                None,
                "Defendant stated [EXACT WORDS].",
            ),
            req(
                "publication",
                "The statement was published to a third party",
                General,
                None,
                "Defendant published this statement to [THIRD PARTIES].",
            ),
            req(
                "fault",
                "Defendant acted with the requisite degree of fault",
                General,
                None,
                "Defendant knew the statement was false.",
            ),
            req(
                "damages_or_per_se",
                "The statement caused damages or is defamatory per se",
                General,
                None,
                "The statement is defamatory per se.",
            ),
        ],
    );

    catalog.insert(
        LegalMalpractice,
        vec![
            req(
                "attorney_client_relationship",
                "An attorney-client relationship existed",
                General,
                None,
                "An attorney-client relationship existed between Plaintiff and Defendant.",
            ),
            req(
                "negligence",
                "The attorney failed to exercise ordinary skill",
                General,
                None,
                "Defendant failed to exercise the skill commonly possessed by attorneys.",
            ),
            req(
                "proximate_cause",
                "The negligence was a proximate cause of damages",
                General,
                None,
                "Defendant's negligence was a proximate cause of Plaintiff's damages.",
            ),
            req(
                "actual_damages",
                "Plaintiff suffered actual damages",
                General,
                None,
                "Plaintiff has suffered actual damages.",
            ),
            req(
                "case_within_case",
                "But for the negligence, plaintiff would have prevailed",
                General,
                None,
                "But for Defendant's negligence, Plaintiff would have prevailed.",
            ),
        ],
    );

    catalog.insert(
        MedicalMalpractice,
        vec![
            req(
                "physician_patient_relationship",
                "A physician-patient relationship existed",
                General,
                None,
                "A physician-patient relationship existed.",
            ),
            req(
                "standard_of_care",
                "The defendant deviated from the accepted standard of care",
                General,
                None,
                "Defendant deviated from good and accepted medical practice.",
            ),
            req(
                "causation",
                "The deviation was a proximate cause of injury",
                General,
                None,
                "Defendant's deviation was a proximate cause of Plaintiff's injuries.",
            ),
            req(
                "damages",
                "Plaintiff suffered damages",
                General,
                None,
                "Plaintiff has suffered injuries.",
            ),
        ],
    );

    catalog
});

/// Get the requirement checklist for a cause, in definition order
pub fn requirements_for(cause: CauseOfAction) -> &'static [AllegationRequirement] {
    CATALOG.get(&cause).map(Vec::as_slice).unwrap_or(&[])
}
