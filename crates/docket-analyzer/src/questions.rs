//! Canned follow-up questions per element

/// Look up the follow-up question for an element
///
/// Elements without a canned question get a generic fallback naming the
/// element, so the client is always asked something concrete.
pub fn followup_question(element_name: &str) -> String {
    let canned = match element_name {
        "existence_of_contract" => {
            "Can you describe the agreement? Was it written or verbal? When was it made?"
        }
        "plaintiff_performance" => "What did you do to fulfill your part of the agreement?",
        "defendant_breach" => "What specifically did the other party fail to do, or do wrong?",
        "damages" => "What losses have you suffered? Can you quantify them in dollars?",
        "duty" => "What responsibility did they have toward you?",
        "breach" => "What specific action or failure caused your harm?",
        "causation" => "How did their actions directly lead to your losses?",
        "material_misrepresentation" => {
            "What specific false statement was made? Who said it, when, and where?"
        }
        "falsity" => "How do you know the statement was false?",
        "scienter" => "Do you have evidence they knew it was false?",
        "justifiable_reliance" => "What did you do in reliance on their statement?",
        "ownership_or_right" => "Can you prove you owned or had rights to the property?",
        "unauthorized_dominion" => {
            "How did they take control of your property without permission?"
        }
        "enrichment" => "What benefit did they receive?",
        "at_plaintiff_expense" => "How did this benefit come at your expense?",
        "inequity" => "Why would it be unfair for them to keep this benefit?",
        "fiduciary_relationship" => "What was your relationship that created a duty of loyalty?",
        "false_statement" => "What exactly was said, and when?",
        "publication" => "Who else heard or saw the statement?",
        "fault" => "Did they know it was false?",
        "attorney_client_relationship" => "When did the attorney-client relationship begin?",
        "negligence" => "What specifically did the attorney do wrong?",
        "case_within_case" => "What would have happened if they hadn't made this mistake?",
        "physician_patient_relationship" => "When did you become a patient?",
        "standard_of_care" => "How did the doctor deviate from proper medical practice?",
        _ => "",
    };

    if canned.is_empty() {
        format!(
            "Please provide more details about {}.",
            element_name.replace('_', " ")
        )
    } else {
        canned.to_string()
    }
}
