//! Prompt construction for the remote analysis call.
//!
//! Centralising every prompt here serves two purposes:
//!
//! 1. **Single source of truth** — adding a department or rewording an
//!    instruction requires editing exactly one place.
//!
//! 2. **Testability** — unit tests can inspect the constructed messages
//!    directly without calling a real endpoint.

/// System role instruction sent with every analysis request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// The fixed list of candidate bank departments the model must choose from.
pub const BANKING_DEPARTMENTS: [&str; 20] = [
    "Retail Banking",
    "Corporate Banking",
    "Treasury",
    "Risk Management",
    "Compliance",
    "Audit and Inspection",
    "Human Resources",
    "Information Technology",
    "Operations",
    "Credit",
    "International Banking",
    "Legal",
    "Marketing",
    "Recovery",
    "Customer Service",
    "Accounts and Finance",
    "Branch Administration",
    "Wealth Management",
    "Agricultural and Rural Banking",
    "Small and Medium Enterprises (SME) Banking",
];

/// Render the department list as it appears in the user prompt.
pub fn department_list() -> String {
    BANKING_DEPARTMENTS.join("/\n")
}

/// Build the user instruction embedding the extracted guideline text.
///
/// Asks for exactly four fields: implementation hardness, approving
/// authority, publication date, and owning department.
pub fn analysis_prompt(content: &str) -> String {
    format!(
        "Based on the following content, provide (ONE WORD ONLY):\n\
         1. Implementation Hardness level (Easy/Medium/Hard)\n\
         2. Who passed the guideline (Name of person/or someone who has made the guideline)\n\
         3. When the Guideline was published (active date)\n\
         4. The department of the bank this guideline is for:\n\
         {}\n\
         Content: {}\n\
         Please provide concise answers to minimize token usage.",
        department_list(),
        content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_departments() {
        assert_eq!(BANKING_DEPARTMENTS.len(), 20);
    }

    #[test]
    fn prompt_embeds_content_verbatim() {
        let text = "Guideline 17/2024: minimum capital buffers.";
        let prompt = analysis_prompt(text);
        assert!(prompt.contains(text));
    }

    #[test]
    fn prompt_lists_every_department() {
        let prompt = analysis_prompt("x");
        for dept in BANKING_DEPARTMENTS {
            assert!(prompt.contains(dept), "missing department: {dept}");
        }
    }

    #[test]
    fn prompt_asks_for_four_fields() {
        let prompt = analysis_prompt("x");
        for marker in ["1.", "2.", "3.", "4."] {
            assert!(prompt.contains(marker));
        }
        assert!(prompt.contains("Easy/Medium/Hard"));
    }
}
