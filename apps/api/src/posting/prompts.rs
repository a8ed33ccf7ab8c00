// Prompt constants for the posting module. The length and format
// constraints in the template are instructions to the model; nothing here
// is validated against the returned text.

/// Posting prompt template. Replace `{selected_job}`, `{selected_industry}`,
/// and `{selected_department}` before sending.
pub const POSTING_PROMPT_TEMPLATE: &str = r#"# Request
We are hiring a {selected_job} on a freelance contract.
Draft a job posting sheet tailored to the selected {selected_industry} and {selected_department}.

# Company
{selected_industry}

# Department
{selected_department}

# Constraints
- At least 600 characters in total.
- Follow the output format below exactly.
- Keep every section header (■) of the output format.
- Write "the company", never "our company".

# Output format
■ Role overview:
(explain for beginners, at least 150 characters)
■ Assigned work:
(at least 150 characters)
■ Problems to solve:
(describe the current business problems and what the company wants solved, with concrete examples matching the selected {selected_industry} and {selected_department}, at least 100 characters)
■ Work details:
(bullet list, at least 5 items)
■ Hiring background:
(at least 120 characters)
■ Team structure:
(at least 50 characters)
■ Development environment:
■ Required experience and skills:
(bullet list, at least 3 items)
"#;
