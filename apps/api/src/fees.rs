//! Fee Table, the static job-name to fee-range mapping. Display only.

/// Fallback shown when a job has no configured fee range.
pub const DEFAULT_FEE_ESTIMATE: &str = "fee estimate not configured";

/// Monthly fee range for a job category.
/// Total over all inputs: unknown names get the fallback, never an error.
pub fn fee_estimate(job: &str) -> &'static str {
    match job {
        "frontend engineer" => "¥700,000～¥900,000 / month",
        "backend engineer" => "¥700,000～¥900,000 / month",
        "mobile app engineer (native)" => "¥700,000～¥900,000 / month",
        "scrum master" => "¥1,200,000～¥1,500,000 / month",
        "cloud engineer" => "¥800,000～¥1,200,000 / month",
        "SRE" => "¥900,000～¥1,400,000 / month",
        "data scientist" => "¥1,000,000～¥1,400,000 / month",
        "data analyst" => "¥800,000～¥1,200,000 / month",
        "data engineer (DWH)" => "¥800,000～¥1,200,000 / month",
        "IoT engineer" => "¥900,000～¥1,500,000 / month",
        _ => DEFAULT_FEE_ESTIMATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIGURED_JOBS: [&str; 10] = [
        "frontend engineer",
        "backend engineer",
        "mobile app engineer (native)",
        "scrum master",
        "cloud engineer",
        "SRE",
        "data scientist",
        "data analyst",
        "data engineer (DWH)",
        "IoT engineer",
    ];

    #[test]
    fn test_every_configured_job_has_a_fee_range() {
        for job in CONFIGURED_JOBS {
            let fee = fee_estimate(job);
            assert_ne!(fee, DEFAULT_FEE_ESTIMATE, "{job} must have a fee range");
            assert!(fee.contains('¥'), "{job} fee must be a yen range: {fee}");
        }
    }

    #[test]
    fn test_unknown_job_gets_exact_fallback() {
        assert_eq!(fee_estimate("astronaut"), DEFAULT_FEE_ESTIMATE);
        assert_eq!(fee_estimate(""), DEFAULT_FEE_ESTIMATE);
    }

    #[test]
    fn test_lookup_is_never_empty() {
        for job in CONFIGURED_JOBS.iter().chain(["astronaut", ""].iter()) {
            assert!(!fee_estimate(job).is_empty());
        }
    }

    #[test]
    fn test_scrum_master_has_highest_floor() {
        assert!(fee_estimate("scrum master").starts_with("¥1,200,000"));
    }
}
