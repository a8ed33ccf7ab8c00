//! Prompt construction and the single remote completion call.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::posting::prompts::POSTING_PROMPT_TEMPLATE;
use crate::posting::selectors::{Department, Industry};

/// One generation request: the validated selector state for a single button
/// press. Created per interaction and discarded afterwards.
#[derive(Debug, Clone)]
pub struct PostingRequest {
    pub job: String,
    pub industry: Industry,
    pub department: Option<Department>,
}

impl PostingRequest {
    /// Department value as substituted into the prompt: forced to the empty
    /// string for startups no matter what the form carried.
    pub fn effective_department(&self) -> &'static str {
        match self.industry {
            Industry::Startup => "",
            Industry::NonItBusiness => self.department.map(Department::as_str).unwrap_or(""),
        }
    }
}

/// Fills the template placeholders by literal text replacement, in this
/// fixed order. Substitution is not structured templating: a value that
/// itself contains a later placeholder marker is substituted again by the
/// following pass, so the result is order-dependent for such values.
pub fn build_prompt(request: &PostingRequest) -> String {
    POSTING_PROMPT_TEMPLATE
        .replace("{selected_job}", &request.job)
        .replace("{selected_industry}", request.industry.as_str())
        .replace("{selected_department}", request.effective_department())
}

/// Runs one generation cycle: template guard, substitution, the blocking
/// remote call, whitespace trim. No retries; any remote failure surfaces as
/// `AppError::Llm` carrying the provider's error text.
pub async fn generate_posting(
    llm: &LlmClient,
    request: &PostingRequest,
) -> Result<String, AppError> {
    if POSTING_PROMPT_TEMPLATE.trim().is_empty() {
        return Err(AppError::Validation(
            "Posting prompt template is empty".to_string(),
        ));
    }

    let prompt = build_prompt(request);
    info!(
        "Generating posting for job '{}' (industry: {})",
        request.job,
        request.industry.as_str()
    );

    let text = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(job: &str, industry: Industry, department: Option<Department>) -> PostingRequest {
        PostingRequest {
            job: job.to_string(),
            industry,
            department,
        }
    }

    const CATALOG_JOBS: [&str; 10] = [
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
    fn test_prompt_has_no_unsubstituted_placeholders_for_any_job() {
        for job in CATALOG_JOBS {
            let prompt = build_prompt(&request(
                job,
                Industry::NonItBusiness,
                Some(Department::Dx),
            ));
            assert!(
                !prompt.contains("{selected_"),
                "unsubstituted placeholder left for {job}: {prompt}"
            );
            assert!(prompt.contains(job));
        }
    }

    #[test]
    fn test_startup_forces_department_empty() {
        let req = request(
            "backend engineer",
            Industry::Startup,
            Some(Department::InformationSystems),
        );
        assert_eq!(req.effective_department(), "");

        let prompt = build_prompt(&req);
        assert!(!prompt.contains("information systems department"));
        assert!(prompt.contains("# Department\n\n"));
    }

    #[test]
    fn test_non_it_business_uses_exact_department_value() {
        for department in crate::posting::selectors::DEPARTMENTS {
            let req = request("data analyst", Industry::NonItBusiness, Some(department));
            assert_eq!(req.effective_department(), department.as_str());

            let prompt = build_prompt(&req);
            assert!(prompt.contains(department.as_str()));
        }
    }

    #[test]
    fn test_non_it_business_without_department_substitutes_empty() {
        let req = request("data analyst", Industry::NonItBusiness, None);
        assert_eq!(req.effective_department(), "");
    }

    /// Pins the known edge of literal replacement: a job name containing a
    /// later placeholder marker is rewritten by the industry pass.
    #[test]
    fn test_substitution_is_order_dependent_for_colliding_values() {
        let req = request(
            "weird {selected_industry} job",
            Industry::Startup,
            None,
        );
        let prompt = build_prompt(&req);
        assert!(prompt.contains("weird startup job"));
        assert!(!prompt.contains("{selected_industry}"));
    }

    #[tokio::test]
    async fn test_generate_posting_returns_trimmed_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [{"message": {"role": "assistant", "content": "  ■ Role overview: ...  "}}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let llm = LlmClient::with_endpoint("test-key".to_string(), server.url());
        let req = request("SRE", Industry::Startup, None);

        let text = generate_posting(&llm, &req).await.unwrap();
        assert_eq!(text, "■ Role overview: ...");
    }

    #[tokio::test]
    async fn test_generate_posting_surfaces_provider_error_text() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"message": "Rate limit reached for gpt-4o"}}"#)
            .create_async()
            .await;

        let llm = LlmClient::with_endpoint("test-key".to_string(), server.url());
        let req = request("SRE", Industry::NonItBusiness, Some(Department::NewBusiness));

        let err = generate_posting(&llm, &req).await.unwrap_err();
        match err {
            AppError::Llm(message) => {
                assert!(
                    message.contains("Rate limit reached for gpt-4o"),
                    "provider text must survive: {message}"
                );
            }
            other => panic!("expected Llm error, got {other:?}"),
        }
    }
}
