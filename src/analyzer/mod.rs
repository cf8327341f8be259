pub mod llm_client;
pub mod orchestrator;
pub mod prompts;
pub mod response;

pub use llm_client::{create_llm_client, LlmConfig, LlmProvider};
pub use orchestrator::ScanOrchestrator;
pub use prompts::PromptTemplate;
pub use response::parse_findings;
