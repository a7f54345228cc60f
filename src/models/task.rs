use serde::{Deserialize, Serialize};

// A static description of an HTTP request a client under test is expected to
// perform. The service returns these records verbatim and never executes
// them; the retry/timeout parameters are inert data for the caller.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub id: i64,
    pub method: String,
    pub url: String,
    pub headers: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_response_code: Option<u32>,
}

// Four page-fetch tasks pointing back at this service's own page endpoint.
// The last record carries the optional retry parameters some callers read.
pub fn seed_tasks(base_url: &str) -> Vec<Task> {
    (1..=4)
        .map(|n| Task {
            id: n,
            method: "GET".to_string(),
            url: format!("{}/page/{}", base_url, n),
            headers: "{}".to_string(),
            body: String::new(),
            timeout: (n == 4).then_some(30),
            retries: (n == 4).then_some(3),
            interval: (n == 4).then_some(10),
            expected_response_code: (n == 4).then_some(200),
        })
        .collect()
}
