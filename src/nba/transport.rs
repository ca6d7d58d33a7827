use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;

/// Anything that can turn a stats URL into the decoded JSON body.
pub trait StatsTransport {
    fn fetch_json(&self, endpoint_url: &str) -> Result<Value>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .build();
        UreqTransport { agent }
    }
}

impl StatsTransport for UreqTransport {
    fn fetch_json(&self, endpoint_url: &str) -> Result<Value> {
        log::debug!("GET {}", endpoint_url);
        // stats.nba.com drops requests that don't look like they came from the site
        let r = self.agent.get(endpoint_url)
            .set("Host","stats.nba.com")
            .set("User-Agent","Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:72.0) Gecko/20100101 Firefox/72.0")
            .set("Accept","application/json, text/plain, */*")
            .set("Accept-Language","en-US,en;q=0.5")
            .set("Connection","keep-alive")
            .set("Origin","https://www.nba.com")
            .set("Referer","https://www.nba.com/")
            .set("Pragma","no-cache")
            .set("Cache-Control","no-cache")
            .call()
            .with_context(|| format!("request to {} failed", endpoint_url))?;
        let json: Value = r.into_json()
            .with_context(|| format!("response from {} was not valid json", endpoint_url))?;
        Ok(json)
    }
}
