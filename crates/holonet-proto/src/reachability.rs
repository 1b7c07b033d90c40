//! Connectivity probe — a bounded TCP connect to the API host.

use std::time::Duration;

use reqwest::Url;
use tokio::net::TcpStream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable(String),
}

impl Reachability {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable)
    }
}

/// Host and port the probe dials for `base_url`.
pub fn probe_target(base_url: &str) -> Option<(String, u16)> {
    let url = Url::parse(base_url).ok()?;
    let host = url.host_str()?.to_string();
    let port = url.port_or_known_default()?;
    Some((host, port))
}

pub async fn probe(base_url: &str, timeout: Duration) -> Reachability {
    let Some((host, port)) = probe_target(base_url) else {
        return Reachability::Unreachable(format!("cannot derive host from '{base_url}'"));
    };
    match tokio::time::timeout(timeout, TcpStream::connect((host.as_str(), port))).await {
        Ok(Ok(_)) => Reachability::Reachable,
        Ok(Err(e)) => Reachability::Unreachable(format!("{host}:{port}: {e}")),
        Err(_) => Reachability::Unreachable(format!("{host}:{port}: timed out after {timeout:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_target_defaults_port() {
        assert_eq!(
            probe_target("https://swapi.dev/api/"),
            Some(("swapi.dev".to_string(), 443))
        );
        assert_eq!(
            probe_target("http://127.0.0.1:8123/api/"),
            Some(("127.0.0.1".to_string(), 8123))
        );
        assert_eq!(probe_target("not a url"), None);
    }

    #[tokio::test]
    async fn test_probe_local_listener() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}/api/");
        assert_eq!(
            probe(&url, Duration::from_secs(2)).await,
            Reachability::Reachable
        );

        drop(listener);
        let result = probe(&url, Duration::from_secs(2)).await;
        assert!(!result.is_reachable());
    }
}
