use async_trait::async_trait;
use futures::future::join_all;
use log::warn;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::blockchain::Block;
use crate::error::FetchError;

/// Body of `GET /chain`, as served by this node and its peers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerChain {
    pub chain: Vec<Block>,
    pub length: usize,
}

/// Pulls a peer's full chain.
#[async_trait]
pub trait ChainFetcher: Send + Sync {
    async fn fetch_chain(&self, peer: &str) -> Result<PeerChain, FetchError>;
}

/// Fetches `http://{peer}/chain` with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpChainFetcher {
    client: reqwest::Client,
}

impl HttpChainFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ChainFetcher for HttpChainFetcher {
    async fn fetch_chain(&self, peer: &str) -> Result<PeerChain, FetchError> {
        let response = self.client.get(format!("http://{peer}/chain")).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        Ok(response.json::<PeerChain>().await?)
    }
}

/// Query every peer concurrently. Results keep the order of `peers`;
/// peers that fail or report an inconsistent length are logged and dropped.
pub async fn fetch_all(
    fetcher: &dyn ChainFetcher,
    peers: &[String],
) -> Vec<(String, PeerChain)> {
    let responses = join_all(peers.iter().map(|peer| fetcher.fetch_chain(peer))).await;

    peers
        .iter()
        .zip(responses)
        .filter_map(|(peer, response)| {
            let checked = response.and_then(|body| {
                if body.length == body.chain.len() {
                    Ok(body)
                } else {
                    Err(FetchError::LengthMismatch {
                        reported: body.length,
                        actual: body.chain.len(),
                    })
                }
            });
            match checked {
                Ok(body) => Some((peer.clone(), body)),
                Err(e) => {
                    warn!("CONSENSUS - skipping peer {}: {}", peer, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::testing::StaticFetcher;

    #[actix_web::test]
    async fn unreachable_and_inconsistent_peers_are_dropped() {
        let mut fetcher = StaticFetcher::default();
        fetcher.insert(
            "a:1",
            PeerChain {
                chain: vec![Block::genesis()],
                length: 1,
            },
        );
        fetcher.insert(
            "b:1",
            PeerChain {
                chain: vec![Block::genesis()],
                length: 7,
            },
        );

        let peers = vec!["a:1".to_string(), "b:1".to_string(), "c:1".to_string()];
        let fetched = fetch_all(&fetcher, &peers).await;

        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].0, "a:1");
    }

    #[actix_web::test]
    async fn unroutable_peer_is_an_error_not_a_panic() {
        let fetcher = HttpChainFetcher::new(Duration::from_millis(200)).unwrap();
        // port 9 on an unassigned TEST-NET address never answers
        let result = fetcher.fetch_chain("192.0.2.1:9").await;
        assert!(result.is_err());
    }
}
