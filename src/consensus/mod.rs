pub mod fetch;
pub mod peers;
pub mod resolver;

pub use fetch::{ChainFetcher, HttpChainFetcher};
pub use peers::PeerSet;
pub use resolver::resolve_conflicts;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::collections::HashMap;

    use super::ChainFetcher;
    use super::fetch::PeerChain;
    use crate::error::FetchError;

    /// In-memory peers: address -> chain they serve. Unknown peers answer 404.
    #[derive(Default)]
    pub struct StaticFetcher {
        chains: HashMap<String, PeerChain>,
    }

    impl StaticFetcher {
        pub fn insert(&mut self, peer: &str, chain: PeerChain) {
            self.chains.insert(peer.to_string(), chain);
        }
    }

    #[async_trait]
    impl ChainFetcher for StaticFetcher {
        async fn fetch_chain(&self, peer: &str) -> Result<PeerChain, FetchError> {
            self.chains
                .get(peer)
                .cloned()
                .ok_or(FetchError::Status(404))
        }
    }
}
