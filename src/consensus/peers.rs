use reqwest::Url;
use std::collections::BTreeSet;

use crate::error::PeerError;

/// Known peer nodes as `host:port`. Only ever grows.
#[derive(Debug, Default, Clone)]
pub struct PeerSet {
    nodes: BTreeSet<String>,
}

impl PeerSet {
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
        }
    }

    /// Register every address, or none of them if one fails to parse.
    pub fn register_all<S: AsRef<str>>(&mut self, addresses: &[S]) -> Result<(), PeerError> {
        let normalized = addresses
            .iter()
            .map(|a| normalize_address(a.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.nodes.extend(normalized);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sorted snapshot of the peer addresses.
    pub fn to_vec(&self) -> Vec<String> {
        self.nodes.iter().cloned().collect()
    }
}

/// Reduce `http://192.168.0.5:5000/whatever` (or a bare `192.168.0.5:5000`)
/// to `192.168.0.5:5000`. The port is always kept, falling back to the
/// scheme's default when none is written.
pub fn normalize_address(address: &str) -> Result<String, PeerError> {
    let trimmed = address.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let invalid = || PeerError::InvalidAddress(address.to_string());
    let url = Url::parse(&candidate).map_err(|_| invalid())?;
    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(invalid)?;

    Ok(match url.port_or_known_default() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
