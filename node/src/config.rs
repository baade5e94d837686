use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// File-backed ledger state. None keeps state in memory only.
    pub store_path: Option<PathBuf>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            store_path: Some(PathBuf::from("credence.state")),
        }
    }
}

impl NodeConfig {
    /// Environment overrides: `CREDENCE_BIND` for the listen address,
    /// `CREDENCE_STORE` for the state file ("memory" disables persistence).
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(bind) = std::env::var("CREDENCE_BIND") {
            match bind.parse() {
                Ok(addr) => cfg.bind_addr = addr,
                Err(e) => tracing::warn!("Ignoring invalid CREDENCE_BIND {:?}: {}", bind, e),
            }
        }
        if let Ok(store) = std::env::var("CREDENCE_STORE") {
            if store == "memory" {
                cfg.store_path = None;
            } else {
                cfg.store_path = Some(PathBuf::from(store));
            }
        }
        cfg
    }
}
