use crate::{constant, error::AgentError, AgentResult};
use std::{fs, path::PathBuf};

/// One `[Peer]` block from the interface configuration file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Peer {
    pub name: String,
    pub public_key: String,
    pub allowed_ips: String,
    pub endpoint: String,
    pub persistent_keepalive: u32,
    pub ping_target: String,
}

impl Peer {
    /// A peer joins the keepalive set only when it asks for an interval
    /// and names a probe target. Either one alone is not enough.
    pub fn wants_keepalive(&self) -> bool {
        self.persistent_keepalive != 0 && !self.ping_target.is_empty()
    }
}

/// Immutable agent configuration. The interface name comes from the caller,
/// everything else from `/etc/wireguard/<iface>.conf`.
#[derive(Debug, Clone)]
pub struct Config {
    pub interface: String,
    pub address: String,
    pub private_key: String,
    pub peers: Vec<Peer>,
}

impl Config {
    pub fn load(interface: &str) -> AgentResult<Self> {
        let path = Self::file_path(interface);
        let content = fs::read_to_string(&path).map_err(|source| AgentError::ConfigLoad {
            path: path.clone(),
            source,
        })?;
        Self::from_document(interface, &content)
    }

    pub fn file_path(interface: &str) -> PathBuf {
        PathBuf::from(format!(
            "{}/{interface}.conf",
            constant::WIREGUARD_CONF_DIR
        ))
    }

    /// Parses the INI-style document. `[Peer]` sections are non-unique and
    /// kept in file order; unknown sections and keys are ignored.
    pub fn from_document(interface: &str, content: &str) -> AgentResult<Self> {
        let mut config = Config {
            interface: interface.to_string(),
            address: String::new(),
            private_key: String::new(),
            peers: Vec::new(),
        };
        let mut section = Section::None;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                section = match name.trim() {
                    "Interface" => Section::Interface,
                    "Peer" => {
                        config.peers.push(Peer::default());
                        Section::Peer
                    }
                    _ => Section::None,
                };
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(AgentError::ConfigParse {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            };
            let (key, value) = (key.trim(), value.trim());

            match section {
                Section::Interface => match key {
                    "Address" => config.address = value.to_string(),
                    "PrivateKey" => config.private_key = value.to_string(),
                    _ => {}
                },
                Section::Peer => {
                    // A key line inside [Peer] always follows a section header,
                    // so the vec is non-empty here.
                    let peer = config.peers.last_mut().unwrap();
                    match key {
                        "Name" => peer.name = value.to_string(),
                        "PublicKey" => peer.public_key = value.to_string(),
                        "AllowedIPs" => peer.allowed_ips = value.to_string(),
                        "Endpoint" => peer.endpoint = value.to_string(),
                        "PingTarget" => peer.ping_target = value.to_string(),
                        "PersistentKeepalive" => {
                            peer.persistent_keepalive = match value.parse::<u32>() {
                                Ok(secs) => secs,
                                Err(e) => {
                                    tracing::warn!(
                                        "failed to read PersistentKeepalive as uint: {e}"
                                    );
                                    0
                                }
                            };
                        }
                        _ => {}
                    }
                }
                Section::None => {}
            }
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Copy)]
enum Section {
    None,
    Interface,
    Peer,
}
