/// Directory the interface configuration files are read from.
pub const WIREGUARD_CONF_DIR: &str = "/etc/wireguard";

/// Directory private key material is written to, one file per interface.
pub const WIREGUARD_KEY_DIR: &str = "/etc/wg";
