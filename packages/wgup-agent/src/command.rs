//! Command string builders. Pure formatting; the templates below are the
//! outbound protocol toward the system tools and must stay byte-for-byte
//! stable.

use crate::{
    config::{Config, Peer},
    constant,
};

pub fn create_interface(config: &Config) -> String {
    format!("ifconfig {} create {}", config.interface, config.address)
}

pub fn write_private_key(config: &Config) -> String {
    format!(
        "echo \"{}\" > {}/{}",
        config.private_key,
        constant::WIREGUARD_KEY_DIR,
        config.interface
    )
}

pub fn set_private_key(config: &Config) -> String {
    format!(
        "wgconfig {} set private-key {}/{}",
        config.interface,
        constant::WIREGUARD_KEY_DIR,
        config.interface
    )
}

pub fn add_peer(config: &Config, peer: &Peer) -> String {
    format!(
        "wgconfig {} add peer {} {} --allowed-ips={} --endpoint={}",
        config.interface, peer.name, peer.public_key, peer.allowed_ips, peer.endpoint
    )
}

pub fn turn_on_interface(config: &Config) -> String {
    format!("ifconfig {} up", config.interface)
}

pub fn show_status(config: &Config) -> String {
    format!("wgconfig {}", config.interface)
}

pub fn ping(peer: &Peer) -> String {
    format!("ping -c 1 {}", peer.ping_target)
}
