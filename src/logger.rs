//! Logger module
//!
//! Plain stdout/stderr logging: the startup banner, timestamped access
//! log lines, and warning/error reporting. The banner keeps the wording
//! of the historical serving script.

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

/// Print the startup banner with deployment info and usage instructions.
pub fn log_banner(config: &Config) {
    let port = config.server.port;
    let test_page = &config.banner.test_page;

    println!();
    println!("🎮 Universal PvP - Serveur de Test");
    println!("==================================");
    println!();
    println!("📦 Programme déployé: {}", config.banner.program_id);
    println!("🌐 Réseau: {}", config.banner.network);
    println!();
    println!("🚀 Démarrage du serveur sur http://localhost:{port}");
    println!();
    println!("📝 Instructions:");
    println!("1. Assurez-vous que Phantom est installé");
    println!("2. Configurez Phantom sur Devnet (Paramètres → Réseau → Devnet)");
    println!("3. Obtenez des SOL de test: solana airdrop 2");
    println!("4. Ouvrez http://localhost:{port}{test_page}");
    println!();
    println!("Appuyez sur Ctrl+C pour arrêter le serveur");
    println!();
}

/// Confirm the listener is bound and where to point the browser.
pub fn log_listening(addr: &SocketAddr, config: &Config) {
    println!("✅ Serveur actif sur http://{addr}");
    println!("🌐 Ouvrez: {}", config.test_page_url());
}

pub fn log_shutdown() {
    println!("\n👋 Arrêt du serveur...");
}

/// One line per handled request, nginx-ish shape.
pub fn log_access(method: &str, path: &str, status: u16) {
    println!(
        "[{}] \"{method} {path}\" {status}",
        Local::now().format("%d/%b/%Y:%H:%M:%S")
    );
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
