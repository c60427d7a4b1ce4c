use std::sync::Arc;

mod api;
mod browser;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    logger::log_banner(&cfg);

    // Port in use or insufficient privilege is fatal, no retry
    let listener = server::create_listener(addr)?;

    logger::log_listening(&addr, &cfg);

    let cfg = Arc::new(cfg);
    let shutdown = server::ShutdownSignal::new();
    server::signal::install(Arc::clone(&shutdown));

    browser::open_test_page(&cfg.test_page_url());

    server::run(listener, Arc::clone(&cfg), shutdown).await;

    logger::log_shutdown();
    Ok(())
}
