use std::{io, sync::OnceLock};

use crm_form::{page, session, Args, Config, Ending, Session, Terminal};
use service::infra::{http, Http};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args {
        config,
        page: page_path,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { server, form, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let page = page::load(&page_path).await.map_err(|e| {
        log::error!("failed to load page from `{page_path}`: {e}");
    })?;

    let transport_config = http::Config::try_from(server).map_err(|e| {
        log::error!("invalid server base URL: {e}");
    })?;
    let transport = Http::new(transport_config).map_err(|e| {
        log::error!("failed to initialize `Http` transport: {e}");
    })?;

    let terminal =
        Terminal::new(io::stdin().lock(), io::stdout(), page.variant());
    let session = Session::new(form.into(), page, transport, terminal);

    match session::run(&session).await {
        Ok(Ending::Navigated(url)) => {
            log::info!("booking saved, now at `{url}`");
        }
        Ok(Ending::Quit | Ending::Eof) => log::info!("left without saving"),
        Err(e) => {
            log::error!("failed to read terminal input: {e}");
            return Err(());
        }
    }
    Ok(())
}
