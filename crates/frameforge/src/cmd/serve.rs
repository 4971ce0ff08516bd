use std::io;
use std::sync::Arc;

use frameforge_frame::FrameRegistry;
use frameforge_nav::{AppState, FrameServer, NavigationConfig};
use frameforge_store::CoordinationStore;
use tokio_util::sync::CancellationToken;

use crate::cmd::{deck, ServeArgs};
use crate::exit::{io_error, serve_error, CliError, CliResult, SUCCESS};
use crate::output::{print_listening, OutputFormat};

pub fn run(args: ServeArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = Arc::new(FrameRegistry::new());
    let count = deck::build(&args.deck, &registry);
    if count == 0 {
        tracing::warn!("deck is empty, every frame request will return 404");
    }

    let config = if args.strict {
        NavigationConfig::strict()
    } else {
        NavigationConfig::default()
    };
    let state = AppState::new(registry, Arc::new(CoordinationStore::new()), config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| io_error("runtime setup failed", err))?;

    runtime.block_on(async move {
        let server = FrameServer::bind(args.bind, state)
            .await
            .map_err(|err| serve_error("bind failed", err))?;
        let addr = server
            .local_addr()
            .map_err(|err| serve_error("bind failed", err))?;
        let shutdown = CancellationToken::new();
        install_shutdown_handler(shutdown.clone())
            .map_err(|err| io_error("signal setup failed", err))?;
        print_listening(addr, count, format);

        server
            .run(shutdown)
            .await
            .map_err(|err| serve_error("server failed", err))?;
        Ok::<_, CliError>(SUCCESS)
    })
}

/// Cancel `token` on the first SIGINT or SIGTERM. The handlers are registered
/// before this returns.
#[cfg(unix)]
fn install_shutdown_handler(token: CancellationToken) -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    tokio::spawn(async move {
        tokio::select! {
            _ = interrupt.recv() => tracing::info!("interrupt received, shutting down"),
            _ = terminate.recv() => tracing::info!("terminate received, shutting down"),
        }
        token.cancel();
    });
    Ok(())
}

#[cfg(not(unix))]
fn install_shutdown_handler(token: CancellationToken) -> io::Result<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, shutting down");
            token.cancel();
        }
    });
    Ok(())
}
