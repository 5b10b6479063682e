mod cli;

use anyhow::{bail, Context};
use camlet::prelude::*;
use clap::Parser;
use cli::{Cli, Command, FavoriteAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    camlet::init_logging();

    let cli = Cli::parse();

    let config = CatalogConfig::from_env().context("catalog configuration")?;
    let batch_cap = config.batch_cap;
    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalog::new(config)?);

    let storage = StorageConfig::from_env();
    let store = Arc::new(FavoriteStore::with_key(
        Arc::new(FileStore::new(&storage.directory)),
        storage.key.clone(),
    ));

    // Ctrl-C cancels whatever request is in flight.
    let focus = ScreenFocus::new();
    let token = focus.focus();
    let interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });

    match cli.command {
        Command::List { pages } => list(api, pages, &token).await,
        Command::Map {
            lat,
            lon,
            dlat,
            dlon,
        } => map(api, Viewport::new(lat, lon, dlat, dlon), &token).await,
        Command::Favorites { action: None } => favorites(store, api, batch_cap, &token).await,
        Command::Favorites {
            action: Some(FavoriteAction::Add { id }),
        } => {
            let ids = store.add(&id).await?;
            println!("{} favorites", ids.len());
            Ok(())
        }
        Command::Favorites {
            action: Some(FavoriteAction::Remove { id }),
        } => {
            let ids = store.remove(&id).await?;
            println!("{} favorites", ids.len());
            Ok(())
        }
    }
}

async fn list(api: Arc<dyn CatalogApi>, pages: usize, token: &CancellationToken) -> anyhow::Result<()> {
    let mut screen = CameraListScreen::new(api, ListProfile::Compact);
    let mut outcome = screen.on_focus(token).await;
    for _ in 1..pages {
        if !matches!(outcome, Some(PageOutcome::Loaded(_))) {
            break;
        }
        outcome = Some(screen.on_end_reached(token).await);
    }
    if screen.has_failed() {
        log::warn!("last page failed to load");
    }

    for camera in screen.cameras() {
        print_camera(camera);
    }
    if let Some(total) = screen.fetcher().cursor().total() {
        println!("{} of {} cameras", screen.cameras().len(), total);
    }
    Ok(())
}

async fn map(api: Arc<dyn CatalogApi>, viewport: Viewport, token: &CancellationToken) -> anyhow::Result<()> {
    let mut screen = MapScreen::new(api);
    screen.on_region_change_complete(viewport, token).await;

    let Some(query) = screen.last_query() else {
        bail!("no region could be queried for {:?}", viewport);
    };
    println!("region {} (zoom {})", query.to_path_segment(), query.zoom);
    for camera in screen.markers() {
        print_camera(camera);
    }
    Ok(())
}

async fn favorites(
    store: Arc<FavoriteStore>,
    api: Arc<dyn CatalogApi>,
    batch_cap: usize,
    token: &CancellationToken,
) -> anyhow::Result<()> {
    let scheduler = BatchFetchScheduler::with_cap(api, batch_cap);
    let mut screen = MyCamerasScreen::with_scheduler(store, scheduler);
    match screen.on_focus(token).await {
        Reconciliation::Cleared => println!("no favorites yet"),
        Reconciliation::Stale => bail!("interrupted"),
        _ if screen.has_failed() => bail!("could not load favorite cameras"),
        _ => {
            for camera in screen.cameras() {
                print_camera(camera);
            }
        }
    }
    Ok(())
}

fn print_camera(camera: &Camera) {
    let live = if camera.is_live() { " [live]" } else { "" };
    match camera.subtitle() {
        Some(subtitle) => println!("{:>12}  {}{} ({})", camera.id, camera.title, live, subtitle),
        None => println!("{:>12}  {}{}", camera.id, camera.title, live),
    }
}
