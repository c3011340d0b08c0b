use super::terminal::{SystemLinkOpener, TerminalPrompt};
use super::{Args, Command};
use color_eyre::eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use wishlist::render::render_text;
use wishlist::store::{FileStorage, WishStore};
use wishlist::user_config::UserConfig;
use wishlist::utils::default_data_dir;
use wishlist::{
    HtmlRenderer, ImageCodec, OpenOutcome, RemoveOutcome, WishForm, WishId, WishlistApp,
};

/// Execute the parsed subcommand against the persisted list.
pub async fn run(args: Args, config: &UserConfig) -> Result<()> {
    let assume_yes = matches!(args.command, Command::Remove { yes: true, .. });
    let data_dir = resolve_data_dir(args.data_dir.clone(), config);
    let mut app = build_app(&data_dir, config, assume_yes).await;

    match args.command {
        Command::Add { name, link, image } => {
            let outcome = app.submit(WishForm { name, link, image }).await?;
            println!("Added {} ({})", outcome.item.name, outcome.item.id);
            if let Some(e) = &outcome.save_error {
                warn!("Wish added but not saved: {e}");
            }
            print!("{}", render_text(&app.render()));
        }
        Command::List => {
            print!("{}", render_text(&app.render()));
        }
        Command::Open { id } => match app.open(&WishId::from(id))? {
            OpenOutcome::Opened(url) => println!("Opened {url}"),
            OpenOutcome::NoLink => {}
        },
        Command::Remove { id, .. } => match app.remove(&WishId::from(id)).await? {
            RemoveOutcome::Removed { save_error } => {
                if let Some(e) = &save_error {
                    warn!("Wish removed but not saved: {e}");
                }
                print!("{}", render_text(&app.render()));
            }
            RemoveOutcome::Cancelled => println!("Kept."),
        },
        Command::Preview { image, out } => {
            let encoded = app.preview(&image).await?;
            eprintln!(
                "{}x{} -> {}x{}{}",
                encoded.original_width,
                encoded.original_height,
                encoded.width,
                encoded.height,
                if encoded.resized { " (resized)" } else { "" }
            );
            write_output(out.as_deref(), encoded.image.as_str()).await?;
        }
        Command::Export { out } => {
            let renderer = HtmlRenderer::new().wrap_err("Failed to build page template")?;
            let page = renderer.render_page(&app.render())?;
            write_output(out.as_deref(), &page).await?;
        }
    }
    Ok(())
}

fn resolve_data_dir(cli_dir: Option<PathBuf>, config: &UserConfig) -> PathBuf {
    cli_dir
        .or_else(|| config.storage.dir.clone())
        .unwrap_or_else(default_data_dir)
}

async fn build_app(data_dir: &Path, config: &UserConfig, assume_yes: bool) -> WishlistApp {
    info!("Using data directory {}", data_dir.display());
    let storage = FileStorage::new(data_dir).with_quota(config.storage.quota_bytes);
    let store = WishStore::open(Arc::new(storage), config.storage.key.clone()).await;
    let codec = ImageCodec::new().with_jpeg_quality(config.image.jpeg_quality);
    WishlistApp::new(
        store,
        codec,
        Arc::new(TerminalPrompt::new(assume_yes)),
        Arc::new(SystemLinkOpener),
    )
    .with_max_width(config.image.max_width)
}

async fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(path, content)
                .await
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
