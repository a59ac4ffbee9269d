use super::render::{
    print_messages, render_config, render_filters, render_schema_rows, render_search,
};
use super::setup::{Cli, Commands};
use attrsearch::api::{CmdResult, ConfigAction, SearchApi, SearchPaths};
use attrsearch::config::SearchConfig;
use attrsearch::error::{Result, SearchError};
use attrsearch::labels::MessageCatalog;
use attrsearch::model::AttributeSchema;
use attrsearch::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "ATTRSEARCH_HOME";

struct AppContext {
    api: SearchApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let result = match cli.command {
        Some(Commands::Add { key, value }) => handle_add(&mut ctx, &key, &value)?,
        Some(Commands::List) | None => handle_list(&ctx)?,
        Some(Commands::Remove { keys }) => handle_remove(&mut ctx, &keys)?,
        Some(Commands::Reset) => handle_reset(&mut ctx)?,
        Some(Commands::Search) => handle_search(&ctx)?,
        Some(Commands::Attributes) => handle_attributes(&ctx)?,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value)?,
    };

    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "attrsearch=debug"
    } else {
        "attrsearch=error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // keep an already-installed subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn state_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("org", "attrsearch", "attrsearch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            SearchError::Config(format!(
                "could not determine a data directory; set {}",
                HOME_ENV
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let state_dir = state_dir()?;
    let config = SearchConfig::load(&state_dir)?;
    tracing::debug!(state_dir = %state_dir.display(), realm = %config.realm, "context");

    // only attribute selection reads the profile and catalog
    let wants_profile = matches!(
        cli.command,
        Some(Commands::Add { .. }) | Some(Commands::Attributes)
    );
    let profile = cli
        .profile
        .clone()
        .or_else(|| config.profile.clone())
        .filter(|_| wants_profile);
    let messages = config.messages.clone().filter(|_| wants_profile);

    let mut api = SearchApi::new(
        FileStore::new(state_dir.clone()),
        SearchPaths::new(state_dir),
    )
    .with_config(config);

    if let Some(path) = profile {
        api = api.with_schema(load_schema(&path)?);
    }
    if let Some(path) = messages {
        api = api.with_catalog(load_catalog(&path)?);
    }

    Ok(AppContext { api })
}

fn load_schema(path: &Path) -> Result<AttributeSchema> {
    AttributeSchema::load(path).map_err(|e| {
        SearchError::Config(format!("cannot read profile {}: {}", path.display(), e))
    })
}

fn load_catalog(path: &Path) -> Result<MessageCatalog> {
    MessageCatalog::load(path).map_err(|e| {
        SearchError::Config(format!(
            "cannot read message catalog {}: {}",
            path.display(),
            e
        ))
    })
}

fn handle_add(ctx: &mut AppContext, key: &str, value: &str) -> Result<CmdResult> {
    let result = ctx.api.add_filter(key, value)?;
    print_messages(&result.messages);
    if !result.has_errors() {
        print!("{}", render_filters(&result.filters));
    }
    Ok(result)
}

fn handle_list(ctx: &AppContext) -> Result<CmdResult> {
    let result = ctx.api.list_filters()?;
    print!("{}", render_filters(&result.filters));
    print_messages(&result.messages);
    Ok(result)
}

fn handle_remove(ctx: &mut AppContext, keys: &[String]) -> Result<CmdResult> {
    let result = ctx.api.remove_filters(keys)?;
    print_messages(&result.messages);
    print!("{}", render_filters(&result.filters));
    Ok(result)
}

fn handle_reset(ctx: &mut AppContext) -> Result<CmdResult> {
    let result = ctx.api.reset_filters()?;
    print_messages(&result.messages);
    Ok(result)
}

fn handle_search(ctx: &AppContext) -> Result<CmdResult> {
    let result = ctx.api.search()?;
    if let Some(request) = &result.search {
        print!("{}", render_search(request));
    }
    print_messages(&result.messages);
    Ok(result)
}

fn handle_attributes(ctx: &AppContext) -> Result<CmdResult> {
    let result = ctx.api.attributes()?;
    print_messages(&result.messages);
    if !result.schema_rows.is_empty() || result.messages.is_empty() {
        print!("{}", render_schema_rows(&result.schema_rows));
    }
    Ok(result)
}

fn handle_config(
    ctx: &AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let is_show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if is_show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(result)
}
