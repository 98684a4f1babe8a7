//! Command handlers
//!
//! Each handler drives one `ResourceScreen` the way the dashboard page
//! would: load the list, act on a row, report through notices.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, bail};
use hotel_client::access::{self, Area, Capability};
use hotel_client::{
    ClientConfig, HttpClient, ListFilter, NetworkHttpClient, PendingImage, Resource,
    ResourceScreen, Session, SessionStore, Toggle, auth,
};
use shared::models::{
    AccessLevel, Department, MenuCategory, MenuItem, RestaurantTable, Role, SpaCategory,
    SpaService, SpaSpecialist, StaffMember, TableStatus,
};

use crate::cli::{Cli, Command, ResourceKind, ToggleKind};
use crate::console::ConsoleNotifier;
use crate::render;

/// Run `$body` with `$r` bound to the resource type picked on the command line
macro_rules! with_resource {
    ($kind:expr, $r:ident => $body:expr) => {
        match $kind {
            ResourceKind::MenuItems => {
                type $r = MenuItem;
                $body
            }
            ResourceKind::MenuCategories => {
                type $r = MenuCategory;
                $body
            }
            ResourceKind::Tables => {
                type $r = RestaurantTable;
                $body
            }
            ResourceKind::SpaServices => {
                type $r = SpaService;
                $body
            }
            ResourceKind::Specialists => {
                type $r = SpaSpecialist;
                $body
            }
            ResourceKind::SpaCategories => {
                type $r = SpaCategory;
                $body
            }
            ResourceKind::Staff => {
                type $r = StaffMember;
                $body
            }
            ResourceKind::Departments => {
                type $r = Department;
                $body
            }
            ResourceKind::Roles => {
                type $r = Role;
                $body
            }
            ResourceKind::AccessLevels => {
                type $r = AccessLevel;
                $body
            }
        }
    };
}

macro_rules! with_toggle {
    ($kind:expr, $r:ident => $body:expr) => {
        match $kind {
            ToggleKind::MenuItems => {
                type $r = MenuItem;
                $body
            }
            ToggleKind::MenuCategories => {
                type $r = MenuCategory;
                $body
            }
            ToggleKind::Specialists => {
                type $r = SpaSpecialist;
                $body
            }
            ToggleKind::SpaCategories => {
                type $r = SpaCategory;
                $body
            }
            ToggleKind::Staff => {
                type $r = StaffMember;
                $body
            }
        }
    };
}

/// Flags and their environment variables, applied over the defaults
fn client_config(cli: &Cli) -> ClientConfig {
    ClientConfig::new(&cli.api_url)
        .with_optional_token(cli.token.clone())
        .with_timeout(cli.timeout)
        .with_session_dir(&cli.session_dir)
}

type Screen<R> = ResourceScreen<R, NetworkHttpClient, Arc<ConsoleNotifier>>;

pub struct Context {
    config: ClientConfig,
    store: SessionStore,
    session: Option<Session>,
    pub notifier: Arc<ConsoleNotifier>,
}

impl Context {
    pub fn new(cli: &Cli) -> Self {
        let config = client_config(cli);
        let store = config.session_store();
        let session = store.load();
        Self {
            config,
            store,
            session,
            notifier: Arc::new(ConsoleNotifier::new()),
        }
    }

    /// HTTP client carrying the explicit token, else the session's
    fn http(&self) -> anyhow::Result<NetworkHttpClient> {
        let mut http = self.config.build_http_client()?;
        if http.token().is_none()
            && let Some(session) = &self.session
        {
            http.set_token(Some(session.token.clone()));
        }
        Ok(http)
    }

    fn require(&self, capability: Capability) -> anyhow::Result<()> {
        let user = self.session.as_ref().map(|s| &s.user);
        access::require(user, capability).with_context(|| match user {
            None => "not signed in; run `hotel-admin login` first".to_string(),
            Some(_) => format!("this account may not {}", capability.action()),
        })
    }

    fn screen<R: Resource>(&self) -> anyhow::Result<Screen<R>> {
        Ok(ResourceScreen::new(self.http()?, self.notifier.clone()))
    }
}

pub async fn run(cli: Cli, ctx: &Context) -> anyhow::Result<()> {
    match cli.command {
        Command::Login { email, password } => login(ctx, &email, &password).await,
        Command::Logout => logout(ctx).await,
        Command::Whoami => whoami(ctx),
        Command::List {
            resource,
            search,
            status,
        } => {
            let filter = ListFilter {
                search: search.unwrap_or_default(),
                status,
            };
            with_resource!(resource, R => list::<R>(ctx, filter).await)
        }
        Command::Show { resource, id } => with_resource!(resource, R => show::<R>(ctx, &id).await),
        Command::Create {
            resource,
            file,
            images,
        } => with_resource!(resource, R => create::<R>(ctx, &file, &images).await),
        Command::Update {
            resource,
            id,
            file,
            images,
            keep_images,
        } => with_resource!(resource, R => update::<R>(ctx, &id, &file, &images, &keep_images).await),
        Command::Delete { resource, id, yes } => {
            with_resource!(resource, R => delete::<R>(ctx, &id, yes).await)
        }
        Command::Toggle { resource, id } => with_toggle!(resource, R => toggle::<R>(ctx, &id).await),
        Command::TableStatus { id, status } => table_status(ctx, &id, status.as_deref()).await,
    }
}

// ========== Session ==========

async fn login(ctx: &Context, email: &str, password: &str) -> anyhow::Result<()> {
    let mut http = ctx.config.build_http_client()?;
    let session = auth::login(&mut http, email, password)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message("Login failed")))?;
    ctx.store.save(&session)?;
    println!(
        "Signed in as {} ({})",
        session.user.name,
        session.user.role()
    );
    Ok(())
}

async fn logout(ctx: &Context) -> anyhow::Result<()> {
    let mut http = ctx.http()?;
    let result = auth::logout(&mut http).await;
    // the local session goes regardless of what the backend said
    ctx.store.delete()?;
    if let Err(e) = result {
        tracing::warn!(error = %e, "backend logout failed");
    }
    println!("Signed out");
    Ok(())
}

fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let Some(session) = &ctx.session else {
        bail!("not signed in");
    };
    let user = &session.user;
    println!("{} <{}>", user.name, user.email.as_deref().unwrap_or("-"));
    println!("role: {}", user.role());
    if let Some(level) = &user.access_level {
        println!("access level: {}", level);
    }
    for area in [Area::Restaurant, Area::Spa, Area::Staff] {
        let allowed: Vec<&str> = [
            ("view", Capability::View(area)),
            ("manage", Capability::Manage(area)),
            ("delete", Capability::Delete(area)),
        ]
        .into_iter()
        .filter(|(_, cap)| access::allows(user, *cap))
        .map(|(name, _)| name)
        .collect();
        println!("{:<11} {}", format!("{}:", area.key()), allowed.join(", "));
    }
    Ok(())
}

// ========== Resources ==========

async fn list<R: Resource>(ctx: &Context, filter: ListFilter) -> anyhow::Result<()> {
    ctx.require(Capability::View(R::AREA))?;
    let mut screen = ctx.screen::<R>()?;
    screen.filter = filter;
    screen.load().await?;

    let rows: Vec<Vec<String>> = screen.visible().iter().map(|item| item.row()).collect();
    print!("{}", render::table(R::COLUMNS, &rows));
    println!("{} of {} shown", rows.len(), screen.list().len());
    Ok(())
}

async fn show<R: Resource>(ctx: &Context, id: &str) -> anyhow::Result<()> {
    ctx.require(Capability::View(R::AREA))?;
    let screen = ctx.screen::<R>()?;
    let item = screen.api().get(id).await?;
    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}

fn read_draft<R: Resource>(file: &Path) -> anyhow::Result<R::Draft> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a valid {} draft", file.display(), R::NAME))
}

fn read_images(paths: &[PathBuf]) -> anyhow::Result<Vec<PendingImage>> {
    paths
        .iter()
        .map(|p| {
            PendingImage::from_path(p).with_context(|| format!("failed to read image {}", p.display()))
        })
        .collect()
}

async fn create<R: Resource>(ctx: &Context, file: &Path, images: &[PathBuf]) -> anyhow::Result<()> {
    ctx.require(Capability::Manage(R::AREA))?;
    let draft = read_draft::<R>(file)?;
    let images = read_images(images)?;

    let mut screen = ctx.screen::<R>()?;
    // create hooks look at the current list
    screen.load().await?;
    let form = screen.open_create(draft);
    for image in images {
        form.images.add(image);
    }
    let saved = screen.submit_form().await?;
    print!("{}", render::table(R::COLUMNS, &[saved.row()]));
    Ok(())
}

async fn update<R: Resource>(
    ctx: &Context,
    id: &str,
    file: &Path,
    images: &[PathBuf],
    keep_images: &[String],
) -> anyhow::Result<()> {
    ctx.require(Capability::Manage(R::AREA))?;
    let draft = read_draft::<R>(file)?;
    let images = read_images(images)?;

    let mut screen = ctx.screen::<R>()?;
    screen.load().await?;
    let form = screen.open_edit(id)?;
    form.draft = draft;
    if !keep_images.is_empty() {
        let stored: Vec<String> = form.images.existing().to_vec();
        for url in stored.iter().filter(|url| !keep_images.contains(*url)) {
            form.images.remove_existing(url);
        }
    }
    for image in images {
        form.images.add(image);
    }
    let saved = screen.submit_form().await?;
    print!("{}", render::table(R::COLUMNS, &[saved.row()]));
    Ok(())
}

async fn delete<R: Resource>(ctx: &Context, id: &str, yes: bool) -> anyhow::Result<()> {
    ctx.require(Capability::Delete(R::AREA))?;
    let mut screen = ctx.screen::<R>()?;
    screen.load().await?;
    screen.request_delete(id)?;

    let label = screen
        .list()
        .find(id)
        .map(|item| item.label())
        .unwrap_or_else(|| id.to_string());
    if !yes && !confirm(&format!("Delete {} \"{}\"?", R::NAME, label))? {
        screen.cancel_delete();
        println!("Cancelled");
        return Ok(());
    }
    screen.confirm_delete().await?;
    Ok(())
}

async fn toggle<R: Toggle>(ctx: &Context, id: &str) -> anyhow::Result<()> {
    ctx.require(Capability::Manage(R::AREA))?;
    let mut screen = ctx.screen::<R>()?;
    screen.load().await?;
    screen.toggle(id).await?;
    Ok(())
}

async fn table_status(ctx: &Context, id: &str, status: Option<&str>) -> anyhow::Result<()> {
    ctx.require(Capability::Manage(RestaurantTable::AREA))?;
    let status: Option<TableStatus> = status
        .map(|s| s.parse::<TableStatus>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()?;

    let mut screen = ctx.screen::<RestaurantTable>()?;
    screen.load().await?;
    match status {
        Some(status) => screen.set_table_status(id, status).await?,
        None => screen.cycle_table_status(id).await?,
    };
    Ok(())
}

/// Ask on stdin; only `y` or `yes` counts as consent
fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
