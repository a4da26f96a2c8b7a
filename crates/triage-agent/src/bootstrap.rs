//! Startup wiring: settings resolution, state construction, startup log.

use std::sync::Arc;

use tracing::info;
use triage_runtime::{ActivityLog, TicketStore};
use triage_server::rpc::context::RpcContext;
use triage_server::rpc::handlers::build_registry;
use triage_server::rpc::registry::MethodKind;
use triage_server::server::AppState;
use triage_settings::{SettingsError, TriageSettings, load_settings, load_settings_from_path};

use crate::cli::ServeArgs;

/// Load settings (file, then environment) and apply command-line overrides.
pub fn resolve_settings(args: &ServeArgs) -> Result<TriageSettings, SettingsError> {
    let mut settings = match &args.settings {
        Some(path) => load_settings_from_path(path)?,
        None => load_settings()?,
    };
    apply_cli_overrides(&mut settings, args);
    Ok(settings)
}

/// Command-line flags win over every other layer.
pub fn apply_cli_overrides(settings: &mut TriageSettings, args: &ServeArgs) {
    if let Some(host) = &args.host {
        settings.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if args.no_seed {
        settings.tickets.seed_demo_data = false;
    }
}

/// Activity log, ticket store, and method registry wired from `settings`.
///
/// Demo tickets are inserted here when `tickets.seedDemoData` is set.
pub fn build_state(settings: &TriageSettings) -> AppState {
    let activity = Arc::new(ActivityLog::new(settings.activity.capacity));
    let store = Arc::new(
        TicketStore::new(activity)
            .with_load_range(settings.health.load_min, settings.health.load_max),
    );
    if settings.tickets.seed_demo_data {
        let seeded = store.seed_demo();
        info!(seeded, "demo tickets loaded");
    }
    let ctx = RpcContext::new(store).with_log_tail(settings.activity.tail_size);
    AppState::new(build_registry(), ctx)
}

/// Record the startup event and log what the server holds.
pub fn announce_startup(state: &AppState) {
    state.ctx.activity().append("Triage server starting...");

    let health = state.ctx.store.health();
    let registry = &state.registry;
    info!(
        tickets = health.total_tickets,
        open_tickets = health.open_tickets,
        resources = %registry.names_of(MethodKind::Resource).join(", "),
        tools = %registry.names_of(MethodKind::Tool).join(", "),
        prompts = %registry.names_of(MethodKind::Prompt).join(", "),
        "server initialized"
    );
}
