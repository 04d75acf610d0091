#![forbid(unsafe_code)]

//! OpsDeck demo binary entry point.
//!
//! Walks the navigation loop headlessly: build the catalog, apply the
//! requested selection, compose view models, and print them as text or
//! JSON. With `--link=` it instead renders the monitoring view a deep-link
//! query resolves to, which is exactly what a second browser tab would
//! show.

mod cli;
mod render;

use opsdeck::prelude::*;

use crate::cli::{Opts, OutputFormat};

fn main() {
    let opts = Opts::parse();
    init_tracing();

    if let Some(query) = opts.link.as_deref() {
        render_monitoring_page(query, opts.format);
        return;
    }

    let catalog = Catalog::builtin();
    let mut selection = Selection::new(&catalog);
    if let Some(id) = opts.system.as_deref() {
        if let Err(err) = selection.select_system(id) {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
    if let Some(name) = opts.environment.as_deref() {
        let Some(tag) = EnvironmentTag::parse(name) else {
            eprintln!("unknown environment: {name} (expected prod, staging or load)");
            std::process::exit(1);
        };
        if let Err(err) = selection.select_environment(tag) {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }

    tracing::info!(
        system = %selection.system().id,
        env = %selection.environment(),
        "selection ready"
    );

    let (system, environment) = selection.current();
    let nav = compose_system_nav(&catalog, &system.id);
    let tabs = compose_environment_tabs(system, environment);
    let cards = compose_main_view(system, environment);

    match opts.format {
        OutputFormat::Text => print!("{}", render::render_main(&nav, &tabs, &cards)),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "systems": nav,
                "environments": tabs,
                "capabilities": cards,
            });
            println!("{}", pretty(&payload));
        }
    }
}

fn render_monitoring_page(query: &str, format: OutputFormat) {
    let link = DeepLink::parse(query);
    let sections = compose_monitoring_view(&link.system, link.environment);

    match format {
        OutputFormat::Text => print!("{}", render::render_monitoring(&link, &sections)),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "system": link.system,
                "environment": link.environment,
                "sections": sections,
            });
            println!("{}", pretty(&payload));
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn init_tracing() {
    if std::env::var_os("OPSDECK_DEMO_LOG").is_some() {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_env("OPSDECK_DEMO_LOG"))
            .with_writer(std::io::stderr)
            .init();
    }
}
