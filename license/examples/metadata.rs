//! Demonstrates resolving license metadata from the bundled fixtures.
//!
//! Run with: `cargo run --example metadata -p cc-license`

use std::sync::Arc;

use anyhow::Result;
use cc_license::graph::{MemoryGraph, SharedGraph};
use cc_license::{GraphConfig, SelectorRegistry};

const LICENSES_TTL: &str = include_str!("../tests/fixtures/licenses.ttl");
const SELECTORS_TTL: &str = include_str!("../tests/fixtures/selectors.ttl");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let licenses: SharedGraph = Arc::new(MemoryGraph::from_turtle(LICENSES_TTL)?);
    let selectors: SharedGraph = Arc::new(MemoryGraph::from_turtle(SELECTORS_TTL)?);
    let registry = SelectorRegistry::new(GraphConfig {
        selectors,
        licenses,
    });

    println!("Available license families:");
    for code in registry.codes()? {
        let selector = registry.choose(&code)?;
        println!("  {:14} {} <{}>", code, selector.title("en")?, selector.uri());
    }
    println!();

    let standard = registry.choose("standard")?;
    let by_sa = standard.by_code("by-sa", None, None)?;
    let summary = serde_json::json!({
        "uri": by_sa.uri(),
        "code": by_sa.license_code()?,
        "title": by_sa.title("en")?,
        "version": by_sa.version()?,
        "jurisdiction": by_sa.jurisdiction()?.map(|j| j.code().to_owned()),
        "deprecated": by_sa.deprecated()?,
        "superseded": by_sa.superseded()?,
        "current_version": by_sa.current_version()?,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
