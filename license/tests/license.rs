//! License entity behavior against the bundled fixture graph.

mod common;

use std::sync::Arc;

use cc_license::graph::vocab::{dc, dcq};
use cc_license::graph::SharedGraph;
use cc_license::{Error, License};

use common::{CountingGraph, BY_SA_10, BY_SA_30, BY_SA_30_US, SAMPLING_10};

fn counting_graph() -> Arc<CountingGraph> {
    Arc::new(CountingGraph::from_turtle(common::LICENSES_TTL))
}

fn license_on(graph: &Arc<CountingGraph>, uri: &str) -> License {
    let shared: SharedGraph = graph.clone();
    License::new(shared, uri, "standard").expect("fixture license must construct")
}

#[test]
fn construction_keeps_the_given_identity() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_30);
    assert_eq!(license.uri(), BY_SA_30);
    assert_eq!(license.license_class(), "standard");
}

#[test]
fn construction_fails_for_unasserted_uris() {
    let graph = counting_graph();
    let shared: SharedGraph = graph.clone();
    let err = License::new(shared, "http://creativecommons.org/licenses/nope/1.0/", "standard")
        .expect_err("unknown uri must not construct");
    assert!(matches!(err, Error::LicenseNotFound { .. }));
}

#[test]
fn title_mapping_resolves_at_most_once() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_30);

    assert_eq!(
        license.title("en").expect("en title"),
        "Attribution-ShareAlike 3.0 Unported"
    );
    assert_eq!(
        license.title("de").expect("de title"),
        "Namensnennung-Weitergabe unter gleichen Bedingungen 3.0 Unported"
    );
    // a miss consults the same cached mapping
    assert!(matches!(
        license.title("fr"),
        Err(Error::MissingTranslation { .. })
    ));
    assert_eq!(graph.object_calls(dc::TITLE), 1);
}

#[test]
fn missing_translation_carries_context() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_10);
    match license.title("de") {
        Err(Error::MissingTranslation { subject, language }) => {
            assert_eq!(subject, BY_SA_10);
            assert_eq!(language, "de");
        }
        other => panic!("expected MissingTranslation, got {other:?}"),
    }
}

#[test]
fn empty_description_mapping_reads_as_empty_string() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_10);
    // no descriptions exist for this license at all
    assert_eq!(license.description("en").expect("description"), "");
    assert_eq!(license.description("xx").expect("description"), "");
    assert_eq!(graph.object_calls(dc::DESCRIPTION), 1);
}

#[test]
fn present_description_still_honors_language() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_30);
    assert!(license
        .description("en")
        .expect("description")
        .starts_with("This license lets others remix"));
    assert!(matches!(
        license.description("de"),
        Err(Error::MissingTranslation { .. })
    ));
}

#[test]
fn supersession_pair_resolves_together_once() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_10);

    assert!(license.superseded().expect("superseded"));
    assert_eq!(
        license.superseded_by().expect("superseded_by"),
        Some(common::BY_SA_20)
    );
    assert_eq!(graph.object_calls(dcq::IS_REPLACED_BY), 1);
}

#[test]
fn current_licenses_are_not_superseded() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_30);
    assert!(!license.superseded().expect("superseded"));
    assert_eq!(license.superseded_by().expect("superseded_by"), None);
}

#[test]
fn scalar_attributes_resolve_lazily() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_30_US);

    assert_eq!(license.version().expect("version"), "3.0");
    assert_eq!(license.version().expect("version"), "3.0");
    assert_eq!(graph.object_calls(dcq::HAS_VERSION), 1);

    let jurisdiction = license
        .jurisdiction()
        .expect("jurisdiction")
        .expect("ported license has one");
    assert_eq!(jurisdiction.code(), "us");
    assert!(!license.deprecated().expect("deprecated"));
}

#[test]
fn unported_licenses_have_no_jurisdiction() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_30);
    assert!(license.jurisdiction().expect("jurisdiction").is_none());
}

#[test]
fn deprecation_follows_the_graph() {
    let graph = counting_graph();
    let license = license_on(&graph, SAMPLING_10);
    assert!(license.deprecated().expect("deprecated"));
}

#[test]
fn current_version_follows_family_and_jurisdiction() {
    let graph = counting_graph();

    let old = license_on(&graph, BY_SA_10);
    assert_eq!(
        old.current_version().expect("current version").as_deref(),
        Some("3.0")
    );

    let ported = license_on(&graph, BY_SA_30_US);
    assert_eq!(
        ported.current_version().expect("current version").as_deref(),
        Some("3.0")
    );
}

#[test]
fn license_code_decodes_from_the_uri() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_30_US);
    assert_eq!(license.license_code().expect("code"), "by-sa");
}

#[test]
fn libre_is_an_unimplemented_stub() {
    let graph = counting_graph();
    let license = license_on(&graph, BY_SA_30);
    assert!(!license.libre());
}
