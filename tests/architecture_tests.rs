//! Layer dependency contracts.

mod harness;

use harness::architecture::find_lines_containing;

#[test]
fn infrastructure_does_not_reach_into_inbound_adapters() {
    let hits = find_lines_containing("src/infrastructure", &["crate::adapter::inbound"]);

    assert!(
        hits.is_empty(),
        "found inbound adapter imports in infrastructure: {hits:#?}"
    );
}

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing("src/adapter/inbound/cli", &["crate::infrastructure"]);

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "tokio::",
            "diesel::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_and_ports_do_not_depend_on_adapters() {
    let mut hits = find_lines_containing("src/application", &["diesel::", "dialoguer::"]);
    hits.extend(find_lines_containing(
        "src/port",
        &["crate::adapter", "crate::infrastructure", "diesel::"],
    ));

    // The application tests run against the in-memory store.
    hits.retain(|(_, _, line)| !line.contains("adapter::outbound::memory"));

    assert!(
        hits.is_empty(),
        "found adapter dependencies in application or ports: {hits:#?}"
    );
}
