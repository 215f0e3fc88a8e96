use std::io::Cursor;

use qchaos_core::Entity;
use qchaos_inventory::{ObjectKind, ObjectRegistry};
use qchaos_shell::Session;

/// Feeds `script` to a fresh session over `registry` and returns what it printed.
fn run_script(registry: ObjectRegistry, script: &str) -> (ObjectRegistry, String) {
    let mut session = Session::new(Cursor::new(script.as_bytes()), Vec::new(), registry);
    session.run().expect("session should not fail on in-memory io");
    let (registry, out) = session.into_parts();
    (registry, String::from_utf8(out).expect("output is utf-8"))
}

fn demo() -> ObjectRegistry {
    let mut registry = ObjectRegistry::new();
    registry.seed_demo().unwrap();
    registry
}

#[test]
fn adds_objects_of_both_kinds_in_order() {
    let script = "1\n1\nAMB-001\n25\nAhmet Yilmaz\n1\n2\nMET-001\n15\nCooling Analysis\n6\n";
    let (registry, out) = run_script(ObjectRegistry::new(), script);

    assert_eq!(registry.len(), 2);
    let first = registry.get(0).unwrap();
    assert_eq!(first.kind(), ObjectKind::StorageSite);
    assert_eq!(first.id().as_str(), "AMB-001");
    assert_eq!(first.stability().value(), 25.0);
    assert_eq!(
        registry.get(1).unwrap().kind(),
        ObjectKind::AnalysisProcedure
    );
    assert!(out.contains("Added storage site AMB-001."));
    assert!(out.contains("Added analysis procedure MET-001."));
    assert!(out.ends_with("Exiting the system...\n"));
}

#[test]
fn reprompts_until_stability_is_valid() {
    let script = "1\n1\nAMB-007\nabc\n150\n-1\n88.5\nSupervisor\n6\n";
    let (registry, out) = run_script(ObjectRegistry::new(), script);

    assert_eq!(registry.get(0).unwrap().stability().value(), 88.5);
    assert_eq!(out.matches("Invalid input! Please enter a numeric value.").count(), 1);
    assert_eq!(
        out.matches("Invalid input! validation failed: stability must be between 0 and 100")
            .count(),
        2
    );
}

#[test]
fn reprompts_on_bad_menu_choice() {
    let (_, out) = run_script(ObjectRegistry::new(), "0\n9\nfoo\n6\n");
    assert_eq!(
        out.matches("Invalid input! Please enter a number between 1 and 6.").count(),
        2
    );
    assert_eq!(out.matches("Invalid input! Please enter a numeric value.").count(), 1);
}

#[test]
fn empty_registry_reports_are_distinct() {
    let (_, out) = run_script(ObjectRegistry::new(), "2\n3\n4\n6\n");
    assert_eq!(out.matches("No objects have been added yet.").count(), 3);
    assert!(!out.contains("No object eligible"));
}

#[test]
fn lists_and_analyses_demo_inventory() {
    let (_, out) = run_script(demo(), "2\n3\n6\n");

    assert!(out.contains("1. Object:\nObject ID: AMB-001, Stability: 25%\nSupervisor: Ahmet Yilmaz"));
    assert!(out.contains(
        "Object ID: MET-002, Stability: 80%\nAnalysis Kind: Stability Check, Monitoring Active: true"
    ));

    let warning = out
        .find("WARNING: AMB-001 storage site is at critical level! Stability: 25%")
        .unwrap();
    let safe = out
        .find("SAFE: AMB-002 storage site is at a safe level. Stability: 75%")
        .unwrap();
    let collapse = out
        .find("CRITICAL: MET-001 procedure is at risk of collapse! Stability: 15%")
        .unwrap();
    let stable = out
        .find("STABLE: MET-002 procedure is operating normally. Stability: 80%")
        .unwrap();
    assert!(warning < safe && safe < collapse && collapse < stable);
}

#[test]
fn cooldown_only_touches_storage_sites() {
    let (registry, out) = run_script(demo(), "4\n5\n6\n");

    let stabilities: Vec<f64> = registry.iter().map(|o| o.stability().value()).collect();
    assert_eq!(stabilities, vec![45.0, 95.0, 15.0, 80.0]);
    assert!(out.contains("Emergency cooldown started for storage site AMB-001!"));
    assert!(out.contains("Emergency cooldown started for storage site AMB-002!"));
    assert!(!out.contains("MET-001!"));

    // After cooldown: 15 is critical, 45 moderate, 95 and 80 safe.
    assert!(out.contains("Total Objects: 4\nCritical Level: 1\nSafe Level: 2\nModerate Risk Level: 1"));
}

#[test]
fn cooldown_without_storage_sites_reports_no_eligible_object() {
    let script = "1\n2\nMET-001\n10\nCooling Analysis\n4\n6\n";
    let (registry, out) = run_script(ObjectRegistry::new(), script);

    assert!(out.contains("No object eligible for cooldown was found."));
    assert_eq!(registry.get(0).unwrap().stability().value(), 10.0);
}

#[test]
fn system_report_matches_demo_tally() {
    let (_, out) = run_script(demo(), "5\n6\n");
    assert!(out.contains("Total Objects: 4\nCritical Level: 2\nSafe Level: 2\nModerate Risk Level: 0"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let (registry, out) = run_script(ObjectRegistry::new(), "1\n1\nAMB-001\n");
    assert!(registry.is_empty());
    assert!(out.ends_with("Exiting the system...\n"));
}
