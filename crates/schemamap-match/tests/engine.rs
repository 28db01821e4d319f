use std::collections::BTreeSet;

use schemamap_match::{DEFAULT_THRESHOLD, MatchEngine};
use schemamap_model::{AssignMode, Confidence, MatchMethod};

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn cross_convention_schemas_map_one_to_one() {
    let engine = MatchEngine::new();
    let sources = names(&["emp_id", "emp_name", "created_on", "dept_cd"]);
    let targets = names(&[
        "EmployeeID",
        "EmployeeName",
        "CreatedDate",
        "DepartmentCode",
    ]);
    let report = engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne);

    let expected = [
        ("emp_id", "EmployeeID"),
        ("emp_name", "EmployeeName"),
        ("created_on", "CreatedDate"),
        ("dept_cd", "DepartmentCode"),
    ];
    for (decision, (source, target)) in report.decisions().iter().zip(expected) {
        assert_eq!(decision.source_column, source);
        assert_eq!(decision.target_column.as_deref(), Some(target));
        assert!(
            decision.score >= DEFAULT_THRESHOLD,
            "{source}: score {} below threshold",
            decision.score
        );
    }

    let assigned: BTreeSet<&str> = report
        .decisions()
        .iter()
        .filter_map(|d| d.target_column.as_deref())
        .collect();
    assert_eq!(assigned.len(), 4, "no target used twice");
}

#[test]
fn numeric_suffix_bonus_separates_near_ties() {
    let engine = MatchEngine::new();
    let sources = names(&["addr1", "addr2"]);
    let targets = names(&["address_line_1", "address_line_2"]);
    let report = engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne);

    assert_eq!(
        report.decisions()[0].target_column.as_deref(),
        Some("address_line_1")
    );
    assert_eq!(
        report.decisions()[1].target_column.as_deref(),
        Some("address_line_2")
    );
}

#[test]
fn unrelated_names_stay_unmapped() {
    let engine = MatchEngine::new();
    let sources = names(&["xyz_unmatched"]);
    let targets = names(&["completely_different"]);
    let report = engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne);

    let decision = &report.decisions()[0];
    assert_eq!(decision.target_column, None);
    assert_eq!(decision.confidence, Confidence::NoMatch);
    assert_eq!(decision.confidence.label(), "no match");
    assert!(decision.score < DEFAULT_THRESHOLD);
}

#[test]
fn threshold_law_holds_for_every_decision() {
    let engine = MatchEngine::new();
    let sources = names(&["emp_id", "garbage_xyz", "created_on"]);
    let targets = names(&["EmployeeID", "CreatedDate"]);
    let report = engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne);

    for decision in report.decisions() {
        if decision.is_mapped() {
            assert!(decision.score >= DEFAULT_THRESHOLD);
        } else {
            assert_eq!(decision.confidence, Confidence::NoMatch);
        }
    }
}

#[test]
fn assignment_is_deterministic() {
    let engine = MatchEngine::new();
    let sources = names(&["addr1", "addr2", "emp_id", "dept_cd"]);
    let targets = names(&["address_line_1", "address_line_2", "EmployeeID"]);

    let first = engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne);
    let second = engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne);
    assert_eq!(first.decisions(), second.decisions());
    assert_eq!(first.matrix(), second.matrix());
}

#[test]
fn report_retains_the_full_matrix() {
    let engine = MatchEngine::new();
    let sources = names(&["emp_id", "dept_cd"]);
    let targets = names(&["EmployeeID", "DepartmentCode", "CreatedDate"]);
    let report = engine.assign(&sources, &targets, DEFAULT_THRESHOLD, AssignMode::OneToOne);

    assert_eq!(report.matrix().len(), 2);
    assert_eq!(report.matrix()[0].len(), 3);

    // Ranked candidates cover every target, best first.
    let ranked = report.ranked_candidates(0);
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].0, "EmployeeID");
    assert!(ranked[0].1.score >= ranked[1].1.score);
    assert!(ranked[1].1.score >= ranked[2].1.score);
}

#[test]
fn exact_pairs_report_exact_method() {
    let engine = MatchEngine::new();
    let detail = engine.score("customer_id", "customer_id");
    assert_eq!(detail.method, Some(MatchMethod::Exact));
    assert_eq!(detail.score, 1.0);

    let detail = engine.score("CustomerID", "customer_id");
    assert_eq!(detail.method, Some(MatchMethod::UnderscoreRemoved));
}
