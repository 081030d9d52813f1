#![forbid(unsafe_code)]
use permanence::{io, Employee, JsonStorage, PlanningConfig, Role, Storage, Unavailability};
use std::fs;
use tempfile::tempdir;

#[test]
fn save_and_load_config_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("permanence.json")).unwrap();
    let cfg = PlanningConfig::sample();
    storage.save(&cfg).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded, cfg);

    let raw = fs::read_to_string(storage.path()).unwrap();
    assert!(raw.contains("\"ManagerA\""));
    assert!(raw.contains("\"manager\""));
}

#[test]
fn invalid_config_is_not_saved() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("permanence.json")).unwrap();

    let mut cfg = PlanningConfig::sample();
    cfg.employees.employees.push(Employee::regular("MemberC"));
    assert!(storage.save(&cfg).is_err());
    assert!(!storage.exists());

    let mut cfg = PlanningConfig::sample();
    cfg.month = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn import_employees_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(
        &path,
        "name,role,unavailable\nAlice,manager,1;15\nBob,regular,\nCarol,Regular,8\n",
    )
    .unwrap();

    let (employees, unavailable) = io::import_employees_csv(&path).unwrap();
    assert_eq!(
        employees,
        vec![
            Employee::new("Alice", Role::Manager),
            Employee::new("Bob", Role::Regular),
            Employee::new("Carol", Role::Regular),
        ]
    );
    assert_eq!(
        unavailable,
        Unavailability::new().with("Alice", [1, 15]).with("Carol", [8])
    );
}

#[test]
fn import_rejects_bad_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "name,role\nAlice,boss\n").unwrap();
    assert!(io::import_employees_csv(&path).is_err());

    fs::write(&path, "name,role,unavailable\nAlice,manager,40\n").unwrap();
    assert!(io::import_employees_csv(&path).is_err());
}

#[test]
fn plan_exports() {
    let dir = tempdir().unwrap();
    let plan = PlanningConfig::sample()
        .scheduler()
        .plan_month(2025, 11)
        .unwrap();

    let json = dir.path().join("plan.json");
    io::export_plan_json(&json, &plan).unwrap();
    assert_eq!(io::load_plan_json(&json).unwrap(), plan);

    let csv = dir.path().join("plan.csv");
    io::export_plan_csv(&csv, &plan).unwrap();
    let text = fs::read_to_string(&csv).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("date,manager,second"));
    assert_eq!(lines.next(), Some("2025-11-01,ManagerB,MemberC"));
    assert_eq!(text.lines().count(), 11);
}

#[test]
fn rendered_plan() {
    let cfg = PlanningConfig::sample();
    let allocation = cfg.scheduler().allocate(2025, 11).unwrap();
    insta::assert_snapshot!(io::render_plan(&allocation.plan), @r"
    2025-11-01 Sat | ManagerB + MemberC
    2025-11-02 Sun | ManagerA + MemberD
    2025-11-08 Sat | ManagerA + MemberE
    2025-11-09 Sun | ManagerB + MemberD
    2025-11-15 Sat | ManagerB + MemberC
    2025-11-16 Sun | ManagerA + MemberE
    2025-11-22 Sat | ManagerA + MemberC
    2025-11-23 Sun | ManagerB + MemberD
    2025-11-29 Sat | ManagerA + MemberE
    2025-11-30 Sun | ManagerB + MemberC
    ");
    insta::assert_snapshot!(io::render_counts(&cfg.employees, &allocation.counts), @r"
    ManagerA (manager): 5
    ManagerB (manager): 5
    MemberC (regular): 4
    MemberD (regular): 3
    MemberE (regular): 3
    spread: 2
    ");
}
