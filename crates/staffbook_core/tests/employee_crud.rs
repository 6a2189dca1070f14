use staffbook_core::{Employee, EmployeeField, EmployeeRepository, InMemoryEmployeeRepository};

fn ivan() -> Employee {
    Employee::new("Ivan", "Test", "QA")
}

fn maksim() -> Employee {
    Employee::new("Maksim", "Dev", "Frontend")
}

fn alex() -> Employee {
    Employee::new("Alex", "Dev", "Backend")
}

fn fill() -> Employee {
    Employee::new("Fill", "Dev", "Backend")
}

fn seeded(employees: &[Employee]) -> InMemoryEmployeeRepository {
    let mut repo = InMemoryEmployeeRepository::new();
    for employee in employees {
        repo.create(&employee.name, &employee.position, &employee.department);
    }
    repo
}

#[test]
fn create_appends_record_at_end() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.create("Ivan", "Test", "QA");

    assert_eq!(repo.read(), &[Some(ivan())]);
}

#[test]
fn create_accepts_duplicate_names() {
    let repo = seeded(&[ivan(), Employee::new("Ivan", "Dev", "Backend")]);
    assert_eq!(repo.live_count(), 2);
}

#[test]
fn read_returns_records_in_insertion_order() {
    let repo = seeded(&[ivan(), maksim(), alex()]);
    assert_eq!(repo.read(), &[Some(ivan()), Some(maksim()), Some(alex())]);
}

#[test]
fn update_changes_only_supplied_fields() {
    let mut repo = seeded(&[ivan(), maksim(), alex()]);

    assert_eq!(repo.update("Alex", None, Some("Fullstack")), 1);
    assert_eq!(repo.read()[2], Some(Employee::new("Alex", "Dev", "Fullstack")));
    assert_eq!(repo.read()[0], Some(ivan()));
    assert_eq!(repo.read()[1], Some(maksim()));
}

#[test]
fn update_without_fields_changes_nothing() {
    let mut repo = seeded(&[ivan(), alex()]);
    let before = repo.clone();

    assert_eq!(repo.update("Alex", None, None), 1);
    assert_eq!(repo, before);
}

#[test]
fn update_touches_every_record_with_the_name() {
    let mut repo = seeded(&[ivan(), Employee::new("Ivan", "Dev", "Backend")]);

    assert_eq!(repo.update("Ivan", Some("Lead"), None), 2);
    assert!(repo.employees().all(|employee| employee.position == "Lead"));
}

#[test]
fn update_with_empty_string_overwrites_field() {
    let mut repo = seeded(&[alex()]);

    assert_eq!(repo.update("Alex", Some(""), None), 1);
    assert_eq!(repo.read(), &[Some(Employee::new("Alex", "", "Backend"))]);
}

#[test]
fn update_unknown_name_is_silent_noop() {
    let mut repo = seeded(&[ivan()]);
    assert_eq!(repo.update("Nobody", Some("Dev"), Some("Backend")), 0);
    assert_eq!(repo.read(), &[Some(ivan())]);
}

#[test]
fn delete_leaves_tombstone_at_first_match() {
    let mut repo = seeded(&[ivan(), maksim(), alex()]);

    assert_eq!(repo.delete("Ivan"), Some(ivan()));
    assert_eq!(repo.read(), &[None, Some(maksim()), Some(alex())]);
    assert_eq!(repo.len(), 3);
    assert_eq!(repo.live_count(), 2);
}

#[test]
fn delete_unknown_name_is_silent_noop() {
    let mut repo = seeded(&[ivan(), maksim()]);
    assert_eq!(repo.delete("Nobody"), None);
    assert_eq!(repo.read(), &[Some(ivan()), Some(maksim())]);
}

#[test]
fn formatted_rewrites_name_and_department_casing() {
    let mut repo = seeded(&[ivan(), maksim(), alex()]);
    repo.formatted();

    assert_eq!(
        repo.read(),
        &[
            Some(Employee::new("IVAN", "Test", "qa")),
            Some(Employee::new("MAKSIM", "Dev", "frontend")),
            Some(Employee::new("ALEX", "Dev", "backend")),
        ]
    );
}

#[test]
fn formatted_twice_equals_formatted_once() {
    let mut once = seeded(&[ivan(), maksim(), alex()]);
    once.delete("Maksim");
    once.formatted();

    let mut twice = once.clone();
    twice.formatted();

    assert_eq!(once, twice);
}

#[test]
fn clone_is_independent_in_both_directions() {
    let mut original = seeded(&[ivan(), maksim(), alex()]);
    let mut cloned = original.clone();
    assert_eq!(cloned, original);

    cloned.update("Ivan", Some("Lead"), None);
    cloned.create("Fill", "Dev", "Backend");
    assert_eq!(original.read()[0], Some(ivan()));
    assert_eq!(original.len(), 3);

    original.delete("Alex");
    assert_eq!(cloned.read()[2], Some(alex()));
}

#[test]
fn merge_is_left_biased_union() {
    let mut left = seeded(&[ivan(), maksim()]);
    let right = seeded(&[Employee::new("Maksim", "Lead", "Platform"), alex()]);

    assert_eq!(left.merge(&right), 1);
    assert_eq!(left.read(), &[Some(ivan()), Some(maksim()), Some(alex())]);
}

#[test]
fn merge_appends_in_partner_order_and_skips_partner_tombstones() {
    let mut left = seeded(&[ivan()]);
    let mut right = seeded(&[fill(), maksim(), alex()]);
    right.delete("Maksim");

    assert_eq!(left.merge(&right), 2);
    assert_eq!(left.read(), &[Some(ivan()), Some(fill()), Some(alex())]);
}

#[test]
fn merge_accepts_any_employee_source() {
    let mut left = seeded(&[ivan()]);
    let partner = vec![ivan(), alex()];

    assert_eq!(left.merge(&partner), 1);
    assert_eq!(left.read(), &[Some(ivan()), Some(alex())]);
}

#[test]
fn unique_departments_keep_first_seen_order() {
    let repo = seeded(&[ivan(), maksim(), alex(), fill()]);
    assert_eq!(repo.unique_departments(), vec!["QA", "Frontend", "Backend"]);
}

#[test]
fn unique_departments_ignore_tombstones() {
    let mut repo = seeded(&[ivan(), maksim(), alex()]);
    repo.delete("Ivan");
    assert_eq!(repo.unique_departments(), vec!["Frontend", "Backend"]);
}

#[test]
fn is_equal_compares_only_given_keys() {
    assert!(InMemoryEmployeeRepository::is_equal(
        &maksim(),
        &alex(),
        &["position"]
    ));
    assert!(!InMemoryEmployeeRepository::is_equal(
        &ivan(),
        &alex(),
        &["position"]
    ));
    assert!(InMemoryEmployeeRepository::is_equal(
        &alex(),
        &fill(),
        &["position", "department"]
    ));
    assert!(!InMemoryEmployeeRepository::is_equal(
        &maksim(),
        &fill(),
        &["position", "department"]
    ));
}

#[test]
fn is_equal_is_vacuous_for_empty_and_unknown_keys() {
    assert!(InMemoryEmployeeRepository::is_equal(&ivan(), &alex(), &[]));
    assert!(InMemoryEmployeeRepository::is_equal(
        &ivan(),
        &alex(),
        &["salary"]
    ));
}

#[test]
fn is_equal_by_uses_typed_fields() {
    assert!(InMemoryEmployeeRepository::is_equal_by(
        &alex(),
        &fill(),
        &[EmployeeField::Position, EmployeeField::Department]
    ));
    assert!(!InMemoryEmployeeRepository::is_equal_by(
        &alex(),
        &fill(),
        &EmployeeField::ALL
    ));
}

#[test]
fn clear_resets_store_to_empty() {
    let mut repo = seeded(&[ivan(), maksim()]);
    repo.delete("Ivan");
    repo.clear();

    assert!(repo.is_empty());
    assert_eq!(repo.unique_departments(), Vec::<String>::new());
}

#[test]
fn reference_scenario() {
    let mut repo = InMemoryEmployeeRepository::new();
    repo.create("Ivan", "Test", "QA");
    repo.create("Maksim", "Dev", "Frontend");
    repo.create("Alex", "Dev", "Backend");

    assert_eq!(repo.unique_departments(), vec!["QA", "Frontend", "Backend"]);

    repo.update("Alex", None, Some("Fullstack"));
    assert_eq!(repo.read()[2], Some(Employee::new("Alex", "Dev", "Fullstack")));
}
