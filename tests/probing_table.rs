use dhash_table::{is_prime, next_prime, Primality, ProbingTable, TableBuilder, TableError};

#[test]
fn demo_scenario() {
    let mut t = ProbingTable::with_capacity(50).expect("allocate");
    t.insert("34", "Mike").unwrap();
    t.insert("56", "Time").unwrap();
    t.insert("104", "Love").unwrap();
    assert_eq!(t.find("34"), Some("Mike"));
    assert_eq!(t.find("999"), None);
    assert_eq!(t.len(), 3);
}

#[test]
fn prime_oracle_scenario() {
    assert_eq!(is_prime(47), Primality::Prime);
    assert_eq!(next_prime(48), Some(53));
    assert_eq!(next_prime(u64::MAX), None);
    assert_eq!(is_prime(1), Primality::Undefined);
    assert_eq!(is_prime(51), Primality::Composite);
}

#[test]
fn forty_keys_trigger_growth() {
    let mut t = ProbingTable::with_capacity(50).unwrap();
    let initial = t.capacity();
    for i in 0..40 {
        t.insert(i.to_string(), format!("value {i}")).unwrap();
    }
    assert!(t.capacity() > initial);
    assert!(is_prime(t.capacity() as u64).is_prime());
    for i in 0..40 {
        assert_eq!(t.find(&i.to_string()), Some(format!("value {i}").as_str()));
    }
}

#[test]
fn upsert_keeps_single_entry() {
    let mut t = ProbingTable::new();
    assert_eq!(t.insert("1", "mattew").unwrap(), None);
    assert_eq!(t.insert("1", "matthew").unwrap().as_deref(), Some("mattew"));
    assert_eq!(t.len(), 1);
    assert_eq!(t.find("1"), Some("matthew"));
}

#[test]
fn delete_absent_key_does_not_change_len() {
    let mut t = ProbingTable::new();
    for (k, v) in [("1", "mattew"), ("2", "john"), ("3", "james"), ("4", "andrew")] {
        t.insert(k, v).unwrap();
    }
    assert_eq!(t.len(), 4);
    assert_eq!(t.delete("5").unwrap(), None);
    assert_eq!(t.len(), 4);
    assert_eq!(t.delete("2").unwrap().as_deref(), Some("john"));
    assert_eq!(t.len(), 3);
    assert_eq!(t.find("2"), None);
}

#[test]
fn builder_validates_thresholds() {
    match ProbingTable::builder().shrink_load_percent(80).build() {
        Err(TableError::InvalidConfig(msg)) => assert!(msg.contains("shrink")),
        other => panic!("unexpected result: {:?}", other),
    }
    let t = TableBuilder::new().initial_capacity(1_000).build().unwrap();
    assert_eq!(t.capacity(), 1_009);
}

#[test]
fn oversized_table_is_rejected() {
    match ProbingTable::with_capacity(usize::MAX) {
        Err(TableError::CapacityOverflow { .. }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn load_bound_holds_during_bulk_insert() {
    let mut t = ProbingTable::new();
    for i in 0..5_000 {
        t.insert(format!("key{i:05}"), "v").unwrap();
        assert!(t.load_percent() <= 70);
    }
    assert_eq!(t.len(), 5_000);
    assert_eq!(t.iter().count(), 5_000);
}
