//! Drives the reference machine through its public surface the way the demo does, checking the
//! exact text each step produces.

use machine_profile::{FieldValue, Machine, Outcome, catalog};

fn machine() -> Machine {
    catalog::reference_machine().unwrap()
}

#[test]
fn reference_machine_session() {
    let mut machine = machine();
    let mut lines = Vec::new();

    lines.push(machine.calculate().to_string());
    lines.push(machine.render().to_string());
    lines.push(machine.display().to_string());

    lines.push(machine.read().to_string());
    machine.write("Test!");
    lines.push(machine.read().to_string());

    lines.push(machine.read_memory().to_string());
    machine.write_memory("Test 2!");
    lines.push(machine.read_memory().to_string());

    assert_eq!(
        lines,
        [
            "Calculating stuff",
            "rendering stuff",
            "displaying stuff",
            "None",
            "Test!",
            "None",
            "Test 2!",
        ]
    );
}

#[test]
fn notices_name_their_source() {
    let machine = machine();

    assert_eq!(machine.calculate().source(), "processor");
    assert_eq!(machine.render().source(), "graphics card");
    assert_eq!(machine.display().source(), "monitor");
}

#[test]
fn every_profile_field_is_reachable_from_the_machine() {
    let machine = machine();

    assert_eq!(
        machine.field("cpu_name").unwrap(),
        FieldValue::Text("AMD Ryzen™ 3 1200".to_string())
    );
    assert_eq!(
        machine.field("gpu_name").unwrap(),
        FieldValue::Text("NVIDIA GeForce 8500 GT".to_string())
    );
    assert_eq!(
        machine.field("gpu_overclockable").unwrap(),
        FieldValue::Flag(true)
    );
    assert_eq!(machine.field("monitor_size").unwrap().to_string(), "21.5\"");
    assert_eq!(
        machine.field("ssd_name").unwrap(),
        FieldValue::Text("Kingston A400".to_string())
    );
    assert_eq!(machine.field("ram_size").unwrap().to_string(), "8.0GB");

    assert_eq!(
        machine.field("cpu_cache").unwrap().to_string(),
        "L1 - 384.0KB\nL2 - 2.0MB\nL3 - 8.0MB\n"
    );
}

#[test]
fn typed_and_named_access_agree() {
    let mut machine = machine();

    machine.write("typed");
    machine
        .invoke("write_memory", Some("named".to_string()))
        .unwrap();

    assert_eq!(
        machine.invoke("read", None).unwrap(),
        Outcome::Content(Some("typed".to_string()))
    );
    assert_eq!(machine.read_memory().value(), Some("named"));
    assert_eq!(
        machine.field("ssd_written").unwrap(),
        FieldValue::Text("typed".to_string())
    );
    assert_eq!(
        machine.field("ram_written").unwrap(),
        FieldValue::Text("named".to_string())
    );
}

#[test]
fn slots_overwrite() {
    let mut machine = machine();

    machine.write("first");
    machine.write("second");

    assert_eq!(machine.read().value(), Some("second"));
}

#[test]
fn separate_machines_do_not_share_slots() {
    let mut first = machine();
    let second = machine();

    first.write("Test!");
    first.write_memory("Test 2!");

    assert_eq!(second.read().to_string(), "None");
    assert_eq!(second.read_memory().to_string(), "None");
}

#[test]
fn cloned_machines_do_not_share_slots() {
    let mut original = machine();
    original.write("before clone");

    let mut copy = original.clone();
    copy.write("after clone");

    assert_eq!(original.read().value(), Some("before clone"));
    assert_eq!(copy.read().value(), Some("after clone"));
}

#[test]
fn profile_getters_expose_typed_values() {
    let machine = machine();

    assert_eq!(u32::from(machine.processor().cores()), 4);
    assert_eq!(machine.graphics_card().clock().base_mhz(), 459);
    assert_eq!(machine.monitor().resolution().width(), 1920);
    assert_eq!(machine.solid_state_storage().interface(), "SATA 3.0/2.0");
    assert_eq!(
        machine.random_access_memory().size().to_string(),
        "8.0GB"
    );
}

#[test]
fn data_sheet_field_names_resolve() {
    let machine = machine();

    assert_eq!(
        machine.field("cpu_speed").unwrap().to_string(),
        "3.1 - 3.4 GHz"
    );
    assert_eq!(machine.field("gpu_speed").unwrap().to_string(), "459MHz");
    assert_eq!(
        machine.field("monitor_refreshrate").unwrap().to_string(),
        "60Hz"
    );
}

#[test]
fn numeric_fields_are_measurements() {
    let machine = machine();

    assert_eq!(
        machine.field("cpu_cores").unwrap(),
        FieldValue::Measurement("4 cores".to_string())
    );
    assert_eq!(
        machine.field("cpu_tdp").unwrap(),
        FieldValue::Measurement("65W".to_string())
    );
}
