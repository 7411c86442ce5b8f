use nbgate_domain::capability::CapabilitySet;

#[test]
fn capability_names_resolve() {
    assert_eq!(CapabilitySet::from("rich-display"), CapabilitySet::RICH_DISPLAY);
    assert_eq!(CapabilitySet::from("interactive-map"), CapabilitySet::INTERACTIVE_MAP);
    assert_eq!(CapabilitySet::from("all"), CapabilitySet::ALL);
    assert_eq!(CapabilitySet::from("*"), CapabilitySet::ALL);
    assert_eq!(CapabilitySet::from("unknown"), CapabilitySet::empty());
}

#[test]
fn serializes_as_raw_bits() {
    let set = CapabilitySet::RICH_DISPLAY | CapabilitySet::INTERACTIVE_MAP;

    let json = serde_json::to_value(set).expect("capability serialize");
    assert_eq!(json, serde_json::json!(3));

    let back: CapabilitySet = serde_json::from_value(json).expect("capability deserialize");
    assert_eq!(back, set);
}

#[test]
fn unknown_bits_survive_deserialization() {
    // from_bits_retain keeps bits that future versions may define.
    let set: CapabilitySet = serde_json::from_value(serde_json::json!(0b101)).expect("deserialize");
    assert_eq!(set.bits(), 0b101);
    assert!(set.contains(CapabilitySet::RICH_DISPLAY));
}
