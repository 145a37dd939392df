//! Behaviour every generated record shares, checked on real MediaLive shapes.

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use medialive_models::audio::{AudioPidSelection, RemixSettings};
use medialive_models::captions::{BurnInAlignment, BurnInDestinationSettings};
use medialive_models::containers::{DvbSdtOutputSdt, DvbSdtSettings, M2tsSettings};
use medialive_models::input_device::InputDeviceNetworkSettings;
use medialive_models::video::H264Settings;
use medialive_models::{
    AudioLanguageSelection, AudioLanguageSelectionPolicy, AudioSelector, AudioSelectorSettings,
    CaptionDestinationSettings, Input, InputDeviceIpScheme, InputLocation, Shape,
};

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_new_records_have_every_field_absent() {
    let burn_in = BurnInDestinationSettings::new();
    assert!(burn_in.is_empty());
    assert!(burn_in.alignment.is_none());
    assert!(burn_in.font.is_none());
    assert!(burn_in.font_size.is_none());
    assert!(burn_in.x_position.is_none());

    assert!(M2tsSettings::default().is_empty());
    assert!(H264Settings::new().is_empty());
    assert!(Input::new().is_empty());
}

#[test]
fn test_set_then_get_for_each_field_kind() {
    let mut tags = BTreeMap::new();
    tags.insert("env".to_string(), "prod".to_string());

    let input = Input::new()
        .with_name("studio")
        .with_attached_channels(vec!["1".to_string()])
        .with_tags(tags.clone());
    assert_eq!(input.name.as_deref(), Some("studio"));
    assert_eq!(input.attached_channels, Some(vec!["1".to_string()]));
    assert_eq!(input.tags, Some(tags));

    let h264 = H264Settings::new()
        .with_bitrate(5_000_000)
        .with_framerate_numerator(30000)
        .with_buf_fill_pct(90);
    assert_eq!(h264.bitrate, Some(5_000_000));

    let sdt = DvbSdtSettings::new()
        .with_output_sdt(DvbSdtOutputSdt::SdtFollowIfPresent)
        .with_rep_interval(1000);
    assert_eq!(sdt.output_sdt, Some(DvbSdtOutputSdt::SdtFollowIfPresent));

    let burn_in = BurnInDestinationSettings::new()
        .with_font(InputLocation::new().with_uri("s3://fonts/arial.ttf"))
        .with_font_size("auto");
    assert_eq!(
        burn_in.font.as_ref().and_then(|font| font.uri.as_deref()),
        Some("s3://fonts/arial.ttf")
    );
}

#[test]
fn test_chaining_matches_field_assignment() {
    let chained = RemixSettings::new().with_channels_in(2).with_channels_out(2);

    let mut assigned = RemixSettings::new();
    assigned.channels_in = Some(2);
    assigned.channels_out = Some(2);

    assert_eq!(chained, assigned);

    assigned.channels_out = None;
    assert_ne!(chained, assigned);
}

#[test]
fn test_equality_is_reflexive_and_symmetric() {
    let a = AudioPidSelection::new().with_pid(482);
    let b = AudioPidSelection::new().with_pid(482);
    let absent = AudioPidSelection::new();

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, absent);
    assert_ne!(absent, a);
}

#[test]
fn test_equal_records_hash_equal() {
    let a = AudioSelector::new()
        .with_name("english")
        .with_selector_settings(AudioPidSelection::new().with_pid(482));
    let b = AudioSelector::new()
        .with_selector_settings(AudioSelectorSettings::from(AudioPidSelection::new().with_pid(482)))
        .with_name("english");

    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());
    assert_eq!(std_hash(&a), std_hash(&b));
}

#[test]
fn test_enum_and_string_mutators_agree() {
    let from_enum = AudioLanguageSelection::new()
        .with_language_code("eng")
        .with_language_selection_policy(AudioLanguageSelectionPolicy::Strict);
    let from_string = AudioLanguageSelection::new()
        .with_language_code("eng")
        .with_language_selection_policy("STRICT");

    assert_eq!(from_enum, from_string);
    assert_eq!(from_enum.hash_code(), from_string.hash_code());
    assert_eq!(
        from_string.language_selection_policy.as_ref().map(|policy| policy.as_str()),
        Some("STRICT")
    );
    assert!(from_enum
        .to_string()
        .contains("LanguageCode: eng,LanguageSelectionPolicy: STRICT"));

    let network = InputDeviceNetworkSettings::new().with_ip_scheme("DHCP");
    assert_eq!(network.ip_scheme, Some(InputDeviceIpScheme::Dhcp));
}

#[test]
fn test_sequence_assignment_copies_in() {
    let mut channels = vec!["1".to_string(), "2".to_string()];
    let input = Input::new().with_attached_channels(channels.clone());
    channels.push("3".to_string());
    channels[0] = "changed".to_string();

    assert_eq!(
        input.attached_channels,
        Some(vec!["1".to_string(), "2".to_string()])
    );
}

#[test]
fn test_rendering_lists_exactly_populated_fields() {
    let burn_in = BurnInDestinationSettings::new()
        .with_alignment(BurnInAlignment::Centered)
        .with_font_opacity(255);
    assert_eq!(burn_in.to_string(), "{Alignment: CENTERED,FontOpacity: 255}");

    let destination = CaptionDestinationSettings::from(burn_in);
    assert_eq!(
        destination.to_string(),
        "{BurnInDestinationSettings: {Alignment: CENTERED,FontOpacity: 255}}"
    );

    assert_eq!(M2tsSettings::new().to_string(), "{}");
}

#[test]
fn test_unknown_enum_values_survive_json() {
    let json = r#"{"ipScheme":"IPV6_SLAAC","gateway":"10.0.0.1"}"#;
    let network = InputDeviceNetworkSettings::from_json(json).unwrap();
    let scheme = network.ip_scheme.clone().unwrap();
    assert!(scheme.is_unknown());
    assert_eq!(scheme.as_str(), "IPV6_SLAAC");
    assert_eq!(network.to_json().unwrap(), r#"{"gateway":"10.0.0.1","ipScheme":"IPV6_SLAAC"}"#);
}

#[test]
fn test_json_schema_uses_wire_member_names() {
    let schema = serde_json::to_value(schemars::schema_for!(AudioLanguageSelection)).unwrap();
    let properties = schema["properties"].as_object().unwrap();
    assert!(properties.contains_key("languageCode"));
    assert!(properties.contains_key("languageSelectionPolicy"));
    assert!(schema.get("required").is_none());
}
