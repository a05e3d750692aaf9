//! Reflective encoder tests
//!
//! Covers member-table resolution, lineage overrides, collection merging,
//! null handling, and date/time substitution.

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use serde_json::{Value, json};

use halo_core::encode::{
    Capability, CollectionEntries, Describe, Emitted, Encoder, MemberTable,
};
use halo_core::error::EncodeError;

struct Sensor {
    name: String,
    unit: Option<String>,
    sampled_at: chrono::DateTime<Utc>,
    attributes: Vec<(String, Value)>,
}

impl Sensor {
    fn new(name: &str, unit: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            unit: unit.map(str::to_owned),
            sampled_at: Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap(),
            attributes: Vec::new(),
        }
    }
}

fn emit_name(sensor: &Sensor) -> Emitted<'_> {
    Emitted::from(sensor.name.as_str())
}

fn emit_unit(sensor: &Sensor) -> Emitted<'_> {
    Emitted::from(sensor.unit.as_deref())
}

fn emit_sampled_at(sensor: &Sensor) -> Emitted<'_> {
    Emitted::from(sensor.sampled_at)
}

fn emit_attributes(sensor: &Sensor) -> CollectionEntries<'_> {
    sensor
        .attributes
        .iter()
        .map(|(key, value)| (key.clone(), Emitted::Json(value.clone())))
        .collect()
}

impl Describe for Sensor {
    fn table() -> &'static MemberTable<Self> {
        static TABLE: Lazy<MemberTable<Sensor>> = Lazy::new(|| {
            MemberTable::builder()
                .scalar("name", emit_name)
                .scalar("unit", emit_unit)
                .scalar("sampled_at", emit_sampled_at)
                .collection("attributes", emit_attributes)
                .build()
        });
        &TABLE
    }
}

mod scalar_and_collection_members {
    use super::*;

    #[test]
    fn test_entry_count_is_nonnull_scalars_plus_collection_keys() {
        let mut sensor = Sensor::new("probe-1", Some("celsius"));
        sensor.attributes.push(("site".into(), json!("roof")));
        sensor.attributes.push(("floor".into(), json!(3)));

        let object = Encoder::new().encode(&sensor).expect("sensor encodes");
        // 3 non-null scalars + 2 collection keys
        assert_eq!(object.len(), 5);
        assert_eq!(object["name"], json!("probe-1"));
        assert_eq!(object["site"], json!("roof"));
    }

    #[test]
    fn test_null_scalars_are_omitted_by_default() {
        let sensor = Sensor::new("probe-1", None);
        let object = Encoder::new().encode(&sensor).expect("sensor encodes");
        assert!(!object.contains_key("unit"));
    }

    #[test]
    fn test_include_nulls_keeps_null_scalars() {
        let sensor = Sensor::new("probe-1", None);
        let object = Encoder::new()
            .include_nulls(true)
            .encode(&sensor)
            .expect("sensor encodes");
        assert_eq!(object["unit"], Value::Null);
    }

    #[test]
    fn test_timestamps_are_substituted_with_iso_8601_text() {
        let sensor = Sensor::new("probe-1", None);
        let object = Encoder::new().encode(&sensor).expect("sensor encodes");
        assert_eq!(object["sampled_at"], json!("2026-08-06T12:00:00+00:00"));
    }

    #[test]
    fn test_collection_values_keep_nulls() {
        // Null filtering applies to scalar members only.
        let mut sensor = Sensor::new("probe-1", None);
        sensor.attributes.push(("note".into(), Value::Null));
        let object = Encoder::new().encode(&sensor).expect("sensor encodes");
        assert_eq!(object["note"], Value::Null);
    }

    #[test]
    fn test_scalar_member_overrides_same_named_collection_key() {
        let mut sensor = Sensor::new("probe-1", None);
        sensor.attributes.push(("name".into(), json!("shadowed")));
        let object = Encoder::new().encode(&sensor).expect("sensor encodes");
        assert_eq!(object["name"], json!("probe-1"));
    }
}

mod lineage_resolution {
    use super::*;

    struct Device {
        id: u64,
        label: String,
        defaults: Vec<(String, Value)>,
    }

    fn emit_id(device: &Device) -> Emitted<'_> {
        Emitted::from(device.id)
    }

    fn emit_label(device: &Device) -> Emitted<'_> {
        Emitted::from(device.label.as_str())
    }

    fn emit_defaults(device: &Device) -> CollectionEntries<'_> {
        device
            .defaults
            .iter()
            .map(|(key, value)| (key.clone(), Emitted::Json(value.clone())))
            .collect()
    }

    impl Describe for Device {
        fn table() -> &'static MemberTable<Self> {
            static TABLE: Lazy<MemberTable<Device>> = Lazy::new(|| {
                MemberTable::builder()
                    .scalar("id", emit_id)
                    .scalar("label", emit_label)
                    .collection("defaults", emit_defaults)
                    .build()
            });
            &TABLE
        }
    }

    struct Thermometer {
        device: Device,
        scale: String,
        overrides: Vec<(String, Value)>,
    }

    fn emit_scale(thermometer: &Thermometer) -> Emitted<'_> {
        Emitted::from(thermometer.scale.as_str())
    }

    fn emit_derived_label(thermometer: &Thermometer) -> Emitted<'_> {
        Emitted::from(format!("thermo:{}", thermometer.device.label))
    }

    fn emit_overrides(thermometer: &Thermometer) -> CollectionEntries<'_> {
        thermometer
            .overrides
            .iter()
            .map(|(key, value)| (key.clone(), Emitted::Json(value.clone())))
            .collect()
    }

    impl Describe for Thermometer {
        fn table() -> &'static MemberTable<Self> {
            static TABLE: Lazy<MemberTable<Thermometer>> = Lazy::new(|| {
                MemberTable::builder()
                    .scalar("scale", emit_scale)
                    .scalar("label", emit_derived_label)
                    .collection("calibration", emit_overrides)
                    .inherit::<Device>(|thermometer| &thermometer.device)
                    .build()
            });
            &TABLE
        }
    }

    fn thermometer() -> Thermometer {
        Thermometer {
            device: Device {
                id: 7,
                label: "t-7".into(),
                defaults: vec![
                    ("interval".into(), json!(60)),
                    ("precision".into(), json!(2)),
                ],
            },
            scale: "celsius".into(),
            overrides: vec![("interval".into(), json!(5))],
        }
    }

    #[test]
    fn test_base_members_are_inherited() {
        let object = Encoder::new().encode(&thermometer()).expect("encodes");
        assert_eq!(object["id"], json!(7));
        assert_eq!(object["scale"], json!("celsius"));
    }

    #[test]
    fn test_redefined_scalar_uses_the_derived_accessor_once() {
        let object = Encoder::new().encode(&thermometer()).expect("encodes");
        assert_eq!(object["label"], json!("thermo:t-7"));
        assert_eq!(object.keys().filter(|k| *k == "label").count(), 1);
    }

    #[test]
    fn test_derived_collection_key_blocks_inherited_one() {
        let object = Encoder::new().encode(&thermometer()).expect("encodes");
        // "calibration" is registered before the inherited "defaults", so
        // its "interval" entry wins; the base-only "precision" survives.
        assert_eq!(object["interval"], json!(5));
        assert_eq!(object["precision"], json!(2));
    }

    #[test]
    fn test_resolved_table_has_one_entry_per_name() {
        let table = Thermometer::table();
        let mut names: Vec<&str> = table.members().iter().map(|m| m.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), table.members().len());
    }

    #[test]
    fn test_capability_tags_survive_resolution() {
        let table = Thermometer::table();
        let capability_of = |name: &str| {
            table
                .members()
                .iter()
                .find(|m| m.name() == name)
                .map(|m| m.capability())
        };
        assert_eq!(capability_of("label"), Some(Capability::Scalar));
        assert_eq!(capability_of("defaults"), Some(Capability::Collection));
    }
}

mod nesting_and_lowering {
    use super::*;

    struct Reading {
        sensor: Sensor,
        value: i64,
    }

    fn emit_value(reading: &Reading) -> Emitted<'_> {
        Emitted::from(reading.value)
    }

    fn emit_sensor(reading: &Reading) -> Emitted<'_> {
        Emitted::Nested(&reading.sensor)
    }

    impl Describe for Reading {
        fn table() -> &'static MemberTable<Self> {
            static TABLE: Lazy<MemberTable<Reading>> = Lazy::new(|| {
                MemberTable::builder()
                    .scalar("value", emit_value)
                    .scalar("sensor", emit_sensor)
                    .build()
            });
            &TABLE
        }
    }

    #[test]
    fn test_nested_tagged_objects_recurse() {
        let reading = Reading {
            sensor: Sensor::new("probe-2", Some("pascal")),
            value: 1013,
        };
        let object = Encoder::new().encode(&reading).expect("reading encodes");
        assert_eq!(object["value"], json!(1013));
        assert_eq!(object["sensor"]["name"], json!("probe-2"));
        assert_eq!(object["sensor"]["unit"], json!("pascal"));
    }

    #[test]
    fn test_nested_objects_share_the_callers_options() {
        let reading = Reading {
            sensor: Sensor::new("probe-2", None),
            value: 0,
        };
        let object = Encoder::new()
            .include_nulls(true)
            .encode(&reading)
            .expect("reading encodes");
        assert_eq!(object["sensor"]["unit"], Value::Null);
    }

    #[test]
    fn test_non_finite_floats_are_unsupported() {
        let err = Emitted::try_from(f64::NAN).expect_err("NaN has no JSON form");
        assert!(matches!(err, EncodeError::UnsupportedType(_)));
        assert!(Emitted::try_from(1.5).is_ok());
    }

    #[test]
    fn test_serialize_bridge_accepts_plain_data() {
        let emitted = Emitted::from_serialize(&vec![1, 2, 3]).expect("serializable");
        match emitted {
            Emitted::Json(value) => assert_eq!(value, json!([1, 2, 3])),
            _ => panic!("expected a plain JSON value"),
        }
    }

    #[test]
    fn test_compact_and_pretty_text_output() {
        let sensor = Sensor::new("probe-1", None);
        let compact = Encoder::new().to_string(&sensor).expect("encodes");
        assert!(!compact.contains('\n'));

        let pretty = Encoder::new().indent(4).to_string(&sensor).expect("encodes");
        assert!(pretty.contains("\n    \"name\""));
    }
}
