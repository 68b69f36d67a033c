//! Integration tests for the marshaling engine.
//!
//! These drive the public surface the wrapper functions consume:
//! check / push / array variants, extension chains, and the
//! path-qualified error messages.

use scriptvk::marshal::{
    ChainNode, CheckStruct, PushStruct, check_arg, check_array, check_array_arg, push_array,
    req_array,
};
use scriptvk::structs::{
    BufferCreateInfo, ImageCreateInfo, PipelineShaderStageCreateInfo, SamplerCreateInfo,
    SpecializationInfo,
};
use scriptvk::types::StructureType;
use scriptvk::{EnumRegistry, ErrorKind, Handle, Record, Value, standard_registry};

fn registry() -> EnumRegistry {
    standard_registry().unwrap()
}

fn sampler_record() -> Record {
    Record::new()
        .with("flags", Value::Int(0))
        .with("samples", Value::Int(1))
        .with("mag_filter", Value::Str("linear".into()))
        .with("min_filter", Value::Str("linear".into()))
        .with("address_mode_u", Value::Str("clamp_to_edge".into()))
        .with("max_lod", Value::Float(8.0))
}

fn stage_record(stage: &str) -> Record {
    Record::new()
        .with("stage", Value::Str(stage.into()))
        .with("module", Value::Handle(Handle::from_raw(0x51)))
}

fn spec_info_record(entry_size: i64, data_len: usize) -> Record {
    Record::new()
        .with(
            "map_entries",
            Value::Seq(vec![Value::Record(
                Record::new()
                    .with("constant_id", Value::Int(0))
                    .with("offset", Value::Int(0))
                    .with("size", Value::Int(entry_size)),
            )]),
        )
        .with("data", Value::Bytes(vec![0u8; data_len]))
}

// =============================================================================
// Scenario: sampler with and without the reduction_mode trigger
// =============================================================================

#[test]
fn test_sampler_without_trigger_has_empty_chain() {
    let reg = registry();
    let info = SamplerCreateInfo::check(&Value::Record(sampler_record()), &reg).unwrap();
    assert!(info.chain.is_empty());

    let pushed = info.push(&reg);
    let rec = pushed.as_record().unwrap();
    assert!(!rec.contains("reduction_mode"));
    assert_eq!(rec.get("mag_filter"), Some(&Value::Str("linear".into())));
}

#[test]
fn test_sampler_with_trigger_gains_one_node_and_roundtrips() {
    let reg = registry();
    let input = sampler_record().with("reduction_mode", Value::Str("min".into()));
    let info = SamplerCreateInfo::check(&Value::Record(input), &reg).unwrap();
    assert_eq!(info.chain.len(), 1);
    assert_eq!(
        info.chain[0].stype(),
        StructureType::SamplerReductionModeCreateInfo
    );

    let pushed = info.push(&reg);
    assert_eq!(
        pushed.as_record().unwrap().get("reduction_mode"),
        Some(&Value::Str("min".into()))
    );
}

#[test]
fn test_unrecognized_keys_are_ignored() {
    let reg = registry();
    // `samples` is not a sampler field; checkers only consult known
    // keys.
    let info = SamplerCreateInfo::check(&Value::Record(sampler_record()), &reg).unwrap();
    let pushed = info.push(&reg);
    assert!(!pushed.as_record().unwrap().contains("samples"));
}

// =============================================================================
// Round-trips
// =============================================================================

#[test]
fn test_sampler_roundtrip_preserves_recognized_fields() {
    let reg = registry();
    let info = SamplerCreateInfo::check(&Value::Record(sampler_record()), &reg).unwrap();
    let pushed = info.push(&reg);
    let again = SamplerCreateInfo::check(&pushed, &reg).unwrap();
    assert_eq!(info, again);
}

#[test]
fn test_image_roundtrip_with_chain() {
    let reg = registry();
    let input = Record::new()
        .with("image_type", Value::Str("2d".into()))
        .with("format", Value::Str("r8g8b8a8_unorm".into()))
        .with(
            "extent",
            Value::Record(
                Record::new()
                    .with("width", Value::Int(512))
                    .with("height", Value::Int(512))
                    .with("depth", Value::Int(1)),
            ),
        )
        .with("usage", Value::Int(0x4))
        .with("view_formats", Value::Seq(vec![
            Value::Str("r8g8b8a8_unorm".into()),
            Value::Str("r8g8b8a8_srgb".into()),
        ]));
    let info = ImageCreateInfo::check(&Value::Record(input), &reg).unwrap();
    assert_eq!(info.chain.len(), 1);

    let pushed = info.push(&reg);
    let again = ImageCreateInfo::check(&pushed, &reg).unwrap();
    assert_eq!(info, again);
}

#[test]
fn test_stage_roundtrip_with_specialization() {
    let reg = registry();
    let input = stage_record("fragment")
        .with("name", Value::Str("frag_main".into()))
        .with("specialization_info", Value::Record(spec_info_record(4, 8)));
    let info = PipelineShaderStageCreateInfo::check(&Value::Record(input), &reg).unwrap();
    let spec = info.specialization_info.as_ref().unwrap();
    assert_eq!(spec.data.len(), 8);
    assert_eq!(spec.map_entries.len(), 1);

    let pushed = info.push(&reg);
    let again = PipelineShaderStageCreateInfo::check(&pushed, &reg).unwrap();
    assert_eq!(info, again);
}

// =============================================================================
// Arrays
// =============================================================================

#[test]
fn test_check_array_preserves_count_and_order() {
    let reg = registry();
    let input = Value::Seq(vec![
        Value::Record(stage_record("vertex")),
        Value::Record(stage_record("geometry")),
        Value::Record(stage_record("fragment")),
    ]);
    let stages: Vec<PipelineShaderStageCreateInfo> = check_array(&input, &reg).unwrap();
    assert_eq!(stages.len(), 3);
    assert_eq!(
        stages.iter().map(|s| s.stage).collect::<Vec<_>>(),
        vec![
            scriptvk::types::ShaderStage::Vertex,
            scriptvk::types::ShaderStage::Geometry,
            scriptvk::types::ShaderStage::Fragment,
        ]
    );
}

#[test]
fn test_check_array_reports_failing_index() {
    let reg = registry();
    let input = Value::Seq(vec![
        Value::Record(stage_record("vertex")),
        Value::Record(Record::new().with("stage", Value::Str("vertex".into()))),
    ]);
    let err = check_array::<PipelineShaderStageCreateInfo>(&input, &reg).unwrap_err();
    assert_eq!(err.path(), "1.module");
}

#[test]
fn test_check_array_rejects_non_sequence() {
    let reg = registry();
    let err = check_array::<SamplerCreateInfo>(&Value::Int(1), &reg).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Table { actual: "int" }));
}

#[test]
fn test_push_array_roundtrips() {
    let reg = registry();
    let input = Value::Seq(vec![
        Value::Record(stage_record("vertex")),
        Value::Record(stage_record("fragment")),
    ]);
    let stages: Vec<PipelineShaderStageCreateInfo> = check_array(&input, &reg).unwrap();
    let pushed = push_array(&stages, &reg);
    let again: Vec<PipelineShaderStageCreateInfo> = check_array(&pushed, &reg).unwrap();
    assert_eq!(stages, again);
}

// =============================================================================
// Error paths
// =============================================================================

#[test]
fn test_nested_error_path_through_array_and_struct() {
    let reg = registry();
    // stages[2] carries a specialization blob too small for its one
    // map entry.
    let stages = Value::Seq(vec![
        Value::Record(stage_record("vertex")),
        Value::Record(stage_record("geometry")),
        Value::Record(
            stage_record("fragment")
                .with("specialization_info", Value::Record(spec_info_record(16, 4))),
        ),
    ]);
    let rec = Record::new().with("stages", stages);
    let err = req_array::<PipelineShaderStageCreateInfo>(&rec, "stages", &reg).unwrap_err();
    assert_eq!(err.path(), "stages.2.specialization_info.data");
    assert_eq!(
        err.to_string(),
        "stages.2.specialization_info.data: invalid length"
    );
}

#[test]
fn test_check_arg_stamps_argument_position() {
    let reg = registry();
    let err = check_arg::<SamplerCreateInfo>(&Value::Int(3), 1, &reg).unwrap_err();
    assert_eq!(err.to_string(), "argument #1: expected a table, got int");

    let bad = Value::Record(sampler_record().with("mag_filter", Value::Int(1)));
    let err = check_arg::<SamplerCreateInfo>(&bad, 2, &reg).unwrap_err();
    assert_eq!(
        err.to_string(),
        "argument #2: mag_filter: expected string, got int"
    );
}

#[test]
fn test_check_array_arg_stamps_argument_position() {
    let reg = registry();
    let input = Value::Seq(vec![Value::Int(0)]);
    let err = check_array_arg::<BufferCreateInfo>(&input, 3, &reg).unwrap_err();
    assert_eq!(err.to_string(), "argument #3: 0: expected a table, got int");
}

#[test]
fn test_out_of_range_integer_is_a_range_error() {
    let reg = registry();
    let bad = Value::Record(sampler_record().with("flags", Value::Int(-1)));
    let err = SamplerCreateInfo::check(&bad, &reg).unwrap_err();
    assert_eq!(err.path(), "flags");
    assert!(matches!(err.kind(), ErrorKind::Range { value: -1, .. }));
}

#[test]
fn test_wrong_enum_symbol_is_a_value_error() {
    let reg = registry();
    let bad = Value::Record(sampler_record().with("compare_op", Value::Str("sometimes".into())));
    let err = SamplerCreateInfo::check(&bad, &reg).unwrap_err();
    assert_eq!(err.path(), "compare_op");
    assert!(matches!(err.kind(), ErrorKind::Value { .. }));
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_defaults_for_absent_optional_fields() {
    let reg = registry();
    let info = SamplerCreateInfo::check(&Value::Record(sampler_record()), &reg).unwrap();
    // Absent in the record, documented defaults in the struct.
    assert_eq!(info.mip_lod_bias, 0.0);
    assert_eq!(info.min_lod, 0.0);
    assert!(!info.compare_enable);
    assert_eq!(info.compare_op, scriptvk::types::CompareOp::Never);
    // Present in the record.
    assert_eq!(info.max_lod, 8.0);
    assert_eq!(
        info.address_mode_u,
        scriptvk::types::SamplerAddressMode::ClampToEdge
    );
}

#[test]
fn test_specialization_info_standalone_check() {
    let reg = registry();
    let info = SpecializationInfo::check(&Value::Record(spec_info_record(4, 4)), &reg).unwrap();
    assert_eq!(info.map_entries[0].size, 4);

    let err = SpecializationInfo::check(&Value::Record(spec_info_record(8, 4)), &reg).unwrap_err();
    assert_eq!(err.path(), "data");
    assert!(matches!(err.kind(), ErrorKind::Length));
}
