//! End-to-end checks of the box column engine through its public API.

use calc_core::calculations::box_column::{
    area, calculate, calculate_many, classify, elastic_buckling_stress, BoxColumnInput, BoxSection,
    MemberProperties,
};
use calc_core::calculations::{Axis, CapacityOutcome, SectionClassification};
use calc_core::materials::{resolve_yield_stress, SteelGrade};
use calc_core::CalcError;

fn reference_input() -> BoxColumnInput {
    BoxColumnInput {
        label: "C-1".to_string(),
        section: BoxSection::new(4.0, 10.0, 0.5),
        material: SteelGrade::A36,
        member: MemberProperties {
            k_x: 1.0,
            k_y: 1.0,
            clear_height_m: 3.0,
            elastic_modulus_ksi: 29000.0,
            phi: 0.90,
        },
    }
}

#[test]
fn test_reference_column_capacities() {
    let outcome = calculate(&reference_input()).unwrap();
    let result = outcome.applicable().expect("4x10x1/2 A36 is compact");

    assert!((result.x.area_in2 - 13.0).abs() < 1e-12);
    assert!((result.x.radius_of_gyration_in - 3.4090753690399502).abs() < 1e-9);
    assert!((result.y.radius_of_gyration_in - 1.5952654308521184).abs() < 1e-9);
    assert!((result.x.capacity_kips - 395.41).abs() < 0.01);
    assert!((result.y.capacity_kips - 315.62).abs() < 0.01);
    assert_eq!(result.governing_axis, Axis::Y);
    assert!((result.governing_capacity_kips - 315.62).abs() < 0.01);
    assert_eq!(result.axis(Axis::X), &result.x);
}

#[test]
fn test_governing_is_minimum_of_axes() {
    // Square section, stiffer bracing about y: x governs
    let mut input = reference_input();
    input.section = BoxSection::new(8.0, 8.0, 0.5);
    input.member.k_y = 0.5;

    let outcome = calculate(&input).unwrap();
    let result = outcome.applicable().unwrap();
    assert_eq!(result.governing_axis, Axis::X);
    assert_eq!(
        result.governing_capacity_kips,
        result.x.capacity_kips.min(result.y.capacity_kips)
    );
}

#[test]
fn test_slender_section_is_not_applicable() {
    let mut input = reference_input();
    input.section.wall_thickness_in = 0.125;

    match calculate(&input).unwrap() {
        CapacityOutcome::NotApplicable(check) => {
            assert_eq!(check.classification, SectionClassification::Slender);
            assert_eq!(
                check.message(),
                "Section with slender walls. Compression capacity NOT available with this app"
            );
        }
        CapacityOutcome::Applicable(_) => panic!("expected NotApplicable"),
    }
}

#[test]
fn test_classification_reference_cases() {
    let compact = classify(&BoxSection::new(4.0, 10.0, 0.5), 29000.0, 36.0).unwrap();
    assert_eq!(compact.classification, SectionClassification::Compact);
    assert_eq!(
        compact.message(),
        "Section without slender walls. Compression capacity available with this app"
    );

    let slender = classify(&BoxSection::new(4.0, 10.0, 0.125), 29000.0, 36.0).unwrap();
    assert_eq!(slender.classification, SectionClassification::Slender);
}

#[test]
fn test_higher_grade_can_turn_walls_slender() {
    // d1/t = 10.5/0.25 = 42: under 42.29 for A36, over 35.88 for A572 Gr50
    let section = BoxSection::new(6.0, 11.0, 0.25);
    let a36 = classify(&section, 29000.0, 36.0).unwrap();
    let gr50 = classify(&section, 29000.0, 50.0).unwrap();
    assert_eq!(a36.classification, SectionClassification::Compact);
    assert_eq!(gr50.classification, SectionClassification::Slender);
}

#[test]
fn test_material_resolver() {
    assert_eq!(resolve_yield_stress("ASTM A36").unwrap(), 36.0);
    assert_eq!(resolve_yield_stress("ASTM A572_Gr50").unwrap(), 50.0);
    assert_eq!(resolve_yield_stress("ASTM A500_GrB_46").unwrap(), 46.0);
    assert_eq!(
        resolve_yield_stress("ASTM A913").unwrap_err(),
        CalcError::unknown_material("ASTM A913")
    );
}

#[test]
fn test_invalid_geometry_surfaces_without_partial_results() {
    let mut input = reference_input();
    input.section.wall_thickness_in = 2.0;
    let err = calculate(&input).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_GEOMETRY");

    assert!(area(&BoxSection::new(4.0, 10.0, 0.0)).is_err());
    assert!(elastic_buckling_stress(0.0, 29000.0).is_err());
}

#[test]
fn test_json_input_with_unknown_material_is_rejected() {
    let json = r#"{
        "base_in": 4.0, "depth_in": 10.0, "wall_thickness_in": 0.5,
        "material": "ASTM A992",
        "k_x": 1.0, "k_y": 1.0, "clear_height_m": 3.0,
        "elastic_modulus_ksi": 29000.0, "phi": 0.9
    }"#;
    let err = serde_json::from_str::<BoxColumnInput>(json).unwrap_err();
    assert!(err.to_string().contains("Unknown material"));
}

#[test]
fn test_json_input_without_label_defaults_to_empty() {
    let json = r#"{
        "base_in": 4.0, "depth_in": 10.0, "wall_thickness_in": 0.5,
        "material": "A36",
        "k_x": 1.0, "k_y": 1.0, "clear_height_m": 3.0,
        "elastic_modulus_ksi": 29000.0, "phi": 0.9
    }"#;
    let input: BoxColumnInput = serde_json::from_str(json).unwrap();
    assert!(input.label.is_empty());
    assert_eq!(input, BoxColumnInput { label: String::new(), ..reference_input() });
}

#[test]
fn test_batch_preserves_order_and_matches_single() {
    let mut slender = reference_input();
    slender.section.wall_thickness_in = 0.125;
    let mut invalid = reference_input();
    invalid.member.phi = 0.0;

    let inputs = vec![reference_input(), slender.clone(), invalid.clone()];
    let results = calculate_many(&inputs);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0], calculate(&inputs[0]));
    assert!(!results[1].as_ref().unwrap().is_applicable());
    assert_eq!(results[2].as_ref().unwrap_err().error_code(), "INVALID_INPUT");
}

#[test]
fn test_pipeline_is_idempotent() {
    let input = reference_input();
    let first = serde_json::to_string(&calculate(&input).unwrap()).unwrap();
    let second = serde_json::to_string(&calculate(&input).unwrap()).unwrap();
    assert_eq!(first, second);
}
