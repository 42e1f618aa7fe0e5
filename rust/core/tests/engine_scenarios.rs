// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end calculation scenarios against the storage schema.

use ashiba_core::{calculate, calculate_checked, RoofShape, ScaffoldInput};

fn base_input() -> ScaffoldInput {
    ScaffoldInput {
        width_ns: 10000,
        width_ew: 8000,
        eaves_n: 500,
        eaves_e: 500,
        eaves_s: 500,
        eaves_w: 500,
        boundary_n: None,
        boundary_e: None,
        boundary_s: None,
        boundary_w: None,
        standard_height: 6000,
        roof_shape: RoofShape::Flat,
        tie_column: true,
        railing_count: 2,
        use_355_ns: 0,
        use_300_ns: 0,
        use_150_ns: 0,
        use_355_ew: 0,
        use_300_ew: 0,
        use_150_ew: 0,
        target_margin_n: Some(900),
        target_margin_e: Some(900),
        target_margin_s: Some(900),
        target_margin_w: Some(900),
    }
}

#[test]
fn flat_roof_with_tie_column_and_targets() {
    let result = calculate(&base_input());

    // spans sit on the 300mm part grid, margins within scoring tolerance
    assert_eq!(result.ns_total_span, 11700);
    assert_eq!(result.ew_total_span, 9900);
    assert_eq!(result.ns_total_span % 300, 0);
    assert_eq!(result.ew_total_span % 300, 0);
    assert_eq!(result.ns_span_structure, "6span, 900");
    assert_eq!(result.ew_span_structure, "5span, 900");
    assert_eq!(result.east_gap, "850 mm");
    assert_eq!(result.west_gap, "850 mm");
    assert_eq!(result.south_gap, "950 mm");
    assert_eq!(result.north_gap, "950 mm");

    // 6000 - 1700 leaves 4300: the 500mm leftover absorbs a stage unit
    assert_eq!(result.num_stages, 2);
    assert_eq!(result.first_layer_height, 2400);
    assert_eq!(
        1700 + result.first_layer_height + (result.num_stages as i64 - 1) * 1900,
        6000
    );
    assert_eq!(result.jack_up_height, 370);
    assert!(result.tie_ok);
    assert!(result.tie_column_used);
    assert_eq!(result.modules_count, 13);
}

#[test]
fn sloped_roof_minimum_clearances() {
    let input = ScaffoldInput {
        width_ns: 5400,
        width_ew: 7200,
        eaves_n: 400,
        eaves_e: 400,
        eaves_s: 400,
        eaves_w: 400,
        standard_height: 8000,
        roof_shape: RoofShape::Sloped,
        tie_column: false,
        railing_count: 0,
        target_margin_n: None,
        target_margin_e: None,
        target_margin_s: None,
        target_margin_w: None,
        ..base_input()
    };
    let result = calculate(&input);

    assert_eq!(result.ns_total_span, 6600);
    assert_eq!(result.ns_span_structure, "3span, 1200");
    assert_eq!(result.ew_total_span, 8400);
    assert_eq!(result.ew_span_structure, "4span, 1200");
    for gap in [
        &result.north_gap,
        &result.south_gap,
        &result.east_gap,
        &result.west_gap,
    ] {
        assert_eq!(gap, "600 mm");
    }

    assert_eq!(result.num_stages, 3);
    assert_eq!(result.first_layer_height, 2300);
    assert_eq!(result.jack_up_height, 400);
    assert_eq!(result.modules_count, 16);
    assert!(result.tie_ok);
    assert!(!result.tie_column_used);
}

#[test]
fn deck_roof_inside_boundaries() {
    let input = ScaffoldInput {
        width_ns: 8000,
        width_ew: 6000,
        eaves_n: 300,
        eaves_e: 300,
        eaves_s: 300,
        eaves_w: 300,
        boundary_n: Some(500),
        boundary_e: Some(800),
        boundary_s: Some(600),
        boundary_w: Some(700),
        standard_height: 4500,
        roof_shape: RoofShape::Deck,
        tie_column: true,
        railing_count: 0,
        target_margin_n: None,
        target_margin_e: None,
        target_margin_s: None,
        target_margin_w: None,
        ..base_input()
    };
    let result = calculate(&input);

    assert_eq!(result.ns_total_span, 9000);
    assert_eq!(result.ns_span_structure, "5span");
    assert_eq!(result.east_gap, "500 mm");
    assert_eq!(result.west_gap, "500 mm");
    // the north boundary caps its side at 440 and the excess moves south
    assert_eq!(result.ew_total_span, 6900);
    assert_eq!(result.ew_span_structure, "3span, 1500");
    assert_eq!(result.south_gap, "460 mm");
    assert_eq!(result.north_gap, "440 mm");
    assert!(460 <= 600 - 60 && 440 <= 500 - 60);

    assert_eq!(result.num_stages, 1);
    assert_eq!(result.first_layer_height, 2700);
    assert_eq!(result.jack_up_height, 195);
    assert_eq!(result.modules_count, 9);
}

#[test]
fn tall_sloped_roof_many_stages() {
    let input = ScaffoldInput {
        width_ns: 12000,
        width_ew: 8000,
        eaves_n: 600,
        eaves_e: 600,
        eaves_s: 600,
        eaves_w: 600,
        standard_height: 12000,
        roof_shape: RoofShape::Sloped,
        tie_column: false,
        railing_count: 4,
        target_margin_n: Some(1000),
        target_margin_e: Some(1000),
        target_margin_s: Some(1000),
        target_margin_w: Some(1000),
        ..base_input()
    };
    let result = calculate(&input);

    assert_eq!(result.ns_total_span, 14100);
    assert_eq!(result.ew_total_span, 9900);
    assert!(result.num_stages > 3);
    assert_eq!(result.num_stages, 5);
    assert_eq!(result.first_layer_height, 2500);
    assert_eq!(
        1900 + result.first_layer_height + (result.num_stages as i64 - 1) * 1900,
        12000
    );
    assert_eq!(result.jack_up_height, 125);
    assert!(result.modules_count > 20);
    assert_eq!(result.modules_count, 25);
}

#[test]
fn specials_and_boundaries_mixed() {
    let input = ScaffoldInput {
        width_ns: 10010,
        width_ew: 9100,
        boundary_n: Some(800),
        boundary_s: Some(800),
        standard_height: 6500,
        railing_count: 1,
        use_150_ns: 1,
        use_300_ns: 1,
        target_margin_n: None,
        target_margin_e: Some(1000),
        target_margin_s: None,
        target_margin_w: None,
        ..base_input()
    };
    let result = calculate(&input);

    // NS: specials ride along and the short west side gets a correction
    assert_eq!(result.ns_total_span, 11550);
    assert_eq!(result.east_gap, "974 mm");
    assert_eq!(result.west_gap, "566 mm(+150)");
    assert_eq!(result.ns_span_structure, "5span, 1500, 600, 300, 150(+150)");

    // EW: both boundaries cap the span but leave room for full clearances
    assert_eq!(result.ew_total_span, 10500);
    assert_eq!(result.ew_span_structure, "5span, 1500");
    assert_eq!(result.south_gap, "700 mm");
    assert_eq!(result.north_gap, "700 mm");

    assert_eq!(result.num_stages, 3);
    assert_eq!(result.first_layer_height, 1000);
    assert_eq!(result.jack_up_height, 395);
    assert_eq!(result.modules_count, 13);
}

#[test]
fn result_serializes_with_storage_field_names() {
    let result = calculate(&base_input());
    let value = serde_json::to_value(&result).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "ns_total_span",
        "ew_total_span",
        "ns_span_structure",
        "ew_span_structure",
        "north_gap",
        "south_gap",
        "east_gap",
        "west_gap",
        "num_stages",
        "modules_count",
        "jack_up_height",
        "first_layer_height",
        "tie_ok",
        "tie_column_used",
    ] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert_eq!(object.len(), 14);
    assert_eq!(value["ns_total_span"], 11700);
    assert_eq!(value["east_gap"], "850 mm");
    assert_eq!(value["tie_ok"], true);
}

#[test]
fn input_accepts_null_and_omitted_optionals() {
    let json = r#"{
        "width_NS": 10000, "width_EW": 8000,
        "eaves_N": 500, "eaves_E": 500, "eaves_S": 500, "eaves_W": 500,
        "boundary_N": null, "boundary_E": 1200,
        "standard_height": 6000, "roof_shape": "flat",
        "tie_column": true, "railing_count": 2,
        "use_355_NS": 0, "use_300_NS": 0, "use_150_NS": 0,
        "use_355_EW": 0, "use_300_EW": 0, "use_150_EW": 0,
        "target_margin_E": 900
    }"#;
    let input: ScaffoldInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.boundary_n, None);
    assert_eq!(input.boundary_e, Some(1200));
    assert_eq!(input.boundary_s, None);
    assert_eq!(input.target_margin_e, Some(900));
    assert_eq!(input.target_margin_n, None);
    assert!(calculate_checked(&input).is_ok());
}

#[test]
fn validation_errors_carry_every_field() {
    let mut input = base_input();
    input.width_ns = -10;
    input.standard_height = 100;
    let err = calculate_checked(&input).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("width_NS"), "got {message}");
    assert!(message.contains("standard_height"), "got {message}");
}
