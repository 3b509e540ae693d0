// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! End-to-end decoding tests over realistic ledger mutations

use mutql::{
    decode_mutations, ActionVerb, DecodeError, DecomposeError, NativeValue, OperationDescriptor,
    ParserError, ACTION_SEPARATOR,
};
use serde_json::json;

const ADD_ANIMAL: &str = r#"
    addAnimal(
        id:"9cc720d4-623c-11eb-9c41-5391fa973328",
        input: {
            organization_id: "6fe94056-5bd4-11eb-a9fc-0bb70a7f9c77" ,
            name: "bangu" ,
            type: "dog" ,
            sex: "female" ,
            animal_description: "" ,
            primary_color: "Black" ,
            primary_color_group: "black" ,
            additional_colors: [{name: "Blue" , group: "blue" }] ,
            additional_color_groups_string: ["blue"]
        }
    ) {
        error
    }"#;

const ADD_EVENT: &str = r#"
    addEvent(
        id: "b4de7525-623b-11eb-a0cb-0db0d645b658"
        input: {
            animal_id: "b434d448-623b-11eb-afea-59074c0526d3",
            organization_id: "6fe94056-5bd4-11eb-a9fc-0bb70a7f9c77",
            timestamp: 1611929411261,
            node_created: "Node-2",
            type: "intake",
            nested: {thing: ["intake"]},
            sub_type: "Stray/OTC",
            location_description: "",
            three_legged: false,
            tentacles: null,
            address1: "",
            address2: "",
            city: "", state: "", zipcode: "", geo_location: [0.0, 1.0]}
    ) {
        error
    }"#;

fn arguments_json(descriptor: &OperationDescriptor) -> serde_json::Value {
    NativeValue::Map(descriptor.arguments.clone()).into()
}

#[test]
fn test_single_fragment_with_error_selection() {
    let descriptors =
        decode_mutations(&[r#"addAnimal(id:"X", input:{name:"bangu", type:"dog"}) { error }"#])
            .expect("fragment should decode");

    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].operation, ActionVerb::Add);
    assert_eq!(descriptors[0].typename, "Animal");
    assert_eq!(
        arguments_json(&descriptors[0]),
        json!({"id": "X", "input": {"name": "bangu", "type": "dog"}})
    );
}

#[test]
fn test_scalar_lists_and_nulls() {
    let descriptors = decode_mutations(&[
        r#"addEvent(id:"Y", input:{geo_location:[0.0,1.0], tentacles:null}) { error }"#,
    ])
    .expect("fragment should decode");

    let input = descriptors[0].argument("input").expect("input argument");
    assert_eq!(
        input.get("geo_location"),
        Some(&NativeValue::List(vec![
            NativeValue::Float(0.0),
            NativeValue::Float(1.0)
        ]))
    );
    assert_eq!(input.get("tentacles"), Some(&NativeValue::Null));
}

#[test]
fn test_fragments_decode_in_order_without_cross_talk() {
    let descriptors = decode_mutations(&[ADD_ANIMAL, ADD_EVENT]).expect("fragments should decode");
    assert_eq!(descriptors.len(), 2);

    assert_eq!(descriptors[0].operation, ActionVerb::Add);
    assert_eq!(descriptors[0].typename, "Animal");
    assert_eq!(
        arguments_json(&descriptors[0]),
        json!({
            "id": "9cc720d4-623c-11eb-9c41-5391fa973328",
            "input": {
                "organization_id": "6fe94056-5bd4-11eb-a9fc-0bb70a7f9c77",
                "name": "bangu",
                "type": "dog",
                "sex": "female",
                "animal_description": "",
                "primary_color": "Black",
                "primary_color_group": "black",
                "additional_colors": [{"name": "Blue", "group": "blue"}],
                "additional_color_groups_string": ["blue"]
            }
        })
    );

    assert_eq!(descriptors[1].operation, ActionVerb::Add);
    assert_eq!(descriptors[1].typename, "Event");
    assert_eq!(
        arguments_json(&descriptors[1]),
        json!({
            "id": "b4de7525-623b-11eb-a0cb-0db0d645b658",
            "input": {
                "animal_id": "b434d448-623b-11eb-afea-59074c0526d3",
                "organization_id": "6fe94056-5bd4-11eb-a9fc-0bb70a7f9c77",
                "timestamp": 1611929411261i64,
                "node_created": "Node-2",
                "type": "intake",
                "nested": {"thing": ["intake"]},
                "sub_type": "Stray/OTC",
                "location_description": "",
                "three_legged": false,
                "tentacles": null,
                "address1": "",
                "address2": "",
                "city": "",
                "state": "",
                "zipcode": "",
                "geo_location": [0.0, 1.0]
            }
        })
    );
}

#[test]
fn test_prewrapped_document_matches_bare_fragments() {
    let bare = decode_mutations(&[ADD_ANIMAL, ADD_EVENT]).expect("bare fragments");
    let wrapped_text = format!("mutation m {{ {} {} }}", ADD_ANIMAL, ADD_EVENT);
    let wrapped = decode_mutations(&[wrapped_text]).expect("wrapped document");
    assert_eq!(bare, wrapped);
}

#[test]
fn test_several_prewrapped_fragments_keep_every_field() {
    let descriptors = decode_mutations(&[
        "mutation m { addA(x: 1) { error } }",
        "mutation m { addB(x: 2) error }",
    ])
    .expect("wrapped fragments should decode");

    let decoded: Vec<(String, serde_json::Value)> = descriptors
        .iter()
        .map(|d| (d.field_name(), arguments_json(d)))
        .collect();
    assert_eq!(
        decoded,
        vec![
            ("addA".to_string(), json!({"x": 1})),
            ("addB".to_string(), json!({"x": 2})),
        ]
    );
}

#[test]
fn test_out_of_range_floats_decode_to_infinity() {
    let descriptors =
        decode_mutations(&["addA(x: 1e400, y: -1e400)"]).expect("fragment should decode");

    assert_eq!(descriptors[0].argument("x"), Some(&NativeValue::Float(f64::INFINITY)));
    assert_eq!(
        descriptors[0].argument("y"),
        Some(&NativeValue::Float(f64::NEG_INFINITY))
    );
    assert_eq!(arguments_json(&descriptors[0]), json!({"x": null, "y": null}));
}

#[test]
fn test_arguments_keep_source_order() {
    let descriptors = decode_mutations(&[
        r#"addEvent(type: "intake", id: "Y", input: {zipcode: "", city: "", animal_id: "A"})"#,
    ])
    .expect("fragment should decode");

    let keys: Vec<&str> = descriptors[0].arguments.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["type", "id", "input"]);

    let input = descriptors[0].argument("input").expect("input argument");
    assert_eq!(
        input.to_string(),
        r#"{"zipcode":"","city":"","animal_id":"A"}"#
    );
}

#[test]
fn test_descriptor_count_ignores_error_fields() {
    let descriptors = decode_mutations(&[
        "addA(x: 1)",
        "error",
        "removeB(id: \"1\") { error }",
        "error(reason: \"ignored\")",
        "put_C",
    ])
    .expect("fragments should decode");

    let names: Vec<(ActionVerb, &str)> = descriptors
        .iter()
        .map(|d| (d.operation, d.typename.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            (ActionVerb::Add, "A"),
            (ActionVerb::Remove, "B"),
            (ActionVerb::Put, "C"),
        ]
    );
    assert!(descriptors[2].arguments.is_empty());
}

#[test]
fn test_descriptors_reconstruct_field_names() {
    let fields = [
        "addAnimal",
        "create_Shelter",
        "deleteEvent",
        "onUpdate_Animal",
        "updateOwnerRecord",
        "remove_x",
    ];
    let descriptors = decode_mutations(&fields).expect("fields should decode");
    assert_eq!(descriptors.len(), fields.len());

    for (descriptor, field) in descriptors.iter().zip(fields) {
        let joined = descriptor.field_name();
        let separated = format!(
            "{}{}{}",
            descriptor.operation, ACTION_SEPARATOR, descriptor.typename
        );
        assert!(
            joined == field || separated == field,
            "{:?} does not rebuild {}",
            descriptor,
            field
        );
    }
}

#[test]
fn test_scalar_fidelity() {
    let descriptors = decode_mutations(&[
        r#"updateX(s: "1", i: 1, f: 1.0, b: true, n: null, neg: -7, exp: 1.5e3, e: RED)"#,
    ])
    .expect("fragment should decode");
    let d = &descriptors[0];

    assert_eq!(d.argument("s"), Some(&NativeValue::String("1".to_string())));
    assert_eq!(d.argument("i"), Some(&NativeValue::Int(1)));
    assert_eq!(d.argument("f"), Some(&NativeValue::Float(1.0)));
    assert_eq!(d.argument("b"), Some(&NativeValue::Bool(true)));
    assert_eq!(d.argument("n"), Some(&NativeValue::Null));
    assert_eq!(d.argument("neg"), Some(&NativeValue::Int(-7)));
    assert_eq!(d.argument("exp"), Some(&NativeValue::Float(1500.0)));
    assert_eq!(d.argument("e"), Some(&NativeValue::String("RED".to_string())));
}

#[test]
fn test_classification_of_decoded_operations() {
    let descriptors =
        decode_mutations(&["addA", "putB", "deleteC", "onRemoveD"]).expect("should decode");
    let flags: Vec<(bool, bool, bool, bool)> = descriptors
        .iter()
        .map(|d| {
            (
                d.operation.is_mutation_operation(),
                d.operation.is_object_mutation(),
                d.operation.is_delete(),
                d.operation.is_subscription(),
            )
        })
        .collect();
    assert_eq!(
        flags,
        vec![
            (true, false, false, false),
            (true, true, false, false),
            (true, true, true, false),
            (false, false, false, true),
        ]
    );
}

#[test]
fn test_parse_failure_is_fatal() {
    let result = decode_mutations(&["addA(x: 1)", "addB(x: [1, 2)"]);
    assert!(matches!(result, Err(DecodeError::Syntax(_))));

    let result = decode_mutations(&["addA(x: \"unterminated)"]);
    assert!(matches!(
        result,
        Err(DecodeError::Syntax(ParserError::LexerError(_)))
    ));
}

#[test]
fn test_unknown_action_is_fatal() {
    let result = decode_mutations(&["addA(x: 1)", "archiveB(x: 2)"]);
    assert_eq!(
        result,
        Err(DecodeError::Decompose(DecomposeError::UnknownAction(
            "archiveB".to_string()
        )))
    );
}

#[test]
fn test_wrapped_document_with_other_name_is_rejected() {
    // Not the wrapper marker, so it is wrapped again and `mutation` becomes a field
    let result = decode_mutations(&["mutation other { addA }"]);
    assert_eq!(
        result,
        Err(DecodeError::Decompose(DecomposeError::UnknownAction(
            "mutation".to_string()
        )))
    );
}

#[test]
fn test_error_messages() {
    let err = decode_mutations(&["frobX"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Decomposition error: Operation 'frobX' does not start with a known action verb"
    );

    let err = decode_mutations(&["addX(v: $v)"]).unwrap_err();
    assert_eq!(err.to_string(), "Fold error: Variable $v has no bound value");
}
