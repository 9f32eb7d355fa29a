//! Shared fixtures for the cross-crate tests.

/// A pair of JSON documents and whether they must hash identically
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub description: &'static str,
    pub lhs: &'static str,
    pub rhs: &'static str,
    pub should_match: bool,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        description: "flat object, keys reordered",
        lhs: r#"{"x": "a", "y": "b"}"#,
        rhs: r#"{"y": "b", "x": "a"}"#,
        should_match: true,
    },
    Scenario {
        description: "different key names",
        lhs: r#"{"x": "a", "y": "b"}"#,
        rhs: r#"{"z": "b", "x": "a"}"#,
        should_match: false,
    },
    Scenario {
        description: "object inside array, keys reordered",
        lhs: r#"[{"x": "a", "y": "b"}]"#,
        rhs: r#"[{"y": "b", "x": "a"}]"#,
        should_match: true,
    },
    Scenario {
        description: "boolean member with extra whitespace",
        lhs: r#"[{"x": false, "y": "b"}]"#,
        rhs: r#"[{"y": "b", "x":    false}]"#,
        should_match: true,
    },
    Scenario {
        description: "numeric member, keys reordered",
        lhs: r#"[{"x": "a", "y": 1}]"#,
        rhs: r#"[{"y": 1, "x": "a"}]"#,
        should_match: true,
    },
    Scenario {
        description: "identical arrays",
        lhs: "[1,2,3,4,5]",
        rhs: "[1,2,3,4,5]",
        should_match: true,
    },
    Scenario {
        description: "exponent and plain decimal",
        lhs: "1.23e1",
        rhs: "12.3",
        should_match: true,
    },
    Scenario {
        description: "mixed members with null",
        lhs: r#"{"x":1,"y":"b","z":null}"#,
        rhs: r#"{"y":"b","z":null,"x":1}"#,
        should_match: true,
    },
    Scenario {
        description: "nested objects with numeric spellings",
        lhs: r#"{"foo":1.23e1,"bar":{"baz":true,"abc":12}}"#,
        rhs: r#"{"bar":{"abc":12,"baz":true},"foo":12.3}"#,
        should_match: true,
    },
    Scenario {
        description: "array order matters",
        lhs: "[1,2]",
        rhs: "[2,1]",
        should_match: false,
    },
    Scenario {
        description: "string versus boolean",
        lhs: r#""true""#,
        rhs: "true",
        should_match: false,
    },
    Scenario {
        description: "boolean versus number",
        lhs: "true",
        rhs: "1",
        should_match: false,
    },
    Scenario {
        description: "nesting depth matters",
        lhs: r#"{"a": {"b": 1}}"#,
        rhs: r#"{"a": {"b": {"b": 1}}}"#,
        should_match: false,
    },
];
