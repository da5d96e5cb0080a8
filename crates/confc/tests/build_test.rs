//! End-to-end builds over fabricated parser output.

use confc::ir::{BasicType, TimeUnit, Type};
use confc::{BuildError, BuildOptions, ConfigValue, ModelBuilder, Warning};

fn build(root: &ConfigValue) -> confc::ModelBuildResult {
    ModelBuilder::new(BuildOptions::default())
        .build(root.as_config().unwrap())
        .unwrap()
}

fn build_err(root: &ConfigValue) -> BuildError {
    ModelBuilder::new(BuildOptions::default())
        .build(root.as_config().unwrap())
        .unwrap_err()
}

#[test]
fn primitives_and_optionality() {
    let root = ConfigValue::object([
        ("a", ConfigValue::string("int")),
        ("b", ConfigValue::string("string | hello")),
        ("c", ConfigValue::number(42)),
        ("d", ConfigValue::boolean(true)),
    ]);
    let result = build(&root);
    let members = &result.object_type.members;

    let a = &members["a"];
    assert_eq!(a.t, Type::Basic(BasicType::Integer));
    assert!(!a.optional);
    assert_eq!(a.default, None);

    let b = &members["b"];
    assert_eq!(b.t, Type::Basic(BasicType::String));
    assert!(b.optional);
    assert_eq!(b.default.as_deref(), Some("hello"));

    let c = &members["c"];
    assert_eq!(c.t, Type::Basic(BasicType::Integer));
    assert!(c.optional);
    assert_eq!(c.default.as_deref(), Some("42"));

    let d = &members["d"];
    assert_eq!(d.t, Type::Basic(BasicType::Boolean));
    assert!(d.optional);
    assert_eq!(d.default.as_deref(), Some("true"));

    assert!(result.warnings.is_empty());
}

#[test]
fn nested_object() {
    let root = ConfigValue::object([(
        "srv",
        ConfigValue::object([
            ("host", ConfigValue::string("string")),
            ("port", ConfigValue::string("int | 8080")),
        ]),
    )]);
    let result = build(&root);

    let srv = &result.object_type.members["srv"];
    assert!(!srv.optional);
    assert_eq!(srv.default, None);
    let Type::Object(srv_obj) = &srv.t else {
        panic!("srv should be an object, got {}", srv.t);
    };

    let host = &srv_obj.members["host"];
    assert_eq!(host.t, Type::Basic(BasicType::String));
    assert!(!host.optional);
    assert_eq!(host.default, None);

    let port = &srv_obj.members["port"];
    assert_eq!(port.t, Type::Basic(BasicType::Integer));
    assert!(port.optional);
    assert_eq!(port.default.as_deref(), Some("8080"));
}

#[test]
fn numeric_narrowing() {
    let root = ConfigValue::object([
        ("small", ConfigValue::number("1")),
        ("big", ConfigValue::number("3000000000")),
        ("frac", ConfigValue::number("1.5")),
    ]);
    let members = build(&root).object_type.members;
    assert_eq!(members["small"].t, Type::Basic(BasicType::Integer));
    assert_eq!(members["big"].t, Type::Basic(BasicType::Long));
    assert_eq!(members["frac"].t, Type::Basic(BasicType::Double));
}

#[test]
fn abstract_parent_and_extends() {
    let root = ConfigValue::object([
        (
            "Animal",
            ConfigValue::object([("name", ConfigValue::string("string"))])
                .with_comments(["@define abstract"]),
        ),
        (
            "Dog",
            ConfigValue::object([("breed", ConfigValue::string("string"))])
                .with_comments(["@define extends Animal"]),
        ),
    ]);
    let result = build(&root);
    let members = &result.object_type.members;

    // the abstract parent is a type definition, not a field
    assert!(!members.contains_key("Animal"));

    let dog = &members["Dog"];
    let Type::Object(dog_obj) = &dog.t else {
        panic!("Dog should stay a concrete object");
    };
    assert_eq!(dog_obj.members.keys().collect::<Vec<_>>(), vec!["breed"]);

    let parents = dog.parent_class_members.as_ref().unwrap();
    assert_eq!(parents.keys().collect::<Vec<_>>(), vec!["name"]);
    assert_eq!(parents["name"].t, Type::Basic(BasicType::String));
    assert!(!parents["name"].optional);
}

#[test]
fn value_resolving_to_abstract_define_is_filtered() {
    let root = ConfigValue::object([
        (
            "Animal",
            ConfigValue::object([("name", ConfigValue::string("string"))])
                .with_comments(["@define abstract"]),
        ),
        ("pet", ConfigValue::string("Animal")),
        ("kept", ConfigValue::string("int")),
    ]);
    let members = build(&root).object_type.members;
    assert!(!members.contains_key("Animal"));
    assert!(!members.contains_key("pet"));
    assert!(members.contains_key("kept"));
}

#[test]
fn define_visible_to_earlier_sibling() {
    // `link` precedes `Conn` lexically; the shared-objects-first reorder
    // makes the define resolvable anyway.
    let root = ConfigValue::object([
        ("link", ConfigValue::string("Conn")),
        (
            "Conn",
            ConfigValue::object([("host", ConfigValue::string("string"))])
                .with_comments(["@define"]),
        ),
    ]);
    let members = build(&root).object_type.members;

    let link = &members["link"];
    let Type::Object(conn) = &link.t else {
        panic!("link should resolve to the Conn object type");
    };
    assert_eq!(conn.members.keys().collect::<Vec<_>>(), vec!["host"]);
    assert!(!link.optional);
    assert_eq!(link.default, None);
}

#[test]
fn enum_define_from_list() {
    let root = ConfigValue::object([
        (
            "Color",
            ConfigValue::list([
                ConfigValue::string("red"),
                ConfigValue::string("green"),
                ConfigValue::string("blue"),
            ])
            .with_comments(["@define enum"]),
        ),
        ("background", ConfigValue::string("Color")),
    ]);
    let result = build(&root);
    let members = &result.object_type.members;

    let Type::Enum(e) = &members["background"].t else {
        panic!("background should resolve to the enum");
    };
    assert_eq!(e.values, vec!["red", "green", "blue"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn multi_element_list_warns_and_uses_first() {
    let root = ConfigValue::object([(
        "xs",
        ConfigValue::list([ConfigValue::string("int"), ConfigValue::string("string")])
            .with_line(3),
    )]);
    let result = build(&root);

    assert_eq!(
        result.object_type.members["xs"].t,
        Type::List(Box::new(Type::Basic(BasicType::Integer)))
    );
    assert_eq!(
        result.warnings,
        vec![Warning::MultElemList {
            line: 3,
            source: "[int,string]".into()
        }]
    );
}

#[test]
fn list_element_marks_are_ignored_with_warnings() {
    let root = ConfigValue::object([
        (
            "opts",
            ConfigValue::list([ConfigValue::string("int?").with_line(9)]).with_line(9),
        ),
        (
            "defs",
            ConfigValue::list([ConfigValue::string("string | x").with_line(4)]).with_line(4),
        ),
    ]);
    let result = build(&root);

    assert_eq!(
        result.object_type.members["opts"].t,
        Type::List(Box::new(Type::Basic(BasicType::Integer)))
    );
    assert_eq!(
        result.object_type.members["defs"].t,
        Type::List(Box::new(Type::Basic(BasicType::String)))
    );

    // sorted by line: the default-carrying element first (line 4), and a
    // default also implies the optional mark
    assert_eq!(
        result.warnings,
        vec![
            Warning::OptListElem {
                line: 4,
                source: "string | x".into()
            },
            Warning::DefaultListElem {
                line: 4,
                source: "string | x".into()
            },
            Warning::OptListElem {
                line: 9,
                source: "int?".into()
            },
        ]
    );
}

#[test]
fn nested_and_object_lists() {
    let root = ConfigValue::object([
        (
            "matrix",
            ConfigValue::list([ConfigValue::list([ConfigValue::string("int")])]),
        ),
        (
            "servers",
            ConfigValue::list([ConfigValue::object([(
                "host",
                ConfigValue::string("string"),
            )])]),
        ),
    ]);
    let members = build(&root).object_type.members;

    assert_eq!(
        members["matrix"].t,
        Type::List(Box::new(Type::List(Box::new(Type::Basic(
            BasicType::Integer
        )))))
    );
    let Type::List(elem) = &members["servers"].t else {
        panic!("servers should be a list");
    };
    let Type::Object(server) = elem.as_ref() else {
        panic!("servers element should be an object");
    };
    assert_eq!(server.members.keys().collect::<Vec<_>>(), vec!["host"]);
}

#[test]
fn duration_qualifier_and_literals() {
    let root = ConfigValue::object([
        ("timeout", ConfigValue::string("duration : seconds | 5 s")),
        ("poll", ConfigValue::string("10ms")),
        ("buffer", ConfigValue::string("4KiB")),
    ]);
    let members = build(&root).object_type.members;

    let timeout = &members["timeout"];
    assert_eq!(
        timeout.t,
        Type::Basic(BasicType::Duration(TimeUnit::Seconds))
    );
    assert!(timeout.optional);
    assert_eq!(timeout.default.as_deref(), Some("5 s"));

    let poll = &members["poll"];
    assert_eq!(
        poll.t,
        Type::Basic(BasicType::Duration(TimeUnit::Milliseconds))
    );
    assert_eq!(poll.default.as_deref(), Some("10ms"));

    let buffer = &members["buffer"];
    assert_eq!(buffer.t, Type::Basic(BasicType::Size));
    assert_eq!(buffer.default.as_deref(), Some("4KiB"));
}

#[test]
fn unknown_string_becomes_default() {
    let root = ConfigValue::object([("greeting", ConfigValue::string("hello world"))]);
    let members = build(&root).object_type.members;
    let greeting = &members["greeting"];
    assert_eq!(greeting.t, Type::Basic(BasicType::String));
    assert!(greeting.optional);
    assert_eq!(greeting.default.as_deref(), Some("hello world"));
}

#[test]
fn optional_comment() {
    let root = ConfigValue::object([(
        "retries",
        ConfigValue::string("int").with_comments(["@optional"]),
    )]);
    let members = build(&root).object_type.members;
    let retries = &members["retries"];
    assert!(retries.optional);
    assert_eq!(retries.default, None);
    assert_eq!(retries.comments.as_deref(), Some("@optional"));
}

#[test]
fn assume_all_required_overrides_everything() {
    let root = ConfigValue::object([
        ("b", ConfigValue::string("string | hello")),
        ("c", ConfigValue::number(42)),
        ("e", ConfigValue::string("int?").with_comments(["@optional"])),
    ]);
    let result = ModelBuilder::new(BuildOptions {
        assume_all_required: true,
    })
    .build(root.as_config().unwrap())
    .unwrap();

    for (_, ann) in &result.object_type.members {
        assert!(!ann.optional);
        assert_eq!(ann.default, None);
    }
}

#[test]
fn malformed_define_is_fatal() {
    let root = ConfigValue::object([(
        "X",
        ConfigValue::object([("y", ConfigValue::number(1))]).with_comments(["@define wobble"]),
    )]);
    assert!(matches!(
        build_err(&root),
        BuildError::MalformedDefine { .. }
    ));
}

#[test]
fn multiple_defines_are_fatal() {
    let root = ConfigValue::object([(
        "X",
        ConfigValue::object([("y", ConfigValue::number(1))])
            .with_comments(["@define", "@define abstract"]),
    )]);
    let err = build_err(&root);
    assert!(matches!(err, BuildError::MultipleDefines { .. }));
    assert!(err.to_string().contains("multiple @define's for 'X'"));
}

#[test]
fn extends_requires_abstract_parent() {
    let root = ConfigValue::object([
        (
            "Conn",
            ConfigValue::object([("host", ConfigValue::string("string"))])
                .with_comments(["@define"]),
        ),
        (
            "Pool",
            ConfigValue::object([("size", ConfigValue::string("int"))])
                .with_comments(["@define extends Conn"]),
        ),
    ]);
    assert!(matches!(
        build_err(&root),
        BuildError::ExtendsNonAbstract { .. }
    ));

    let root = ConfigValue::object([(
        "Pool",
        ConfigValue::object([("size", ConfigValue::string("int"))])
            .with_comments(["@define extends Ghost"]),
    )]);
    assert!(matches!(build_err(&root), BuildError::UnknownParent { .. }));
}

#[test]
fn empty_list_is_fatal() {
    let root = ConfigValue::object([("xs", ConfigValue::list([]).with_line(7))]);
    assert!(matches!(
        build_err(&root),
        BuildError::EmptyList { line: 7, .. }
    ));
}

#[test]
fn null_is_fatal() {
    let root = ConfigValue::object([("n", ConfigValue::null())]);
    assert!(matches!(build_err(&root), BuildError::UnexpectedNull { .. }));
}

#[test]
fn quoted_names_are_adjusted() {
    let root = ConfigValue::object([
        ("\"some-key\"", ConfigValue::string("int")),
        ("with$dollar", ConfigValue::string("int")),
    ]);
    let members = build(&root).object_type.members;
    assert!(members.contains_key("some-key"));
    assert!(members.contains_key("with$dollar"));
}

#[test]
fn warnings_sorted_by_line() {
    let root = ConfigValue::object([
        (
            "late",
            ConfigValue::list([ConfigValue::number(1), ConfigValue::number(2)]).with_line(9),
        ),
        (
            "early",
            ConfigValue::list([ConfigValue::string("a"), ConfigValue::string("b")]).with_line(2),
        ),
    ]);
    let result = build(&root);
    let lines: Vec<usize> = result.warnings.iter().map(Warning::line).collect();
    assert_eq!(lines, vec![2, 9]);
}

#[test]
fn ir_serializes_for_emitters() {
    let root = ConfigValue::object([(
        "srv",
        ConfigValue::object([("port", ConfigValue::string("int | 8080"))]),
    )]);
    let result = build(&root);

    let json = serde_json::to_value(&result.object_type).unwrap();
    assert_eq!(
        json["members"]["srv"]["t"]["object"]["members"]["port"]["t"]["basic"],
        serde_json::json!("integer")
    );
    assert_eq!(
        json["members"]["srv"]["t"]["object"]["members"]["port"]["default"],
        serde_json::json!("8080")
    );
}
