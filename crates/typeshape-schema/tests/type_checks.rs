//! End-to-end behaviour of compiled schemas: kind checks, unions, optional
//! and nullable properties, defaults, nesting, and custom initializers.

use typeshape_schema::{
    define_schema, union, with_default, with_default_fn, BuildError, ClassTag, FunctionValue,
    Record, SchemaDefinition, Symbol, Value, ARRAY, BOOLEAN, FUNCTION, NULL, NUMBER, STRING,
    SYMBOL, UNDEFINED,
};

fn input() -> Record {
    Record::new()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn sets_the_given_properties() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza")
            .property("pineapple", BOOLEAN)
            .property("topping", STRING),
    )
    .unwrap();

    let hawaiian = pizza
        .build(&input().with("pineapple", true).with("topping", "cheese"))
        .unwrap();

    assert!(hawaiian.is_instance_of(&pizza));
    assert_eq!(hawaiian.get("pineapple"), Some(&Value::from(true)));
    assert_eq!(hawaiian.get("topping"), Some(&Value::from("cheese")));
}

#[test]
fn omits_additional_given_properties() {
    let pizza =
        define_schema(SchemaDefinition::new("Pizza").property("pineapple", BOOLEAN)).unwrap();

    let hawaiian = pizza
        .build(&input().with("pineapple", true).with("extra", "cheese"))
        .unwrap();

    assert_eq!(hawaiian.get("pineapple"), Some(&Value::from(true)));
    assert!(hawaiian.get("extra").is_none());
}

#[test]
fn missing_required_property_is_reported() {
    let pizza = define_schema(SchemaDefinition::new("Pizza").property("topping", STRING)).unwrap();

    let err = pizza.build_empty().unwrap_err();
    assert!(err.to_string().contains("Required property"));
    assert_eq!(err.property(), Some("topping"));
}

#[test]
fn wrong_type_is_reported() {
    let pizza =
        define_schema(SchemaDefinition::new("Pizza").property("pineapple", BOOLEAN)).unwrap();

    let err = pizza.build(&input().with("pineapple", "no thanks")).unwrap_err();
    assert!(err.is_invalid_type());
    assert!(err.to_string().contains("invalid type"));
}

// =============================================================================
// Kind checks
// =============================================================================

fn assert_kind_check(decl: typeshape_schema::TypeDecl, bad: Vec<Value>, good: Value) {
    let pizza = define_schema(SchemaDefinition::new("Pizza").property("field", decl)).unwrap();
    for value in bad {
        let err = pizza.build(&input().with("field", value.clone())).unwrap_err();
        assert!(err.is_invalid_type(), "{value:?} should be rejected");
    }
    assert!(pizza.build(&input().with("field", good)).is_ok());
}

#[test]
fn checks_booleans() {
    assert_kind_check(BOOLEAN, vec![Value::from("yes"), Value::from(1)], Value::from(true));
}

#[test]
fn checks_strings() {
    assert_kind_check(STRING, vec![Value::from(true)], Value::from("cheese"));
}

#[test]
fn checks_numbers() {
    assert_kind_check(NUMBER, vec![Value::from("9.99")], Value::from(9.99));
}

#[test]
fn checks_functions() {
    assert_kind_check(
        FUNCTION,
        vec![Value::from(false)],
        Value::from(FunctionValue::new(|_| Value::Null)),
    );
}

#[test]
fn checks_arrays() {
    assert_kind_check(
        ARRAY,
        vec![
            Value::from("Dough, Tomato sauce"),
            Value::from(Record::new().with("dough", true)),
        ],
        Value::from(vec!["Dough", "Tomato sauce"]),
    );
}

#[test]
fn checks_symbols() {
    assert_kind_check(
        SYMBOL,
        vec![Value::from("I am not a symbol")],
        Value::from(Symbol::new("I am a symbol")),
    );
}

#[test]
fn checks_custom_classes() {
    let money = ClassTag::new("Money");
    let pizza =
        define_schema(SchemaDefinition::new("Pizza").property("price", money.clone())).unwrap();

    assert!(pizza.build(&input().with("price", 6.99)).unwrap_err().is_invalid_type());
    assert!(pizza
        .build(&input().with("price", Record::tagged(money)))
        .is_ok());
}

#[test]
fn checks_nested_schemas() {
    let money = define_schema(SchemaDefinition::new("Money").property("value", NUMBER)).unwrap();
    let pizza = define_schema(SchemaDefinition::new("Pizza").property("price", &money)).unwrap();

    assert!(pizza.build(&input().with("price", 16.99)).unwrap_err().is_invalid_type());

    let price = money.build(&input().with("value", 6.99)).unwrap();
    assert!(pizza.build(&input().with("price", price)).is_ok());

    // The nested build itself is validated first.
    assert!(money.build(&input().with("value", "6.99")).unwrap_err().is_invalid_type());
}

#[test]
fn nested_schemas_reject_lookalikes() {
    let money = define_schema(SchemaDefinition::new("Money").property("value", NUMBER)).unwrap();
    let coin = define_schema(SchemaDefinition::new("Money").property("value", NUMBER)).unwrap();
    let pizza = define_schema(SchemaDefinition::new("Pizza").property("price", &money)).unwrap();

    let lookalike = coin.build(&input().with("value", 6.99)).unwrap();
    let plain = Record::new().with("value", 6.99);

    let err = pizza.build(&input().with("price", lookalike)).unwrap_err();
    assert!(err.is_invalid_type());
    assert!(pizza.build(&input().with("price", plain)).unwrap_err().is_invalid_type());
}

// =============================================================================
// Unions
// =============================================================================

#[test]
fn allows_multiple_types() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza").property("price", union([NUMBER, STRING])),
    )
    .unwrap();

    assert!(pizza.build(&input().with("price", "7.99")).is_ok());
    assert!(pizza.build(&input().with("price", 7.99)).is_ok());
    assert!(pizza.build(&input().with("price", false)).is_err());
}

#[test]
fn allows_nullable_types() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza").property("size", union([STRING, NULL])),
    )
    .unwrap();

    assert!(pizza.build(&input().with("size", Value::Null)).is_ok());
    assert!(pizza.build(&input().with("size", "XL")).is_ok());
    assert!(pizza.build(&input().with("size", 100)).unwrap_err().is_invalid_type());
    assert!(pizza.build_empty().unwrap_err().is_missing());
}

#[test]
fn allows_optional_types_via_undefined() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza").property("topping", union([STRING, UNDEFINED])),
    )
    .unwrap();

    assert!(pizza.build_empty().is_ok());
    assert!(pizza.build(&input().with("topping", "tomatoes")).is_ok());
    assert!(pizza.build(&input().with("topping", false)).is_err());
}

// =============================================================================
// Defaults and initializers
// =============================================================================

#[test]
fn initializer_supplies_defaults_only_when_absent() {
    let money = ClassTag::new("Money");
    let money_of = {
        let money = money.clone();
        move |value: f64| Record::tagged(money.clone()).with("value", value)
    };
    let fallback = money_of.clone();

    let pizza = define_schema(
        SchemaDefinition::new("Pizza")
            .property("price", money)
            .initializer(move |draft, _| {
                draft.set_if_absent("price", fallback(3.99))?;
                Ok(())
            }),
    )
    .unwrap();

    let cheap = pizza.build_empty().unwrap();
    let price = cheap.get("price").and_then(Value::as_record).unwrap();
    assert_eq!(price.get("value"), Some(&Value::from(3.99)));

    let expensive = pizza.build(&input().with("price", money_of(19.99))).unwrap();
    let price = expensive.get("price").and_then(Value::as_record).unwrap();
    assert_eq!(price.get("value"), Some(&Value::from(19.99)));
}

#[test]
fn default_shorthand_for_primitives() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza").property("topping", with_default(STRING, "cheese")),
    )
    .unwrap();

    assert_eq!(
        pizza.build_empty().unwrap().get("topping"),
        Some(&Value::from("cheese"))
    );
    assert!(pizza.build(&input().with("topping", "tomatoes")).is_ok());
    assert!(pizza.build(&input().with("topping", false)).unwrap_err().is_invalid_type());
}

#[test]
fn default_of_wrong_type_fails_only_when_used() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza").property("topping", with_default(STRING, 100)),
    )
    .unwrap();

    assert!(pizza.build_empty().unwrap_err().is_invalid_type());
    assert!(pizza.build(&input().with("topping", "tomatoes")).is_ok());
}

#[test]
fn computed_default_reads_undeclared_input_fields() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza").property(
            "slices",
            with_default_fn(NUMBER, |input| {
                let guests = input.get("guests").and_then(Value::as_f64).unwrap_or(1.0);
                Value::from(guests * 2.0)
            }),
        ),
    )
    .unwrap();

    let party = pizza.build(&input().with("guests", 4.0)).unwrap();
    assert_eq!(party.get("slices"), Some(&Value::from(8.0)));
    assert!(party.get("guests").is_none());

    assert_eq!(
        pizza.build_empty().unwrap().get("slices"),
        Some(&Value::from(2.0))
    );
    let supplied = pizza.build(&input().with("guests", 4.0).with("slices", 3.0)).unwrap();
    assert_eq!(supplied.get("slices"), Some(&Value::from(3.0)));
}

#[test]
fn initializer_reads_undeclared_input_fields() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza")
            .property("price", NUMBER)
            .initializer(|draft, input| {
                let discount = input.get("discount").and_then(Value::as_f64).unwrap_or(0.0);
                if let Some(price) = draft.get("price").and_then(Value::as_f64) {
                    draft.set("price", price - discount)?;
                }
                Ok(())
            }),
    )
    .unwrap();

    let built = pizza.build(&input().with("price", 9.99).with("discount", 2.0)).unwrap();
    let price = built.get("price").and_then(Value::as_f64).unwrap();
    assert!((price - 7.99).abs() < 1e-9);
    assert!(built.get("discount").is_none());

    // Without a price the initializer leaves it absent.
    let err = pizza.build(&input().with("discount", 2.0)).unwrap_err();
    assert_eq!(
        err,
        BuildError::MissingRequiredProperty {
            schema: "Pizza".into(),
            property: "price".into(),
        }
    );
}

#[test]
fn initializer_can_reject_input() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza")
            .property("price", NUMBER)
            .initializer(|draft, _| match draft.get("price").and_then(Value::as_f64) {
                Some(p) if p < 0.0 => Err(typeshape_schema::InitError::Rejected(
                    "price cannot be negative".into(),
                )),
                _ => Ok(()),
            }),
    )
    .unwrap();

    let err = pizza.build(&input().with("price", -1.0)).unwrap_err();
    assert!(matches!(err, BuildError::Initializer { .. }));
    assert!(err.to_string().contains("price cannot be negative"));
}

#[test]
fn repeated_builds_are_identical() {
    let pizza = define_schema(
        SchemaDefinition::new("Pizza")
            .property("price", NUMBER)
            .property("topping", with_default(STRING, "cheese")),
    )
    .unwrap();
    let data = input().with("price", 9.99);

    let first = pizza.build(&data).unwrap();
    for _ in 0..100 {
        assert_eq!(pizza.build(&data).unwrap(), first);
    }
}
