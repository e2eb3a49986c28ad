use serde_ini::{encode, ini, EncodeOptions, IniMap, LineEnding, Number, Value};

#[test]
fn test_ini_macro_null() {
    assert_eq!(ini!(null), Value::Null);
}

#[test]
fn test_ini_macro_booleans() {
    assert_eq!(ini!(true), Value::Bool(true));
    assert_eq!(ini!(false), Value::Bool(false));
}

#[test]
fn test_ini_macro_numbers() {
    assert_eq!(ini!(42), Value::Number(Number::Integer(42)));
    assert_eq!(ini!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(ini!(-123), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_ini_macro_strings() {
    assert_eq!(ini!("hello"), Value::String("hello".to_string()));
    assert_eq!(ini!(""), Value::String(String::new()));

    let owned = String::from("owned");
    assert_eq!(ini!(owned), Value::from("owned"));
}

#[test]
fn test_ini_macro_arrays() {
    assert_eq!(ini!([]), Value::Array(vec![]));
    assert_eq!(
        ini!(["a", 1, true, null]),
        Value::Array(vec![
            Value::from("a"),
            Value::from(1),
            Value::Bool(true),
            Value::Null,
        ])
    );
    assert_eq!(ini!(["trailing",]), Value::Array(vec![Value::from("trailing")]));
}

#[test]
fn test_ini_macro_sections() {
    assert_eq!(ini!({}), Value::Section(IniMap::new()));

    let value = ini!({
        "owner": "ops",
        "database": {
            "host": "db.local",
            "replicas": ["r1", "r2"],
        },
    });

    let section = value.as_section().unwrap();
    assert_eq!(section.len(), 2);
    assert_eq!(section.get("owner"), Some(&Value::from("ops")));
    assert_eq!(
        value.get("database").and_then(|db| db.get("replicas")),
        Some(&Value::from(vec!["r1", "r2"]))
    );
}

#[test]
fn test_ini_macro_key_order() {
    let value = ini!({ "zeta": 1, "alpha": 2, "mid": 3 });
    let keys: Vec<&str> = value
        .as_section()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_ini_macro_feeds_encoder() {
    let value = ini!({
        "user": { "name": "Ada", "email": "ada@example.com" }
    });

    let text = encode(
        value.as_section().unwrap(),
        EncodeOptions::new().with_line_ending(LineEnding::Lf),
    )
    .unwrap();
    assert_eq!(text, "[user]\nname=Ada\nemail=ada@example.com\n");
}
