/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects become sections and keep their key order. Anything that is not
/// `null`, `true`, `false`, an array or an object goes through
/// `Value::from`, so strings, integers and floats work directly.
///
/// ```rust
/// use serde_ini::{ini, Value};
///
/// let doc = ini!({
///     "name": "demo",
///     "tags": ["a", "b"],
///     "server": { "port": 8080 }
/// });
/// assert_eq!(doc.get("name"), Some(&Value::from("demo")));
/// ```
#[macro_export]
macro_rules! ini {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::ini!($elem)),*])
    };

    ({}) => {
        $crate::Value::Section($crate::IniMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut section = $crate::IniMap::new();
        $(
            section.insert($key.to_string(), $crate::ini!($value));
        )*
        $crate::Value::Section(section)
    }};

    ($s:expr) => {
        $crate::Value::from($s)
    };
}
