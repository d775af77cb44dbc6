/// Builds a [`Value`](crate::Value) from literal-like syntax.
///
/// Objects become inline tables whose entries keep the written order.
///
/// ```rust
/// use minitoml::{value, Value};
///
/// assert_eq!(value!(true), Value::Bool(true));
/// assert_eq!(value!([1, 2]), Value::Array(vec![Value::Int(1), Value::Int(2)]));
///
/// let point = value!({ "x": 1, "y": [2.5] });
/// let table = point.as_inline_table().unwrap();
/// assert_eq!(table.get_statement("x").map(|s| &s.value), Some(&Value::Int(1)));
/// ```
#[macro_export]
macro_rules! value {
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::InlineTable($crate::NodeCollection::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut nodes = $crate::NodeCollection::new();
        $(
            nodes.push($crate::Declaration::stmt($key, $crate::value!($value)));
        )*
        $crate::Value::InlineTable(nodes)
    }};

    // Anything else goes through `From`.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Declaration, NodeCollection, Value};

    #[test]
    fn test_value_macro_scalars() {
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Int(42));
        assert_eq!(value!(-7), Value::Int(-7));
        assert_eq!(value!(3.5), Value::Float(3.5));
        assert_eq!(value!("hello"), Value::Str("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));
        assert_eq!(
            value!([1, [true, "x"]]),
            Value::Array(vec![
                Value::Int(1),
                Value::Array(vec![Value::Bool(true), Value::from("x")]),
            ])
        );
    }

    #[test]
    fn test_value_macro_inline_tables() {
        assert_eq!(value!({}), Value::InlineTable(NodeCollection::new()));

        let table = value!({
            "name": "Alice",
            "age": 30,
        });
        let expected: NodeCollection = vec![
            Declaration::stmt("name", Value::from("Alice")),
            Declaration::stmt("age", Value::Int(30)),
        ]
        .into();
        assert_eq!(table, Value::InlineTable(expected));
    }
}
