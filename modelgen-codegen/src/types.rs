//! Scalar type metadata table.
//!
//! Fixed facts about every supported scalar type, as seen from the emitted
//! C# side. Everything emission needs to know about a scalar comes from
//! here: how to declare it, how to initialize it, which `using` it drags
//! in, how to compare it in generated tests.

use modelgen_ir::ScalarType;

/// Emission-relevant facts about one scalar type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeInfo {
    /// Emitted type keyword.
    pub keyword: &'static str,
    /// Default initializer for properties that must not be left
    /// uninitialized. Empty when the type has no mandated default.
    pub default_value: &'static str,
    /// Accessor used to test presence on the nullable form.
    pub null_check: &'static str,
    /// Suffix expression converting a value to text.
    pub to_text: &'static str,
    /// Import the type (or its text conversion) requires.
    pub import: Option<&'static str>,
    /// Whether literal values must be quoted when emitted.
    pub quoted: bool,
    /// Tolerance for equality assertions in generated tests, when exact
    /// comparison is unsound.
    pub tolerance: Option<&'static str>,
}

const INT: TypeInfo = TypeInfo {
    keyword: "int",
    default_value: "0",
    null_check: "HasValue",
    to_text: ".ToString()",
    import: None,
    quoted: false,
    tolerance: None,
};

const BOOL: TypeInfo = TypeInfo {
    keyword: "bool",
    default_value: "false",
    null_check: "HasValue",
    to_text: ".ToString()",
    import: None,
    quoted: false,
    tolerance: None,
};

const TEXT: TypeInfo = TypeInfo {
    keyword: "string",
    default_value: "string.Empty",
    null_check: "Length",
    to_text: "",
    import: None,
    quoted: true,
    tolerance: None,
};

const FLOAT: TypeInfo = TypeInfo {
    keyword: "float",
    default_value: "0f",
    null_check: "HasValue",
    to_text: ".ToString(CultureInfo.InvariantCulture)",
    import: Some("System.Globalization"),
    quoted: false,
    tolerance: Some("0.001f"),
};

const DOUBLE: TypeInfo = TypeInfo {
    keyword: "double",
    default_value: "0d",
    null_check: "HasValue",
    to_text: ".ToString(CultureInfo.InvariantCulture)",
    import: Some("System.Globalization"),
    quoted: false,
    tolerance: Some("0.000001d"),
};

const TIMESTAMP: TypeInfo = TypeInfo {
    keyword: "DateTime",
    default_value: "DateTime.MinValue",
    null_check: "HasValue",
    to_text: ".ToString(\"o\")",
    import: Some("System"),
    quoted: false,
    tolerance: None,
};

/// Look up the metadata for a scalar type.
pub fn type_info(ty: ScalarType) -> &'static TypeInfo {
    match ty {
        ScalarType::Int => &INT,
        ScalarType::Bool => &BOOL,
        ScalarType::Text => &TEXT,
        ScalarType::Float => &FLOAT,
        ScalarType::Double => &DOUBLE,
        ScalarType::Timestamp => &TIMESTAMP,
    }
}
