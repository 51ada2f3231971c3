//! SQL parameter expander
//!
//! Rewrites named placeholders into the driver's positional convention and
//! collects the values and type kinds for every slot. Array-valued bindings
//! expand into one marker per element at the point of occurrence.

use std::collections::HashMap;

use sqlbind_core::{ColonEscape, NoColonEscape, ParamType, PlaceholderStyle, ScalarType, Value};

use super::scanner::{Placeholder, scan_placeholders_with};
use super::{ExpandError, ExpandResult};

/// Result of rewriting a statement's named placeholders.
///
/// `values[i]` and `types[i]` belong to the *i*-th positional marker of
/// `sql`, counting left to right; the three are always the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// SQL with every named placeholder replaced by positional markers.
    pub sql: String,
    /// Bound values, one per positional marker.
    pub values: Vec<Value>,
    /// Per-slot type kinds, same length as `values`.
    pub types: Vec<ScalarType>,
}

/// Rewrites named placeholders into anonymous `?` markers.
///
/// Scans `sql` for `:name` occurrences and substitutes each with positional
/// markers: a binding whose value is [`Value::Array`] contributes one marker
/// per element, joined by `", "`; any other binding contributes exactly one.
/// A name used several times gets fresh slots at every occurrence, each
/// carrying its own copy of the bound value.
///
/// The slot kind comes from the type hint for the name: an array hint
/// contributes its element kind, a scalar hint contributes itself, and a
/// missing hint falls back to [`ScalarType::Unspecified`].
///
/// # Errors
///
/// [`ExpandError::MissingParameter`] if a scanned name has no binding,
/// [`ExpandError::EmptyArrayParameter`] if an array binding has no elements,
/// and [`ExpandError::MalformedPlaceholder`] from the scan itself. No
/// partial result is ever produced.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use sqlbind_core::{ParamType, ScalarType, Value};
/// use sqlbind_query::parameters::expand_named;
///
/// let mut params = HashMap::new();
/// params.insert("foo".to_string(), Value::Int64(1));
/// params.insert(
///     "bar".to_string(),
///     Value::Array(vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)]),
/// );
/// let mut types = HashMap::new();
/// types.insert("foo".to_string(), ParamType::Scalar(ScalarType::Integer));
/// types.insert("bar".to_string(), ParamType::Array(ScalarType::Integer));
///
/// let expansion = expand_named(
///     "SELECT * FROM t WHERE foo = :foo AND bar IN (:bar)",
///     &params,
///     &types,
/// )
/// .unwrap();
///
/// assert_eq!(expansion.sql, "SELECT * FROM t WHERE foo = ? AND bar IN (?, ?, ?)");
/// assert_eq!(expansion.values.len(), 4);
/// assert_eq!(expansion.types, vec![ScalarType::Integer; 4]);
/// ```
pub fn expand_named(
    sql: &str,
    params: &HashMap<String, Value>,
    types: &HashMap<String, ParamType>,
) -> ExpandResult<Expansion> {
    expand_named_with(
        sql,
        params,
        types,
        PlaceholderStyle::QuestionMark,
        &NoColonEscape,
    )
}

/// Rewrites named placeholders with an explicit style and escape hook.
///
/// Like [`expand_named`], but emitting the given positional convention
/// (`?` or `$1, $2, ...`) and honoring a driver-specific literal-colon
/// escape during the scan.
pub fn expand_named_with(
    sql: &str,
    params: &HashMap<String, Value>,
    types: &HashMap<String, ParamType>,
    style: PlaceholderStyle,
    escape: &dyn ColonEscape,
) -> ExpandResult<Expansion> {
    let placeholders = scan_placeholders_with(sql, escape)?;
    expand_placeholders(sql, &placeholders, params, types, style)
}

/// Expands an already-scanned occurrence list.
///
/// The occurrences must be in order of appearance with offsets into `sql`,
/// as produced by [`scan_placeholders`](super::scan_placeholders). Output is
/// assembled by appending the untouched slices between occurrence
/// boundaries to a fresh buffer, so earlier expansions can never shift the
/// offsets of later ones.
pub fn expand_placeholders(
    sql: &str,
    placeholders: &[Placeholder],
    params: &HashMap<String, Value>,
    types: &HashMap<String, ParamType>,
    style: PlaceholderStyle,
) -> ExpandResult<Expansion> {
    let mut out = String::with_capacity(sql.len());
    let mut values: Vec<Value> = Vec::with_capacity(placeholders.len());
    let mut slot_types: Vec<ScalarType> = Vec::with_capacity(placeholders.len());
    let mut last_end = 0;
    let mut slot = 0usize;

    for placeholder in placeholders {
        let value = params
            .get(&placeholder.name)
            .ok_or_else(|| ExpandError::MissingParameter(placeholder.name.clone()))?;
        let slot_type = types
            .get(&placeholder.name)
            .map(ParamType::element_type)
            .unwrap_or(ScalarType::Unspecified);

        out.push_str(&sql[last_end..placeholder.start]);

        match value {
            Value::Array(items) => {
                if items.is_empty() {
                    return Err(ExpandError::EmptyArrayParameter(placeholder.name.clone()));
                }
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    slot += 1;
                    style.push_marker(&mut out, slot);
                    values.push(item.clone());
                    slot_types.push(slot_type);
                }
            }
            scalar => {
                slot += 1;
                style.push_marker(&mut out, slot);
                values.push(scalar.clone());
                slot_types.push(slot_type);
            }
        }

        last_end = placeholder.end;
    }

    out.push_str(&sql[last_end..]);

    debug_assert_eq!(values.len(), slot_types.len());
    Ok(Expansion {
        sql: out,
        values,
        types: slot_types,
    })
}
