//! Local search and sort over the currently loaded page of records.
//!
//! Both operate purely on what the last fetch returned - neither asks the
//! server for a filtered or re-sorted page.

use serde_json::Value;
use std::cmp::Ordering;

use crate::registry::ModuleDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Active sort column, if any. Selecting a new column starts ascending;
/// re-selecting the active column flips the direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self { key: None, direction: SortDirection::Asc }
    }
}

impl SortState {
    pub fn toggle(&mut self, column: &str) {
        match &self.key {
            Some(active) if active == column && self.direction == SortDirection::Asc => {
                self.direction = SortDirection::Desc;
            }
            _ => {
                self.key = Some(column.to_string());
                self.direction = SortDirection::Asc;
            }
        }
    }
}

/// True when the lowercased query appears in any configured search field OR
/// any table column of the record.
pub fn matches_query(record: &Value, module: &ModuleDescriptor, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    let field_hit = module.search_fields.iter().any(|name| value_contains(record.get(*name), &needle));
    let column_hit = module
        .table_columns
        .iter()
        .any(|col| value_contains(record.get(col.key), &needle));

    field_hit || column_hit
}

fn value_contains(value: Option<&Value>, needle: &str) -> bool {
    match value {
        Some(v) if !v.is_null() => display_string(v).to_lowercase().contains(needle),
        _ => false,
    }
}

/// String coercion used for search and mixed-type comparison.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Stable in-place sort by one field.
///
/// Missing values and nulls go last when ascending and first when
/// descending, on both sides; the direction flip never applies to them.
pub fn sort_records(records: &mut [Value], key: &str, direction: SortDirection) {
    records.sort_by(|a, b| compare_by_key(a, b, key, direction));
}

fn compare_by_key(a: &Value, b: &Value, key: &str, direction: SortDirection) -> Ordering {
    let av = a.get(key).filter(|v| !v.is_null());
    let bv = b.get(key).filter(|v| !v.is_null());

    match (av, bv) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match direction {
            SortDirection::Asc => Ordering::Greater,
            SortDirection::Desc => Ordering::Less,
        },
        (Some(_), None) => match direction {
            SortDirection::Asc => Ordering::Less,
            SortDirection::Desc => Ordering::Greater,
        },
        (Some(a), Some(b)) => {
            let ord = compare_values(a, b);
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }

    if let (Value::Bool(x), Value::Bool(y)) = (a, b) {
        // true sorts before false ascending
        return y.cmp(x);
    }

    natural_cmp(&display_string(a), &display_string(b))
}

/// Numeric-aware string comparison: runs of digits compare as numbers, so
/// "item2" sorts before "item10".
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ac = a.chars().peekable();
    let mut bc = b.chars().peekable();

    loop {
        match (ac.peek().copied(), bc.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let xn = take_number(&mut ac);
                    let yn = take_number(&mut bc);
                    match xn.cmp(&yn) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    let xl = x.to_lowercase().next().unwrap_or(x);
                    let yl = y.to_lowercase().next().unwrap_or(y);
                    match xl.cmp(&yl) {
                        Ordering::Equal => {
                            ac.next();
                            bc.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars>) -> u128 {
    let mut n: u128 = 0;
    while let Some(c) = chars.peek() {
        if let Some(d) = c.to_digit(10) {
            n = n.saturating_mul(10).saturating_add(d as u128);
            chars.next();
        } else {
            break;
        }
    }
    n
}
