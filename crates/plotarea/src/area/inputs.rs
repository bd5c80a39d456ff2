//! Triangle entries: calculation method plus the raw values the user typed.
//!
//! Entries are kept as the exact strings entered (or unset) so a project can be
//! saved and reloaded without renormalizing numbers. Each method owns a fixed
//! field set; writing a field the method does not have is rejected.
//!
//! Persisted shape: `{"id": 1, "method": "SSS", "inputs": {"a": "3", "b": "4"}}`.
//! Unset entries are omitted on write; `null` and absent both read as unset.

use serde::de::Error as _;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::geom2::Point;

/// One user-entered value; `None` when never set.
pub type Entry = Option<String>;

/// Errors from the input-update contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("unknown calculation method `{0}`")]
    UnknownMethod(String),
    #[error("method {method} has no input field `{field}`")]
    UnknownField { method: Method, field: String },
}

/// The five ways to specify a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "SSS")]
    Sss,
    #[serde(rename = "SAS")]
    Sas,
    #[serde(rename = "ASA")]
    Asa,
    BaseHeight,
    Coordinates,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Sss,
        Method::Sas,
        Method::Asa,
        Method::BaseHeight,
        Method::Coordinates,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Method::Sss => "SSS",
            Method::Sas => "SAS",
            Method::Asa => "ASA",
            Method::BaseHeight => "BaseHeight",
            Method::Coordinates => "Coordinates",
        }
    }

    /// Persisted field names, in display order.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Method::Sss => &["a", "b", "c"],
            Method::Sas => &["sideA", "sideB", "angleC"],
            Method::Asa => &["angleA", "angleB", "sideC"],
            Method::BaseHeight => &["base", "height"],
            Method::Coordinates => &["p1x", "p1y", "p2x", "p2y", "p3x", "p3y"],
        }
    }

    /// Whether the area formula only rescales (`area × factor²`) for this method,
    /// rather than being re-evaluated on length inputs converted to meters.
    pub fn rescales_area_by_factor_squared(self) -> bool {
        matches!(self, Method::Sas | Method::Asa | Method::BaseHeight)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Method::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| SpecError::UnknownMethod(s.to_string()))
    }
}

/// Per-method entry slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriangleInputs {
    Sss {
        a: Entry,
        b: Entry,
        c: Entry,
    },
    Sas {
        side_a: Entry,
        side_b: Entry,
        angle_c: Entry,
    },
    Asa {
        angle_a: Entry,
        angle_b: Entry,
        side_c: Entry,
    },
    BaseHeight {
        base: Entry,
        height: Entry,
    },
    Coordinates {
        p1x: Entry,
        p1y: Entry,
        p2x: Entry,
        p2y: Entry,
        p3x: Entry,
        p3y: Entry,
    },
}

impl TriangleInputs {
    /// All slots unset.
    pub fn empty(method: Method) -> Self {
        match method {
            Method::Sss => Self::Sss {
                a: None,
                b: None,
                c: None,
            },
            Method::Sas => Self::Sas {
                side_a: None,
                side_b: None,
                angle_c: None,
            },
            Method::Asa => Self::Asa {
                angle_a: None,
                angle_b: None,
                side_c: None,
            },
            Method::BaseHeight => Self::BaseHeight {
                base: None,
                height: None,
            },
            Method::Coordinates => Self::Coordinates {
                p1x: None,
                p1y: None,
                p2x: None,
                p2y: None,
                p3x: None,
                p3y: None,
            },
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::Sss { .. } => Method::Sss,
            Self::Sas { .. } => Method::Sas,
            Self::Asa { .. } => Method::Asa,
            Self::BaseHeight { .. } => Method::BaseHeight,
            Self::Coordinates { .. } => Method::Coordinates,
        }
    }

    /// Slots in `Method::fields` order.
    fn slots(&self) -> Vec<&Entry> {
        match self {
            Self::Sss { a, b, c } => vec![a, b, c],
            Self::Sas {
                side_a,
                side_b,
                angle_c,
            } => vec![side_a, side_b, angle_c],
            Self::Asa {
                angle_a,
                angle_b,
                side_c,
            } => vec![angle_a, angle_b, side_c],
            Self::BaseHeight { base, height } => vec![base, height],
            Self::Coordinates {
                p1x,
                p1y,
                p2x,
                p2y,
                p3x,
                p3y,
            } => vec![p1x, p1y, p2x, p2y, p3x, p3y],
        }
    }

    fn slots_mut(&mut self) -> Vec<&mut Entry> {
        match self {
            Self::Sss { a, b, c } => vec![a, b, c],
            Self::Sas {
                side_a,
                side_b,
                angle_c,
            } => vec![side_a, side_b, angle_c],
            Self::Asa {
                angle_a,
                angle_b,
                side_c,
            } => vec![angle_a, angle_b, side_c],
            Self::BaseHeight { base, height } => vec![base, height],
            Self::Coordinates {
                p1x,
                p1y,
                p2x,
                p2y,
                p3x,
                p3y,
            } => vec![p1x, p1y, p2x, p2y, p3x, p3y],
        }
    }

    /// `(field, entry)` pairs in display order, unset entries included.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &Entry)> {
        self.method().fields().iter().copied().zip(self.slots())
    }

    pub fn get(&self, field: &str) -> Option<&Entry> {
        self.entries().find(|(name, _)| *name == field).map(|(_, e)| e)
    }

    fn slot_mut(&mut self, field: &str) -> Option<&mut Entry> {
        let pos = self.method().fields().iter().position(|f| *f == field)?;
        self.slots_mut().into_iter().nth(pos)
    }

    /// Entries parsed as numbers (unset or unparsable entries read as 0).
    pub fn measurements(&self) -> Measurements {
        let v: Vec<f64> = self.slots().into_iter().map(parse_entry).collect();
        match self.method() {
            Method::Sss => Measurements::Sss {
                a: v[0],
                b: v[1],
                c: v[2],
            },
            Method::Sas => Measurements::Sas {
                side_a: v[0],
                side_b: v[1],
                angle_c: v[2],
            },
            Method::Asa => Measurements::Asa {
                angle_a: v[0],
                angle_b: v[1],
                side_c: v[2],
            },
            Method::BaseHeight => Measurements::BaseHeight {
                base: v[0],
                height: v[1],
            },
            Method::Coordinates => Measurements::Coordinates {
                p1: Point::new(v[0], v[1]),
                p2: Point::new(v[2], v[3]),
                p3: Point::new(v[4], v[5]),
            },
        }
    }
}

impl Serialize for TriangleInputs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let set: Vec<(&str, &String)> = self
            .entries()
            .filter_map(|(name, e)| e.as_ref().map(|v| (name, v)))
            .collect();
        let mut map = serializer.serialize_map(Some(set.len()))?;
        for (name, value) in set {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Parse one entry: trimmed decimal, finite; anything else reads as 0.
pub fn parse_entry(entry: &Entry) -> f64 {
    entry
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Numeric view of a triangle entry. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measurements {
    Sss { a: f64, b: f64, c: f64 },
    Sas { side_a: f64, side_b: f64, angle_c: f64 },
    Asa { angle_a: f64, angle_b: f64, side_c: f64 },
    BaseHeight { base: f64, height: f64 },
    Coordinates { p1: Point, p2: Point, p3: Point },
}

impl Measurements {
    /// Multiply every length (never an angle) by `f`.
    pub fn scale_lengths(self, f: f64) -> Self {
        match self {
            Self::Sss { a, b, c } => Self::Sss {
                a: a * f,
                b: b * f,
                c: c * f,
            },
            Self::Sas {
                side_a,
                side_b,
                angle_c,
            } => Self::Sas {
                side_a: side_a * f,
                side_b: side_b * f,
                angle_c,
            },
            Self::Asa {
                angle_a,
                angle_b,
                side_c,
            } => Self::Asa {
                angle_a,
                angle_b,
                side_c: side_c * f,
            },
            Self::BaseHeight { base, height } => Self::BaseHeight {
                base: base * f,
                height: height * f,
            },
            Self::Coordinates { p1, p2, p3 } => Self::Coordinates {
                p1: p1.scaled(f),
                p2: p2.scaled(f),
                p3: p3.scaled(f),
            },
        }
    }
}

/// One triangle as entered: caller-assigned id plus method-specific entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriangleSpec {
    pub id: u64,
    inputs: TriangleInputs,
}

impl TriangleSpec {
    /// New spec with every entry unset.
    pub fn new(id: u64, method: Method) -> Self {
        Self {
            id,
            inputs: TriangleInputs::empty(method),
        }
    }

    pub fn from_inputs(id: u64, inputs: TriangleInputs) -> Self {
        Self { id, inputs }
    }

    /// Build from `(field, value)` pairs; unknown fields are rejected.
    pub fn from_pairs<'a, I>(id: u64, method: Method, pairs: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut spec = Self::new(id, method);
        for (field, value) in pairs {
            spec.set_input(field, Some(value.to_string()))?;
        }
        Ok(spec)
    }

    pub fn method(&self) -> Method {
        self.inputs.method()
    }

    pub fn inputs(&self) -> &TriangleInputs {
        &self.inputs
    }

    /// Switch method. A different method starts from empty entries; the same
    /// method keeps what was typed.
    pub fn set_method(&mut self, method: Method) {
        if method != self.method() {
            self.inputs = TriangleInputs::empty(method);
        }
    }

    /// Write (or clear, with `None`) one entry of the current method.
    pub fn set_input(&mut self, field: &str, value: Entry) -> Result<(), SpecError> {
        let method = self.method();
        let slot = self
            .inputs
            .slot_mut(field)
            .ok_or_else(|| SpecError::UnknownField {
                method,
                field: field.to_string(),
            })?;
        *slot = value;
        Ok(())
    }
}

impl Serialize for TriangleSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TriangleSpec", 3)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("method", &self.method())?;
        s.serialize_field("inputs", &self.inputs)?;
        s.end()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTriangleSpec {
    id: u64,
    method: Method,
    #[serde(default)]
    inputs: BTreeMap<String, Entry>,
}

impl<'de> Deserialize<'de> for TriangleSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawTriangleSpec::deserialize(deserializer)?;
        let mut spec = TriangleSpec::new(raw.id, raw.method);
        for (field, value) in raw.inputs {
            spec.set_input(&field, value).map_err(D::Error::custom)?;
        }
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_change_resets_entries() {
        let mut spec = TriangleSpec::from_pairs(1, Method::Sss, [("a", "3"), ("b", "4")]).unwrap();
        spec.set_method(Method::Sss);
        assert_eq!(spec.inputs().get("a"), Some(&Some("3".to_string())));
        spec.set_method(Method::BaseHeight);
        assert_eq!(spec.method(), Method::BaseHeight);
        assert!(spec.inputs().entries().all(|(_, e)| e.is_none()));
    }

    #[test]
    fn sas_asa_and_base_height_rescale_area() {
        let rescaled: Vec<Method> = Method::ALL
            .into_iter()
            .filter(|m| m.rescales_area_by_factor_squared())
            .collect();
        assert_eq!(rescaled, [Method::Sas, Method::Asa, Method::BaseHeight]);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut spec = TriangleSpec::new(7, Method::Sas);
        let err = spec.set_input("a", Some("1".into())).unwrap_err();
        assert_eq!(
            err,
            SpecError::UnknownField {
                method: Method::Sas,
                field: "a".into()
            }
        );
        assert!(spec.set_input("angleC", Some("90".into())).is_ok());
        assert!(spec.set_input("angleC", None).is_ok());
        assert_eq!(spec.inputs().get("angleC"), Some(&None));
    }

    #[test]
    fn entries_parse_leniently() {
        assert_eq!(parse_entry(&Some(" 2.5 ".into())), 2.5);
        assert_eq!(parse_entry(&Some("1e3".into())), 1000.0);
        assert_eq!(parse_entry(&Some("abc".into())), 0.0);
        assert_eq!(parse_entry(&Some("".into())), 0.0);
        assert_eq!(parse_entry(&Some("inf".into())), 0.0);
        assert_eq!(parse_entry(&Some("NaN".into())), 0.0);
        assert_eq!(parse_entry(&None), 0.0);
    }

    #[test]
    fn coordinates_measurements_map_fields_to_points() {
        let spec = TriangleSpec::from_pairs(
            2,
            Method::Coordinates,
            [("p1x", "1"), ("p1y", "2"), ("p3x", "5"), ("p3y", "6")],
        )
        .unwrap();
        assert_eq!(
            spec.inputs().measurements(),
            Measurements::Coordinates {
                p1: Point::new(1.0, 2.0),
                p2: Point::new(0.0, 0.0),
                p3: Point::new(5.0, 6.0),
            }
        );
    }

    #[test]
    fn scaling_leaves_angles_alone() {
        let m = Measurements::Asa {
            angle_a: 30.0,
            angle_b: 60.0,
            side_c: 2.0,
        };
        assert_eq!(
            m.scale_lengths(0.5),
            Measurements::Asa {
                angle_a: 30.0,
                angle_b: 60.0,
                side_c: 1.0
            }
        );
    }

    #[test]
    fn json_keeps_strings_verbatim() {
        let text = r#"{"id":3,"method":"SAS","inputs":{"sideA":"03.50","angleC":"90.000","sideB":null}}"#;
        let spec: TriangleSpec = serde_json::from_str(text).unwrap();
        assert_eq!(spec.method(), Method::Sas);
        assert_eq!(spec.inputs().get("sideA"), Some(&Some("03.50".to_string())));
        let out = serde_json::to_value(&spec).unwrap();
        assert_eq!(out["inputs"]["sideA"], "03.50");
        assert_eq!(out["inputs"]["angleC"], "90.000");
        assert!(out["inputs"].get("sideB").is_none());
        let again: TriangleSpec = serde_json::from_value(out).unwrap();
        assert_eq!(again, spec);
    }

    #[test]
    fn json_rejects_foreign_fields_and_numbers() {
        let foreign = r#"{"id":1,"method":"BaseHeight","inputs":{"a":"3"}}"#;
        assert!(serde_json::from_str::<TriangleSpec>(foreign).is_err());
        let numeric = r#"{"id":1,"method":"BaseHeight","inputs":{"base":3}}"#;
        assert!(serde_json::from_str::<TriangleSpec>(numeric).is_err());
        let method = r#"{"id":1,"method":"SSA","inputs":{}}"#;
        assert!(serde_json::from_str::<TriangleSpec>(method).is_err());
    }

    #[test]
    fn method_names_parse_case_insensitively() {
        assert_eq!("sss".parse::<Method>(), Ok(Method::Sss));
        assert_eq!("baseheight".parse::<Method>(), Ok(Method::BaseHeight));
        assert!("heron".parse::<Method>().is_err());
    }
}
