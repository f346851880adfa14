//! JSON-driven fixture tests.
//!
//! Each file in tests/fixtures/ names an indicator, its input series, its
//! parameters and the expected outputs. `null` stands for the NaN sentinel;
//! integer outputs are compared exactly.

#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use tacalc::indicators::{
    ema, medprice, minmaxindex, mom, obv, rsi, sma, trange, wma, CandlePattern, CandleSettings,
};

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[derive(Debug, Deserialize)]
struct Fixture {
    indicator: String,
    rationale: String,
    input: BTreeMap<String, Vec<f64>>,
    #[serde(default)]
    params: BTreeMap<String, Value>,
    expected: BTreeMap<String, Vec<Option<f64>>>,
}

impl Fixture {
    fn series(&self, name: &str) -> &[f64] {
        self.input
            .get(name)
            .unwrap_or_else(|| panic!("{}: missing input {name}", self.indicator))
    }

    fn period(&self) -> usize {
        self.params
            .get("timeperiod")
            .and_then(Value::as_u64)
            .unwrap_or_else(|| panic!("{}: missing timeperiod", self.indicator)) as usize
    }
}

/// Computed outputs keyed by output name.
enum Computed {
    Real(Vec<f64>),
    Integer(Vec<i64>),
}

fn load_fixture(path: &Path) -> Fixture {
    let content = fs::read_to_string(path).expect("Failed to read fixture file");
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("{}: invalid fixture: {e}", path.display()))
}

fn run(fixture: &Fixture) -> BTreeMap<&'static str, Computed> {
    let mut out = BTreeMap::new();
    match fixture.indicator.as_str() {
        "SMA" => {
            let values = sma(fixture.series("real"), fixture.period()).unwrap();
            out.insert("real", Computed::Real(values));
        }
        "EMA" => {
            let values = ema(fixture.series("real"), fixture.period()).unwrap();
            out.insert("real", Computed::Real(values));
        }
        "WMA" => {
            let values = wma(fixture.series("real"), fixture.period()).unwrap();
            out.insert("real", Computed::Real(values));
        }
        "MOM" => {
            let values = mom(fixture.series("real"), fixture.period()).unwrap();
            out.insert("real", Computed::Real(values));
        }
        "RSI" => {
            let values = rsi(fixture.series("real"), fixture.period()).unwrap();
            out.insert("real", Computed::Real(values));
        }
        "MINMAXINDEX" => {
            let idx = minmaxindex(fixture.series("real"), fixture.period()).unwrap();
            out.insert("minidx", Computed::Integer(idx.min_idx));
            out.insert("maxidx", Computed::Integer(idx.max_idx));
        }
        "TRANGE" => {
            let (high, low) = (fixture.series("high"), fixture.series("low"));
            let tr = trange(high, low, fixture.series("close")).unwrap();
            out.insert("real", Computed::Real(tr));
        }
        "MEDPRICE" => {
            let mid = medprice(fixture.series("high"), fixture.series("low")).unwrap();
            out.insert("real", Computed::Real(mid));
        }
        "OBV" => {
            let total = obv(fixture.series("close"), fixture.series("volume")).unwrap();
            out.insert("real", Computed::Real(total));
        }
        name if name.starts_with("CDL") => {
            let pattern = CandlePattern::from_str(name).unwrap();
            let signals = pattern
                .compute(
                    fixture.series("open"),
                    fixture.series("high"),
                    fixture.series("low"),
                    fixture.series("close"),
                    &CandleSettings::default(),
                    None,
                )
                .unwrap();
            let signals = signals.into_iter().map(i64::from).collect();
            out.insert("integer", Computed::Integer(signals));
        }
        other => panic!("no fixture runner for {other}"),
    }
    out
}

fn assert_expected(label: &str, actual: &Computed, expected: &[Option<f64>]) {
    match actual {
        Computed::Real(values) => {
            assert_eq!(values.len(), expected.len(), "{label}: length mismatch");
            for (i, (a, e)) in values.iter().zip(expected).enumerate() {
                match e {
                    None => assert!(a.is_nan(), "{label}[{i}] expected NaN, got {a}"),
                    Some(exp) => assert!(
                        approx_eq(*a, *exp, EPSILON),
                        "{label}[{i}] expected {exp}, got {a}"
                    ),
                }
            }
        }
        Computed::Integer(values) => {
            assert_eq!(values.len(), expected.len(), "{label}: length mismatch");
            for (i, (a, e)) in values.iter().zip(expected).enumerate() {
                let exp = e.unwrap_or_else(|| panic!("{label}[{i}]: integer outputs have no null"));
                assert_eq!(*a as f64, exp, "{label}[{i}]");
            }
        }
    }
}

#[test]
fn test_all_fixtures() {
    let mut paths: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .expect("fixtures directory")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures found");

    for path in &paths {
        let fixture = load_fixture(path);
        let file = path.display();
        assert!(!fixture.rationale.is_empty(), "{file}: missing rationale");
        let computed = run(&fixture);
        assert_eq!(
            computed.len(),
            fixture.expected.len(),
            "{}: output count mismatch",
            path.display()
        );
        for (name, expected) in &fixture.expected {
            let actual = computed
                .get(name.as_str())
                .unwrap_or_else(|| panic!("{}: no output named {name}", path.display()));
            let label = format!("{}:{}", fixture.indicator, name);
            assert_expected(&label, actual, expected);
        }
    }
}
