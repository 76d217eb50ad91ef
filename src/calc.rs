use serde::Serialize;

pub const MARK_COUNT: usize = 5;
pub const MARK_MIN: i64 = 1;
pub const MARK_MAX: i64 = 100;

/// Maximum obtainable total across the five subjects; percentage is
/// `total / MARK_TOTAL * 100`.
pub const MARK_TOTAL: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Division {
    #[serde(rename = "First Division")]
    First,
    #[serde(rename = "Second Division")]
    Second,
    #[serde(rename = "Third Division")]
    Third,
    #[serde(rename = "Fail")]
    Fail,
}

impl Division {
    pub fn label(&self) -> &'static str {
        match self {
            Division::First => "First Division",
            Division::Second => "Second Division",
            Division::Third => "Third Division",
            Division::Fail => "Fail",
        }
    }

    /// Parses the wire/display label back to a division. Returns `None` for
    /// anything that is not one of the four exact labels.
    pub fn from_label(s: &str) -> Option<Division> {
        match s {
            "First Division" => Some(Division::First),
            "Second Division" => Some(Division::Second),
            "Third Division" => Some(Division::Third),
            "Fail" => Some(Division::Fail),
            _ => None,
        }
    }
}

/// 2-decimal half-up rounding: `Int(100*x + 0.5) / 100`.
pub fn round_off_2_decimals(x: f64) -> f64 {
    ((100.0 * x) + 0.5).floor() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub percentage: f64,
    pub division: Division,
}

/// Division thresholds, evaluated high to low; boundaries are inclusive.
pub fn division_for(percentage: f64) -> Division {
    if percentage >= 60.0 {
        Division::First
    } else if percentage >= 45.0 {
        Division::Second
    } else if percentage >= 33.0 {
        Division::Third
    } else {
        Division::Fail
    }
}

/// Derives percentage and division from five range-validated marks.
/// Total over its input domain; callers guarantee each mark is in
/// `[MARK_MIN, MARK_MAX]`.
pub fn calculate(marks: &[i64; MARK_COUNT]) -> ScoreResult {
    let total: i64 = marks.iter().sum();
    let percentage = round_off_2_decimals((total as f64 / MARK_TOTAL) * 100.0);
    ScoreResult {
        percentage,
        division: division_for(percentage),
    }
}

/// Parses a single raw mark field. `None` for anything that is not an
/// integer in `[MARK_MIN, MARK_MAX]`.
pub fn parse_mark(raw: &str) -> Option<i64> {
    let v = raw.trim().parse::<i64>().ok()?;
    (MARK_MIN..=MARK_MAX).contains(&v).then_some(v)
}

/// Live preview over the raw mark fields as currently typed: a tentative
/// result only once every slot holds an in-range number, `None` otherwise.
/// Absence is not an error.
pub fn preview(slots: &[String; MARK_COUNT]) -> Option<ScoreResult> {
    let mut marks = [0_i64; MARK_COUNT];
    for (i, slot) in slots.iter().enumerate() {
        marks[i] = parse_mark(slot)?;
    }
    Some(calculate(&marks))
}
