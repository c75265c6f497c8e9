use {
    crate::{config::ENGINE, error::ScenarioError},
    chrono::{Month, NaiveDate},
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// A calendar month parsed from a "Mon-YY" label.
/// Field order matters: the derived `Ord` is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Accepts "Jan-24", "jan-24", "January-24", "Jan-4". Two-digit years pivot at 69.
    pub fn parse(label: &str) -> Result<Self, ScenarioError> {
        let invalid = || ScenarioError::InvalidPeriodFormat {
            label: label.to_string(),
        };

        let (month_part, year_part) = label.trim().split_once('-').ok_or_else(invalid)?;

        let month = Month::from_str(month_part.trim()).map_err(|_| invalid())?;

        let year_part = year_part.trim();
        if year_part.is_empty() || year_part.len() > 2 || !year_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let yy: u32 = year_part.parse().map_err(|_| invalid())?;
        let century = if yy < ENGINE.two_digit_year_pivot { 2000 } else { 1900 };

        Ok(Self {
            year: (century + yy) as i32,
            month: month.number_from_month(),
        })
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months since year 0. Consecutive periods differ by exactly 1, handy as a chart x value.
    #[inline]
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        Self::new(year, ordinal.rem_euclid(12) as u32 + 1)
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_day() {
            Some(date) => write!(f, "{}", date.format(ENGINE.period_format)),
            None => write!(f, "{:04}-{:02}", self.year, self.month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_abbreviated_month_year() {
        let p = Period::parse("Jan-24").unwrap();
        assert_eq!(p.year(), 2024);
        assert_eq!(p.month(), 1);
        assert_eq!(p.to_string(), "Jan-24");
    }

    #[test]
    fn parsing_is_lenient_on_case_and_full_names() {
        assert_eq!(Period::parse("feb-25").unwrap(), Period::new(2025, 2).unwrap());
        assert_eq!(Period::parse(" March-25 ").unwrap(), Period::new(2025, 3).unwrap());
    }

    #[test]
    fn two_digit_year_pivot() {
        assert_eq!(Period::parse("Dec-68").unwrap().year(), 2068);
        assert_eq!(Period::parse("Dec-69").unwrap().year(), 1969);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "Jan", "2024-01", "Foo-24", "Jan-2024", "Jan-x4", "-24"] {
            assert_eq!(
                Period::parse(bad),
                Err(ScenarioError::InvalidPeriodFormat { label: bad.to_string() }),
                "{bad}"
            );
        }
    }

    #[test]
    fn ordering_is_chronological() {
        let mut periods: Vec<Period> = ["Mar-24", "Dec-23", "Jan-24", "Feb-24"]
            .iter()
            .map(|l| Period::parse(l).unwrap())
            .collect();
        periods.sort();
        let labels: Vec<String> = periods.iter().map(Period::to_string).collect();
        assert_eq!(labels, ["Dec-23", "Jan-24", "Feb-24", "Mar-24"]);
    }

    #[test]
    fn ordinal_round_trips_across_year_boundary() {
        let dec = Period::parse("Dec-23").unwrap();
        let jan = Period::parse("Jan-24").unwrap();
        assert_eq!(jan.ordinal() - dec.ordinal(), 1);
        assert_eq!(Period::from_ordinal(jan.ordinal()), Some(jan));
    }
}
