use super::model::AlignedTriple;

// ---------------------------------------------------------------------------
// Missing-value sentinel
// ---------------------------------------------------------------------------

/// Default marker used in the input for a missing observation.
pub const MISSING_SENTINEL: &str = "NA";

/// Whether a raw cell counts as missing under the default `NA` sentinel.
///
/// This is a *substring* test, not an exact match: any cell containing `NA`
/// anywhere (`"NA"`, `"NA*"`, `"N/A NA"`) is treated as missing. The check is
/// case-sensitive, so `"NaN"` or `"na"` are not missing.
pub fn is_missing(cell: &str) -> bool {
    is_missing_with(MISSING_SENTINEL, cell)
}

/// Substring check against an arbitrary sentinel.
pub fn is_missing_with(sentinel: &str, cell: &str) -> bool {
    cell.contains(sentinel)
}

// ---------------------------------------------------------------------------
// Co-filter
// ---------------------------------------------------------------------------

/// Keep only the rows where none of year, value or CPI is missing.
///
/// Relative order is preserved and the three outputs stay index-aligned.
/// Inputs of unequal length are zipped, so the shortest one bounds the
/// result. An empty result is valid.
pub fn filter_trio<S: AsRef<str>>(years: &[S], values: &[S], cpis: &[S]) -> AlignedTriple {
    filter_trio_with(MISSING_SENTINEL, years, values, cpis)
}

/// [`filter_trio`] with a configurable sentinel.
pub fn filter_trio_with<S: AsRef<str>>(
    sentinel: &str,
    years: &[S],
    values: &[S],
    cpis: &[S],
) -> AlignedTriple {
    let mut kept = AlignedTriple::default();
    let missing = |cell: &str| is_missing_with(sentinel, cell);

    for (row, ((year, value), cpi)) in years.iter().zip(values).zip(cpis).enumerate() {
        let (year, value, cpi) = (year.as_ref(), value.as_ref(), cpi.as_ref());
        if missing(year) || missing(value) || missing(cpi) {
            log::debug!("Dropping row {row}: ({year:?}, {value:?}, {cpi:?})");
            continue;
        }
        kept.push(row, year, value, cpi);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sentinel_is_a_substring_check() {
        assert!(is_missing("NA"));
        assert!(is_missing("12NA"));
        assert!(is_missing("NA/NA"));
        assert!(!is_missing("NaN"));
        assert!(!is_missing("na"));
        assert!(!is_missing("1000"));
        assert!(!is_missing(""));
    }

    #[test]
    fn drops_rows_with_any_missing_cell() {
        let years = ["2000", "2001", "2002", "NA"];
        let values = ["1000", "NA", "1200", "1300"];
        let cpis = ["2.0", "2.0", "3.0", "1.0"];

        let kept = filter_trio(&years, &values, &cpis);

        assert_eq!(kept.years, ["2000", "2002"]);
        assert_eq!(kept.values, ["1000", "1200"]);
        assert_eq!(kept.cpis, ["2.0", "3.0"]);
    }

    #[test]
    fn drops_compound_missing_values() {
        let kept = filter_trio(&["2000", "2001"], &["1000", "1100"], &["2.0", "~NA~"]);
        assert_eq!(kept.years, ["2000"]);
    }

    #[test]
    fn kept_rows_remember_their_source_index() {
        let kept = filter_trio(&["2000", "2001", "2002"], &["1", "NA", "3"], &["1.0", "1.0", "1.0"]);
        assert_eq!(kept.source_rows, [0, 2]);
    }

    #[test]
    fn custom_sentinel_replaces_na() {
        let kept = filter_trio_with("?", &["2000", "2001"], &["NA", "?"], &["1.0", "1.0"]);
        assert_eq!(kept.rows().collect::<Vec<_>>(), vec![("2000", "NA", "1.0")]);
        assert!(is_missing_with("-", "-"));
        assert!(!is_missing_with("-", "NA"));
    }

    #[test]
    fn all_missing_gives_empty_triple() {
        let kept = filter_trio(&["NA"], &["NA"], &["NA"]);
        assert!(kept.is_empty());
    }

    #[test]
    fn scenario_trailing_missing_cpi() {
        let kept = filter_trio(&["2000", "2002"], &["1000", "1100"], &["2.0", "NA"]);
        assert_eq!(kept.rows().collect::<Vec<_>>(), vec![("2000", "1000", "2.0")]);
    }

    fn cell() -> impl Strategy<Value = String> {
        prop_oneof![
            "[0-9]{1,4}",
            Just("NA".to_string()),
            "[0-9]{0,2}NA[0-9]{0,2}",
            "[A-Za-z]{0,3}",
        ]
    }

    fn rows() -> impl Strategy<Value = Vec<(String, String, String)>> {
        proptest::collection::vec((cell(), cell(), cell()), 0..40)
    }

    fn split(rows: &[(String, String, String)]) -> (Vec<String>, Vec<String>, Vec<String>) {
        let years = rows.iter().map(|r| r.0.clone()).collect();
        let values = rows.iter().map(|r| r.1.clone()).collect();
        let cpis = rows.iter().map(|r| r.2.clone()).collect();
        (years, values, cpis)
    }

    proptest! {
        #[test]
        fn output_never_contains_sentinel(rows in rows()) {
            let (years, values, cpis) = split(&rows);
            let kept = filter_trio(&years, &values, &cpis);

            prop_assert!(kept.len() <= rows.len());
            prop_assert_eq!(kept.years.len(), kept.values.len());
            prop_assert_eq!(kept.years.len(), kept.cpis.len());
            for (y, v, c) in kept.rows() {
                prop_assert!(!is_missing(y) && !is_missing(v) && !is_missing(c));
            }
        }

        #[test]
        fn preserves_relative_order(rows in rows()) {
            let (years, values, cpis) = split(&rows);
            let kept = filter_trio(&years, &values, &cpis);

            let expected: Vec<(&str, &str, &str)> = rows
                .iter()
                .filter(|(y, v, c)| !is_missing(y) && !is_missing(v) && !is_missing(c))
                .map(|(y, v, c)| (y.as_str(), v.as_str(), c.as_str()))
                .collect();
            prop_assert_eq!(kept.rows().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn filtering_twice_is_a_no_op(rows in rows()) {
            let (years, values, cpis) = split(&rows);
            let once = filter_trio(&years, &values, &cpis);
            let twice = filter_trio(&once.years, &once.values, &once.cpis);
            prop_assert_eq!(
                once.rows().collect::<Vec<_>>(),
                twice.rows().collect::<Vec<_>>()
            );
        }
    }
}
