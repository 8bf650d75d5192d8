#[cfg(test)]
mod tests {
    use crate::{
        app::{
            calc::{canonical_field, compute_change, percent_change},
            errors::{DegenerateReason, PassError},
        },
        models::{PriceField, PriceRow, PriceSeries},
        test::{close_series, date},
    };

    fn adj_close_series() -> PriceSeries {
        let columns = vec![
            PriceField::Open,
            PriceField::High,
            PriceField::Low,
            PriceField::Close,
            PriceField::AdjClose,
            PriceField::Volume,
        ];
        let rows = vec![
            PriceRow::new(date(2025, 1, 21), None, None, None, Some(100.0), Some(50.0), None),
            PriceRow::new(date(2025, 1, 22), None, None, None, Some(110.0), Some(60.0), None),
        ];
        PriceSeries::new(columns, rows)
    }

    #[test]
    fn percent_change_matches_formula() {
        let cases = [(5000.0, 5100.0), (5000.0, 4900.0), (12.5, 3.75), (0.5, 0.5)];
        for (first, last) in cases {
            let expected = (last - first) / first * 100.0;
            let result = percent_change(first, last).unwrap();
            assert!((result - expected).abs() < 1e-12, "{first} -> {last}");
        }
    }

    #[test]
    fn percent_change_is_undefined_for_zero_baseline() {
        assert_eq!(percent_change(0.0, 10.0), None);
    }

    #[test]
    fn prefers_adjusted_close() {
        assert_eq!(canonical_field(&adj_close_series()), PriceField::AdjClose);
    }

    #[test]
    fn falls_back_to_close() {
        assert_eq!(canonical_field(&close_series(&[1.0])), PriceField::Close);
    }

    #[test]
    fn uses_adjusted_close_values() {
        let metric = compute_change(&adj_close_series()).unwrap();

        assert_eq!(*metric.field(), PriceField::AdjClose);
        assert_eq!(*metric.first_value(), 50.0);
        assert_eq!(*metric.last_value(), 60.0);
        assert!((metric.percent_change() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn single_row_is_zero_change() {
        let metric = compute_change(&close_series(&[4321.0])).unwrap();

        assert_eq!(*metric.first_value(), *metric.last_value());
        assert_eq!(*metric.percent_change(), 0.0);
        assert!(metric.is_positive());
    }

    #[test]
    fn reads_first_and_last_rows_only() {
        let metric = compute_change(&close_series(&[200.0, 10.0, 999.0, 150.0])).unwrap();

        assert_eq!(*metric.first_value(), 200.0);
        assert_eq!(*metric.last_value(), 150.0);
        assert!((metric.percent_change() + 25.0).abs() < 1e-9);
        assert!(!metric.is_positive());
    }

    #[test]
    fn zero_baseline_is_degenerate() {
        let err = compute_change(&close_series(&[0.0, 10.0])).unwrap_err();

        assert_eq!(
            err,
            PassError::DegenerateInput {
                field: PriceField::Close,
                reason: DegenerateReason::ZeroBaseline,
            }
        );
    }

    #[test]
    fn missing_endpoint_is_degenerate() {
        let columns = vec![PriceField::Close];
        let rows = vec![
            PriceRow::new(date(2025, 1, 21), None, None, None, Some(10.0), None, None),
            PriceRow::new(date(2025, 1, 22), None, None, None, None, None, Some(5)),
        ];
        let err = compute_change(&PriceSeries::new(columns, rows)).unwrap_err();

        assert!(matches!(
            err,
            PassError::DegenerateInput {
                reason: DegenerateReason::MissingValue,
                ..
            }
        ));
    }

    #[test]
    fn deterministic_for_same_series() {
        let series = close_series(&[5000.0, 5030.0, 5100.0]);
        assert_eq!(compute_change(&series), compute_change(&series));
    }
}
