#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::{
        app::form::{Focus, InputForm},
        models::{Interval, QueryParams},
        test::date,
    };

    fn press(form: &mut InputForm, code: KeyCode) {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(form: &mut InputForm, text: &str) {
        for c in text.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    fn fresh_form() -> InputForm {
        let mut form = InputForm::default();
        assert!(form.take_run_request());
        form
    }

    #[test]
    fn defaults_match_benchmark_query() {
        let form = InputForm::default();

        assert_eq!(
            form.query(),
            QueryParams::new("^GSPC", date(2025, 1, 20), Interval::Daily)
        );
        assert_eq!(*form.focus(), Focus::Ticker);
    }

    #[test]
    fn run_request_is_taken_once() {
        let mut form = fresh_form();
        assert!(!form.take_run_request());

        press(&mut form, KeyCode::F(5));
        assert!(form.take_run_request());
        assert!(!form.take_run_request());
    }

    #[test]
    fn ticker_edit_runs_on_enter() {
        let mut form = fresh_form();
        for _ in 0.."^GSPC".len() {
            press(&mut form, KeyCode::Backspace);
        }
        type_text(&mut form, "AAPL");
        assert!(!form.take_run_request());

        press(&mut form, KeyCode::Enter);
        assert!(form.take_run_request());
        assert_eq!(form.query().ticker(), "AAPL");
    }

    #[test]
    fn ticker_is_passed_through_unvalidated() {
        let form = InputForm::new("  not a ticker!! ", date(2025, 1, 20), Interval::Daily);
        assert_eq!(form.query().ticker(), "not a ticker!!");
    }

    #[test]
    fn invalid_start_date_keeps_previous_date() {
        let mut form = fresh_form();
        press(&mut form, KeyCode::Tab);
        assert_eq!(*form.focus(), Focus::StartDate);

        for _ in 0..10 {
            press(&mut form, KeyCode::Backspace);
        }
        type_text(&mut form, "2025-13-01");
        assert!(!form.is_start_date_valid());

        press(&mut form, KeyCode::Enter);
        assert!(!form.take_run_request());
        assert_eq!(*form.query().start_date(), date(2025, 1, 20));
    }

    #[test]
    fn valid_start_date_commits() {
        let mut form = fresh_form();
        press(&mut form, KeyCode::Tab);
        for _ in 0..10 {
            press(&mut form, KeyCode::Backspace);
        }
        type_text(&mut form, "2024-06-03");
        press(&mut form, KeyCode::Enter);

        assert!(form.take_run_request());
        assert_eq!(*form.query().start_date(), date(2024, 6, 3));
    }

    #[test]
    fn interval_cycles_and_reruns() {
        let mut form = fresh_form();
        press(&mut form, KeyCode::Down);
        press(&mut form, KeyCode::Down);
        assert_eq!(*form.focus(), Focus::Interval);

        press(&mut form, KeyCode::Right);
        assert!(form.take_run_request());
        assert_eq!(*form.query().interval(), Interval::Weekly);

        press(&mut form, KeyCode::Left);
        press(&mut form, KeyCode::Left);
        assert_eq!(*form.query().interval(), Interval::Monthly);
    }

    #[test]
    fn typing_on_interval_does_nothing() {
        let mut form = fresh_form();
        press(&mut form, KeyCode::BackTab);
        press(&mut form, KeyCode::BackTab);
        assert_eq!(*form.focus(), Focus::Interval);

        type_text(&mut form, "xyz");
        assert_eq!(form.ticker(), "^GSPC");
        assert!(!form.take_run_request());
    }

    #[test]
    fn refresh_button_requests_run() {
        let mut form = fresh_form();
        press(&mut form, KeyCode::BackTab);
        assert_eq!(*form.focus(), Focus::Refresh);

        press(&mut form, KeyCode::Enter);
        assert!(form.take_run_request());

        press(&mut form, KeyCode::Char(' '));
        assert!(form.take_run_request());
    }

    #[test]
    fn interval_parses_labels_and_codes() {
        assert_eq!("Daily".parse::<Interval>().unwrap(), Interval::Daily);
        assert_eq!("1wk".parse::<Interval>().unwrap(), Interval::Weekly);
        assert_eq!(" MONTHLY ".parse::<Interval>().unwrap(), Interval::Monthly);
        assert!("hourly".parse::<Interval>().is_err());
        assert_eq!(Interval::Monthly.api_code(), "1mo");
        assert_eq!(Interval::Monthly.next(), Interval::Daily);
    }
}
