use small_widgets::core::arithmetic::DisplayFormat;
use small_widgets::{evaluate, format_for_display, square, AppError, CalculatorSession, Operator, RecordingNotifier};

fn run(keys: &[&str]) -> CalculatorSession<RecordingNotifier> {
    let mut calc = CalculatorSession::new(RecordingNotifier::default());
    calc.press_all(keys.iter().copied()).unwrap();
    calc
}

#[test]
fn test_add_then_equals() {
    let calc = run(&["7", "+", "3", "="]);
    assert_eq!(calc.display(), "10");
    assert!(calc.notifier().notifications().is_empty());
}

#[test]
fn test_second_equals_adds_again() {
    let calc = run(&["7", "+", "3", "=", "="]);
    assert_eq!(calc.display(), "13");
    assert_eq!(calc.expression(), "10 + 3 =");
}

#[test]
fn test_divide_by_zero_resets_with_notification() {
    let calc = run(&["5", "/", "0", "="]);
    assert_eq!(calc.display(), "0");
    assert_eq!(calc.first_operand(), None);

    let notifications = calc.into_notifier().into_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].description, "Cannot divide by zero");
}

#[test]
fn test_calculator_recovers_after_error() {
    let calc = run(&["5", "/", "0", "=", "2", "*", "4", "="]);
    assert_eq!(calc.display(), "8");
}

#[test]
fn test_decimal_arithmetic_display() {
    assert_eq!(run(&["1", ".", "5", "*", "4", "="]).display(), "6");
    assert_eq!(run(&["0", ".", "1", "+", "0", ".", "2", "="]).display(), "3.000000e-1");
}

#[test]
fn test_unknown_key_stops_press_all() {
    let mut calc = CalculatorSession::new(RecordingNotifier::default());
    let result = calc.press_all(["4", "sqrt", "5"]);
    assert!(matches!(result, Err(AppError::UnknownKey { token }) if token == "sqrt"));
    assert_eq!(calc.display(), "4");
}

#[test]
fn test_narrow_display_format() {
    let format = DisplayFormat {
        max_digits: 6,
        exponent_digits: 2,
    };
    let mut calc = CalculatorSession::with_format(format, RecordingNotifier::default());
    calc.press_all(["1", "2", "3", "4", "*", "1", "0", "0", "="]).unwrap();
    assert_eq!(calc.display(), "123400");
    calc.press_all(["*", "1", "0", "="]).unwrap();
    assert_eq!(calc.display(), "1.23e+6");
}

#[test]
fn test_engine_properties() {
    let samples = [-12.5, -3.0, 0.0, 0.5, 7.0, 1e10];
    for &a in &samples {
        assert_eq!(square(a), a * a);
        for &b in &samples {
            for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Remainder] {
                assert!(evaluate(a, b, op).is_ok());
            }
            if b == 0.0 {
                assert!(evaluate(a, b, Operator::Divide).is_err());
            } else {
                assert_eq!(evaluate(a, b, Operator::Divide).unwrap(), a / b);
            }
        }
    }
}

#[test]
fn test_format_round_trips_short_values() {
    for value in [0.0, 1.0, -7.0, 2.5, 1234.75, 99999999999.0] {
        let text = format_for_display(value);
        assert_eq!(text.parse::<f64>().unwrap(), value);
        assert!(!text.contains('e'));
    }
}
