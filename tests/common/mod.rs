#[macro_export]
macro_rules! assert_error {
    ( $value:expr, $p:pat ) => {
        let has_error = match $value {
            Err($p) => true,
            _ => false,
        };
        assert!(
            has_error,
            "{} must have an error {}",
            stringify!($value),
            stringify!($p)
        );
    };
}

#[allow(dead_code)]
pub static EPS: f64 = 0.0001;

#[macro_export]
macro_rules! assert_eq_eps {
    ( $expected:expr, $rule:expr ) => {
        let rule = &$rule;
        assert_eq!(jasminc::front::SemType::Float, rule.ty, "{:?} must be a float rule", rule);
        assert!(
            (rule.f_val - $expected).abs() <= $crate::common::EPS,
            "|{} - {}| <= {}",
            rule.f_val,
            $expected,
            $crate::common::EPS
        );
    };
}
