/// Assert that an expression matches a pattern, printing the value if not.
#[macro_export]
macro_rules! assert_match {
    ($expression:expr, $( $pattern:pat )|+ $( if $guard: expr )? $(,)?) => {
        match $expression {
            $( $pattern )|+ $( if $guard )? => (),
            ref other => panic!(
                "assertion failed: `{:?}` does not match `{}`",
                other,
                stringify!($( $pattern )|+ $( if $guard )?)
            ),
        }
    };
}

/// Assert that two errors render the same message.
#[macro_export]
macro_rules! assert_match_error {
    ($expression1:expr, $expression2:expr) => {
        assert_eq!($expression1.to_string(), $expression2.to_string());
    };
    ($expression1:expr, $expression2:expr, $($arg:tt)+) => {
        assert_eq!($expression1.to_string(), $expression2.to_string(), $($arg)+);
    };
}
