//! Call-site macros for the global harness.
//!
//! They capture the expression text with [`stringify!`] and the location with
//! [`file!`] and [`line!`], then send the matching [`Event`](crate::event::Event)
//! to [`global::log`](crate::global::log).

#[doc(hidden)]
#[macro_export]
macro_rules! __location {
    () => {
        $crate::location::Location::new(
            $crate::location::Location::file_name(::std::file!()),
            ::std::line!(),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assertion {
    ($x:expr) => {{
        let passed: bool = $x;
        $crate::event::Assertion::new(::std::stringify!($x), $crate::__location!(), passed)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        $crate::location::function_name(::std::any::type_name_of_val(&__here))
    }};
}

/// Check an assertion.
///
/// Evaluates to the assertion's result.
#[macro_export]
macro_rules! test_check {
    ($x:expr $(,)?) => {
        $crate::global::log($crate::event::Event::Check($crate::__assertion!($x)))
    };
}

/// Check an assertion and return from the enclosing function if it fails.
///
/// The failure marks the run as possibly skipping tests. An optional second
/// argument is the value to return.
#[macro_export]
macro_rules! test_return {
    ($x:expr $(,)?) => {
        if !$crate::global::log($crate::event::Event::CheckSkip($crate::__assertion!($x))) {
            return;
        }
    };
    ($x:expr, $ret:expr $(,)?) => {
        if !$crate::global::log($crate::event::Event::CheckSkip($crate::__assertion!($x))) {
            return $ret;
        }
    };
}

/// Check an assertion meant as the condition of an `if`.
///
/// A failure marks the run as possibly skipping tests.
#[macro_export]
macro_rules! test_if {
    ($x:expr $(,)?) => {
        $crate::global::log($crate::event::Event::CheckSkip($crate::__assertion!($x)))
    };
}

/// Turn merge mode on or off.
#[macro_export]
macro_rules! test_merge {
    ($merging:expr $(,)?) => {
        $crate::global::log($crate::event::Event::Merge($merging))
    };
}

/// Print the summary and end the run.
#[macro_export]
macro_rules! test_summary {
    () => {
        $crate::global::log($crate::event::Event::Summary)
    };
}

/// Report an exception after the last assertion and end the run.
#[macro_export]
macro_rules! test_exception {
    () => {
        $crate::global::log($crate::event::Event::Exception)
    };
}

#[macro_export]
macro_rules! test_group {
    ($name:expr $(,)?) => {
        $crate::global::log($crate::event::Event::BeginGroup(::std::option::Option::Some(
            ::std::convert::AsRef::<str>::as_ref(&$name),
        )))
    };
}

/// Begin a group named after the enclosing function.
#[macro_export]
macro_rules! test_group_fn {
    () => {
        $crate::global::log($crate::event::Event::BeginGroup(::std::option::Option::Some(
            $crate::__function_name!(),
        )))
    };
}

#[macro_export]
macro_rules! test_section {
    ($name:expr $(,)?) => {
        $crate::global::log($crate::event::Event::BeginSection(::std::option::Option::Some(
            ::std::convert::AsRef::<str>::as_ref(&$name),
        )))
    };
}

/// Begin a section named after the enclosing function.
#[macro_export]
macro_rules! test_section_fn {
    () => {
        $crate::global::log($crate::event::Event::BeginSection(::std::option::Option::Some(
            $crate::__function_name!(),
        )))
    };
}

/// Print a line of custom text, either a plain string or `format!` arguments.
#[macro_export]
macro_rules! test_print {
    ($fmt:literal, $($arg:tt)+) => {
        $crate::global::log($crate::event::Event::Print(::std::option::Option::Some(
            ::std::string::String::as_str(&::std::format!($fmt, $($arg)+)),
        )))
    };
    ($text:expr $(,)?) => {
        $crate::global::log($crate::event::Event::Print(::std::option::Option::Some(
            ::std::convert::AsRef::<str>::as_ref(&$text),
        )))
    };
}

/// Whether any assertion has failed so far.
#[macro_export]
macro_rules! test_failed {
    () => {
        $crate::global::log($crate::event::Event::Failed)
    };
}

/// Set whether summary and exception terminate the process.
#[macro_export]
macro_rules! test_exit {
    ($exit_at_end:expr $(,)?) => {
        $crate::global::log($crate::event::Event::SetExit($exit_at_end))
    };
}

/// Set whether the harness waits for a line of input before terminating.
#[macro_export]
macro_rules! test_wait {
    ($wait_at_exit:expr $(,)?) => {
        $crate::global::log($crate::event::Event::SetWait($wait_at_exit))
    };
}
