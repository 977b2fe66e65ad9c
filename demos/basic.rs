use stest::{
    test_check, test_group, test_group_fn, test_if, test_merge, test_print, test_return,
    test_section, test_summary,
};
use tracing_subscriber::EnvFilter;

fn test_sub() {
    test_group_fn!();
    test_check!(1 - 1 == 0);
    test_check!(1 - 2 == -1);
}

fn test_div(divisor: i32) {
    test_group_fn!();
    test_return!(divisor != 0);
    test_check!(divisor / divisor == 1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    stest::global::guard(|| {
        test_section!("arithmetic");

        test_group!("test_add");
        test_check!(1 + 1 == 2);
        test_check!(1 + 2 == 3);

        test_sub();

        test_group!("test_mul");
        test_check!(0 * 1 == 0);
        test_merge!(true);
        test_check!(1 * 2 == 2);
        test_check!(2 * 1 == 2);
        test_merge!(false);

        test_div(1);

        test_section!("logic");
        test_group!("test_and");
        if test_if!(true && true) {
            test_check!(!(true && false));
        }
        test_print!("checked {} operators", 4);

        test_summary!();
    });
}
