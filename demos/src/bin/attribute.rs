use unit_test::{const_assert_true, const_expect_eq, const_expect_streq};

const fn square(x: u32) -> u32 {
    x * x
}

#[unit_test::const_test(Math)]
fn squares() {
    const_assert_true!(square(0) == 0);
    const_expect_eq!(square(3), 9);
    const_expect_streq!("ferris", "ferris");
}

fn main() {
    demos::run(&demos::PRINTER)
}
