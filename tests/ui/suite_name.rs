#[unit_test::test(Big_Math)]
fn adds() {}

fn main() {}
