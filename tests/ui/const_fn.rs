#[unit_test::test(Math)]
const fn adds() {}

fn main() {}
