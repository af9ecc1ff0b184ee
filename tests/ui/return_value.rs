#[unit_test::test(Math)]
fn answer() -> u32 {
    42
}

fn main() {}
