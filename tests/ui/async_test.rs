#[unit_test::test(Math)]
async fn adds() {}

fn main() {}
