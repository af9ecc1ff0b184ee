use unit_test::{expect_eq, expect_true, Fixture};

struct Stack {
    items: [u32; 8],
    len: usize,
}

impl Stack {
    fn push(&mut self, item: u32) {
        self.items[self.len] = item;
        self.len += 1;
    }

    fn pop(&mut self) -> Option<u32> {
        self.len = self.len.checked_sub(1)?;
        Some(self.items[self.len])
    }
}

impl Fixture for Stack {
    fn new() -> Self {
        Stack {
            items: [0; 8],
            len: 0,
        }
    }

    fn set_up(&mut self) {
        self.push(1);
        self.push(2);
    }

    fn set_up_test_suite() {
        println!("setting up Stack");
    }

    fn tear_down_test_suite() {
        println!("tearing down Stack");
    }
}

#[unit_test::test_f(Stack)]
fn pops_in_reverse_order(stack: &mut Stack) {
    expect_eq!(stack.pop(), Some(2));
    expect_eq!(stack.pop(), Some(1));
    expect_true!(stack.pop().is_none());
}

fn main() {
    demos::run(&demos::PRINTER)
}
