use super::*;

#[test]
fn changes_nothing() {
    instruction_runs! {
        nop!(),
        [1 = 1, 2 = 2] => []
    };
}

#[test]
fn still_costs_four_cycles() {
    let (_, summary) = run_program(&[nop!(), halt!()]);

    assert_eq!(summary.cycles, 8);
    assert_eq!(summary.instructions, 2);
}
