use demo_runner::run_demo;

#[test]
fn parent_and_child_both_report() {
    let run = run_demo(env!("CARGO_BIN_EXE_fork_basic")).unwrap();
    assert_eq!(run.exit_code(), Some(0), "stderr:\n{}", run.stderr_str());
    run.assert_count("[parent] running", 1);
    run.assert_count("[child] running", 1);

    // The child the parent names is the child that printed. No assertion on
    // line ordering: the two processes are unsynchronized.
    let named_child = run.int_after("(child ");
    let child_pid = run.int_after("[child] running, pid ");
    assert_eq!(named_child, child_pid);
}
