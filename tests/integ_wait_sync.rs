use demo_runner::run_demo;

#[test]
fn child_output_precedes_post_wait_output() {
    // The wait edge must hold on every run, not just a lucky scheduling.
    for _ in 0..5 {
        let run = run_demo(env!("CARGO_BIN_EXE_wait_sync")).unwrap();
        assert_eq!(run.exit_code(), Some(0), "stderr:\n{}", run.stderr_str());
        run.assert_order("[child] running", "[parent] collected child");
        run.assert_order("[child] exiting", "[parent] collected child");
        run.assert_order("[parent] collected child", "[parent] done");
        run.assert_marker("exit status 0");
    }
}
