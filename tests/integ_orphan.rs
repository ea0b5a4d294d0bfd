use demo_runner::run_demo;

#[test]
fn child_is_reparented_after_parent_exits() {
    let run = run_demo(env!("CARGO_BIN_EXE_orphan")).unwrap();
    assert_eq!(run.exit_code(), Some(0), "stderr:\n{}", run.stderr_str());

    let parent_pid = run.int_after("[parent] running, pid ");
    let original = run.int_after("original parent ");
    let adopted = run.int_after("adopted by ");

    // The child starts out owned by the real parent...
    assert_eq!(original, parent_pid);
    // ...and after the parent exits it belongs to a reaper process. Which
    // reaper (pid 1 or a subreaper) is the OS's business; only the change is
    // observable.
    assert_ne!(adopted, original, "child was never re-parented:\n{}", run.stdout_str());
}
