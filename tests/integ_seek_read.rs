use demo_runner::{run_demo_in, scratch_dir};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

#[test]
fn reads_ten_bytes_at_offset_ten() {
    let dir = scratch_dir("seek-full").unwrap();
    std::fs::write(dir.join("seeking"), ALPHABET).unwrap();

    let run = run_demo_in(env!("CARGO_BIN_EXE_seek_read"), &dir).unwrap();
    assert_eq!(run.exit_code(), Some(0), "stderr:\n{}", run.stderr_str());
    run.assert_marker("cursor now at position 10");
    // bytes 10..20 of the alphabet
    run.assert_marker("klmnopqrst");
    assert!(!run.stdout_str().contains("klmnopqrstu"), "read more than 10 bytes");
}

#[test]
fn short_read_near_end_of_file() {
    // 15-byte file: only bytes 10..15 are available at the cursor
    let dir = scratch_dir("seek-short").unwrap();
    std::fs::write(dir.join("seeking"), &ALPHABET[..15]).unwrap();

    let run = run_demo_in(env!("CARGO_BIN_EXE_seek_read"), &dir).unwrap();
    assert_eq!(run.exit_code(), Some(0), "stderr:\n{}", run.stderr_str());
    let stdout = run.stdout_str();
    assert!(stdout.ends_with("klmno\n"), "unexpected tail in:\n{stdout}");
}

#[test]
fn zero_byte_read_at_end_of_file() {
    // the cursor lands exactly at EOF; a zero-length read is not an error
    let dir = scratch_dir("seek-eof").unwrap();
    std::fs::write(dir.join("seeking"), &ALPHABET[..10]).unwrap();

    let run = run_demo_in(env!("CARGO_BIN_EXE_seek_read"), &dir).unwrap();
    assert_eq!(run.exit_code(), Some(0), "stderr:\n{}", run.stderr_str());
    assert_eq!(run.stdout_str(), "cursor now at position 10\n\n");
}

#[test]
fn missing_file_fails_with_diagnostic() {
    let dir = scratch_dir("seek-missing").unwrap();

    let run = run_demo_in(env!("CARGO_BIN_EXE_seek_read"), &dir).unwrap();
    assert_eq!(run.exit_code(), Some(1));
    assert!(run.stdout_str().is_empty(), "stdout:\n{}", run.stdout_str());
    assert!(
        run.stderr_str().contains("cannot open"),
        "stderr:\n{}",
        run.stderr_str()
    );
}
