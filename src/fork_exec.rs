//! Fork/exec demo - the child replaces its image with a listing utility.
//!
//! Exec never returns on success, so reaching the statement after it is the
//! only failure signal there is; the child then reports and exits 1. The
//! parent blocks in wait and surfaces the child's exit status, so the listing
//! output always precedes the completion line.
//!
//! An optional argument overrides the program path (default `/bin/ls`) so the
//! failure fallthrough can be exercised against a path that does not exist.

use std::env;
use std::ffi::CString;
use std::process;

use nix::sys::wait::{wait, WaitStatus};
use nix::unistd::{execv, fork, getpid, ForkResult};

const DEFAULT_PROGRAM: &str = "/bin/ls";

fn main() {
    let program = env::args().nth(1).unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    println!("system active, launching external program");

    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            println!("[child] pid {} replacing image with '{program} -l'", getpid());

            let path = match CString::new(program.as_str()) {
                Ok(path) => path,
                Err(_) => {
                    eprintln!("fork_exec: program path contains an interior NUL");
                    process::exit(1);
                }
            };
            if let Err(err) = execv(&path, &[c"ls", c"-l"]) {
                // Only reachable when the target could not be executed.
                eprintln!("fork_exec: exec failed: {err}");
                process::exit(1);
            }
        }
        Ok(ForkResult::Parent { child }) => {
            println!("[parent] pid {} waiting for child {child}", getpid());
            match wait() {
                Ok(WaitStatus::Exited(_, code)) => {
                    println!("[parent] child task finished, exiting");
                    process::exit(code);
                }
                Ok(other) => {
                    eprintln!("fork_exec: unexpected child state: {other:?}");
                    process::exit(1);
                }
                Err(err) => {
                    eprintln!("fork_exec: wait failed: {err}");
                    process::exit(1);
                }
            }
        }
        Err(err) => {
            eprintln!("fork_exec: fork failed: {err}");
            process::exit(1);
        }
    }
}
