//! Basic fork demo - one duplication, divergent parent/child prints.
//!
//! Neither side waits for the other, so the two processes race to stdout and
//! the interleaving of their lines is unspecified.

use std::process;

use nix::unistd::{fork, getpid, getppid, ForkResult};

fn main() {
    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            println!("[child] running, pid {} (parent {})", getpid(), getppid());
        }
        Ok(ForkResult::Parent { child }) => {
            println!("[parent] running, pid {} (child {child})", getpid());
        }
        Err(err) => {
            eprintln!("fork_basic: fork failed: {err}");
            process::exit(1);
        }
    }
}
