//! Wait synchronization demo - a blocking waitpid establishes ordering.
//!
//! Every child line reaches stdout before the parent's post-wait lines, a
//! strict happens-before edge the unsynchronized demos do not have.

use std::process;

use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, getpid, getppid, ForkResult};

fn main() {
    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            println!("[child] running, pid {} (parent {})", getpid(), getppid());
            println!("[child] exiting");
        }
        Ok(ForkResult::Parent { child }) => {
            println!("[parent] forked child {child}, waiting");
            match waitpid(child, None) {
                Ok(WaitStatus::Exited(pid, status)) => {
                    println!("[parent] collected child {pid}, exit status {status}");
                }
                Ok(other) => {
                    println!("[parent] collected child state {other:?}");
                }
                Err(err) => {
                    eprintln!("wait_sync: waitpid failed: {err}");
                    process::exit(1);
                }
            }
            println!("[parent] done, pid {}", getpid());
        }
        Err(err) => {
            eprintln!("wait_sync: fork failed: {err}");
            process::exit(1);
        }
    }
}
