//! Fork tree demo - one parent, two children, waitpid on the first.
//!
//! The second fork happens only inside the parent branch of the first, so the
//! result is a tree (parent over two children), never three siblings. The
//! parent awaits child 1 by pid before printing its summary, so child 1's
//! lines always precede the summary; child 2 is unsynchronized and may print
//! before or after it.

use std::process;

use nix::sys::wait::waitpid;
use nix::unistd::{fork, getpid, getppid, ForkResult};

fn main() {
    println!("starting process creation");

    let child1 = match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            println!("first child running, pid {}", getpid());
            println!("first child parent: {}", getppid());
            return;
        }
        Ok(ForkResult::Parent { child }) => child,
        Err(err) => {
            eprintln!("fork_tree: first fork failed: {err}");
            process::exit(1);
        }
    };

    let child2 = match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            println!("second child running, pid {}", getpid());
            println!("second child parent: {}", getppid());
            return;
        }
        Ok(ForkResult::Parent { child }) => child,
        Err(err) => {
            eprintln!("fork_tree: second fork failed: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = waitpid(child1, None) {
        eprintln!("fork_tree: waitpid({child1}) failed: {err}");
        process::exit(1);
    }

    println!("parent summary: pid {}", getpid());
    println!("parent summary: first child {child1}");
    println!("parent summary: second child {child2}");
}
