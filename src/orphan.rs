//! Orphan re-parenting demo.
//!
//! The parent exits right after forking; the child naps long enough for that
//! to have happened, then re-reads its parent pid. The OS re-parents orphans
//! to a reaper process (pid 1, or the nearest subreaper), so the second
//! reading differs from the first.

use std::process;
use std::thread::sleep;
use std::time::Duration;

use nix::unistd::{fork, getpid, getppid, ForkResult};

/// Long enough for the parent to have exited before the child resumes.
const ORPHAN_NAP: Duration = Duration::from_secs(2);

fn main() {
    match unsafe { fork() } {
        Ok(ForkResult::Parent { child }) => {
            println!("[parent] running, pid {} (child {child})", getpid());
            // Stay alive for a moment so the child's first parent-pid reading
            // happens while the parent still exists.
            sleep(Duration::from_millis(300));
            println!("[parent] done, terminating now");
        }
        Ok(ForkResult::Child) => {
            println!("[child] started, pid {} original parent {}", getpid(), getppid());
            println!("[child] pausing to let the parent finish");
            sleep(ORPHAN_NAP);
            println!("[child] resumed, pid {} adopted by {}", getpid(), getppid());
        }
        Err(err) => {
            eprintln!("orphan: fork failed: {err}");
            process::exit(1);
        }
    }
}
