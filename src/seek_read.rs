//! Positioned read demo - open, lseek to a fixed offset, read a block.
//!
//! Opens the file named `seeking` in the current directory, moves the cursor
//! to byte 10, reads up to 10 bytes there, and writes exactly what came back
//! to stdout. A short read (including zero bytes at end of file) is not an
//! error. The descriptor is closed on every exit path.

use std::io::Write;
use std::process;

use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::unistd::{close, lseek, read, Whence};

const INPUT: &str = "seeking";
const OFFSET: i64 = 10;

fn main() {
    let fd = match open(INPUT, OFlag::O_RDWR, Mode::empty()) {
        Ok(fd) => fd,
        Err(err) => {
            eprintln!("seek_read: cannot open '{INPUT}': {err}");
            process::exit(1);
        }
    };

    let pos = match lseek(fd, OFFSET, Whence::SeekSet) {
        Ok(pos) => pos,
        Err(err) => {
            eprintln!("seek_read: lseek failed: {err}");
            let _ = close(fd);
            process::exit(1);
        }
    };
    println!("cursor now at position {pos}");

    let mut buf = [0u8; 10];
    let n = match read(fd, &mut buf) {
        Ok(n) => n,
        Err(err) => {
            eprintln!("seek_read: read failed: {err}");
            let _ = close(fd);
            process::exit(1);
        }
    };

    // Write back exactly the bytes the read returned, then a newline.
    let mut out = std::io::stdout().lock();
    if let Err(err) = out.write_all(&buf[..n]).and_then(|()| out.write_all(b"\n")) {
        eprintln!("seek_read: write failed: {err}");
        let _ = close(fd);
        process::exit(1);
    }

    if let Err(err) = close(fd) {
        eprintln!("seek_read: close failed: {err}");
        process::exit(1);
    }
}
