//! Console probe for the response matcher: type a question per line,
//! read the canned answer back. Useful for checking table order without
//! spinning up the web server.

use std::io::{self, BufRead, Write};

use campus_ai::campus_core::conversation::WELCOME;
use campus_ai::campus_core::responder;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{WELCOME}");
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            println!("{}", responder::respond(&line));
        }
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
