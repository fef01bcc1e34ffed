//! Native REPL for poking at the portfolio terminal without a browser.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::{self, BufRead, Write};

    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // respects RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mut term = termfolio::Terminal::new();
    term.greet();
    let mut printed = 0;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        // flush everything new since the last prompt
        for line in &term.output()[printed..] {
            println!("{}", line);
        }
        printed = term.output().len();

        print!("{} $ ", term.current_path());
        let _ = stdout.flush();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = input.trim_end_matches('\n');
        if input.trim() == "exit" {
            break;
        }
        term.execute(input);
        // clear resets the buffer, so resync our cursor
        printed = printed.min(term.output().len());
        // skip re-printing the echo line, the prompt above already showed it
        if printed < term.output().len() {
            printed += 1;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
