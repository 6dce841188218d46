use mtf_filter::filter::filter_graphs;
use std::io::{self, BufWriter};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());

    match filter_graphs(stdin.lock(), writer) {
        Ok(stats) => {
            eprintln!(
                "{} graphs read; {} maximal triangle-free twin-free graphs written",
                stats.read, stats.accepted
            );
        }
        Err(e) => {
            eprintln!("mtf-filter: {e}");
            std::process::exit(1);
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  mtf-filter < input.g6 > output.g6\n\nReads graph6 lines from stdin and writes to stdout the graphs that are\nboth maximal triangle-free and twin-free, in input order. A summary is\nprinted to stderr.\n"
    );
    std::process::exit(code)
}
