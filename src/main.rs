use husk::error::ShellError;
use husk::flags::Flags;
use husk::highlight::SyntaxHighlighter;
use husk::logging;
use husk::shell::Shell;
use std::env;
use std::process;

fn run() -> Result<i32, ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("husk {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    logging::init(&flags);

    let mut shell = Shell::new(flags);
    shell.run()
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            let message = format!("husk: {}", e);
            eprintln!("{}", SyntaxHighlighter::new().highlight_error(&message));
            1
        }
    };

    process::exit(code);
}
