use polydrill::{get_opts, run_polydrill, PolydrillResult};
use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};
use termcolor::{BufferedStandardStream, ColorChoice, WriteColor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr, filtered by `POLYDRILL_LOG` (for example `POLYDRILL_LOG=debug`).
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("POLYDRILL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main_impl() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut ch_stdout = BufferedStandardStream::stdout(ColorChoice::Auto);
    let mut ch_stderr = BufferedStandardStream::stderr(ColorChoice::Auto);
    let is_tty = atty::is(atty::Stream::Stderr);
    let use_color = is_tty && ch_stderr.supports_color();

    let opts = match get_opts(|app| app.get_matches_safe(), use_color) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };
    let PolydrillResult {
        code,
        stdout,
        stderr,
        page,
    } = run_polydrill(opts);

    if !stderr.is_empty() {
        writeln!(&mut ch_stderr, "{}", stderr)?;
        ch_stderr.flush()?;
    }
    if !stdout.is_empty() {
        print_stdout(&stdout, &mut ch_stdout, page)?;
    }

    std::process::exit(code)
}

/// Basically just copied from rust/src/librustc_driver/lib.rs#show_content_with_pager
fn print_stdout(
    stdout: &str,
    mut ch_stdout: &mut BufferedStandardStream,
    page: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut fallback_to_println = false;

    if page {
        let pager_name = env::var_os("PAGER")
            .unwrap_or_else(|| OsString::from(if cfg!(windows) { "more.com" } else { "less" }));

        match Command::new(pager_name).stdin(Stdio::piped()).spawn() {
            Ok(mut pager) => {
                if let Some(pipe) = pager.stdin.as_mut() {
                    if pipe.write_all(stdout.as_bytes()).is_err() {
                        fallback_to_println = true;
                    }
                }

                if pager.wait().is_err() {
                    fallback_to_println = true;
                }
            }
            Err(_) => {
                fallback_to_println = true;
            }
        }
    }

    // If pager fails for whatever reason, we should still print the content to standard output.
    if fallback_to_println || !page {
        writeln!(&mut ch_stdout, "{}", stdout)?;
        ch_stdout.flush()?;
    }

    Ok(())
}

fn main() {
    let out = std::panic::catch_unwind(main_impl);

    if let Err(..) = out {
        eprint!("\nnote: you found an internal polydrill error!\n");
        eprint!("\nnote: please file a bug report with the command line that triggered it\n");
        std::process::exit(2);
    }
}
