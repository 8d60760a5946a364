//! The polydrill app. For an overview of how problems are built, see
//! [libpolydrill's documentation](libpolydrill).

#![deny(missing_docs)]

#[cfg(test)]
mod test;

mod diagnostics;
use diagnostics::emit_polydrill_diagnostics;

use libpolydrill::diagnostics::Diagnostic;
use libpolydrill::{generate_problems, EmitFormat, ProblemConfig, ProblemSink};

use clap::value_t;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Options to run polydrill with.
pub struct Opts {
    /// Problem sheet configuration.
    pub config: ProblemConfig,
    /// Seed for the random source. When [None](Option::None), the source is seeded from entropy.
    pub seed: Option<u64>,
    /// How problems and answers should be emitted.
    pub emit_format: String,
    /// When true, each problem and answer is wrapped in an HTML element for a math typesetter.
    pub html: bool,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// When true, polydrill diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let number = |name: &'static str, default: &'static str, help: &'static str| {
        clap::Arg::with_name(name)
            .long(name)
            .value_name("n")
            .help(help)
            .takes_value(true)
            .allow_hyphen_values(true)
            .default_value(default)
    };

    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(number("count", "10", "Number of problems to generate"))
        .arg(number("min-degree", "1", "Minimum polynomial degree"))
        .arg(number("max-degree", "3", "Maximum polynomial degree"))
        .arg(number(
            "numer-min",
            "-5",
            "Minimum integer value of x, and minimum numerator of a fractional x",
        ))
        .arg(number(
            "numer-max",
            "5",
            "Maximum integer value of x, and maximum numerator of a fractional x",
        ))
        .arg(number("denom-min", "2", "Minimum denominator of a fractional x"))
        .arg(number("denom-max", "5", "Maximum denominator of a fractional x"))
        .arg(
            clap::Arg::with_name("no-int")
                .long("no-int")
                .help("Never evaluate at an integer x."),
        )
        .arg(
            clap::Arg::with_name("no-frac")
                .long("no-frac")
                .help("Never evaluate at a fractional x."),
        )
        .arg(
            clap::Arg::with_name("seed")
                .long("seed")
                .value_name("n")
                .help("Seed for a reproducible problem sheet")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("o")
                .long("output-form")
                .next_line_help(true)
                .help(
                    "Polydrill emit format. Possible values:\n\
                    \tlatex:  LaTeX math mode code, like \"f(x) = x^{2} - 1,\\quad x = \\frac{1}{2}\".\n\
                    \tpretty: Human-readable text, like \"f(x) = x^2 - 1, x = 1/2\".\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("latex")
                .takes_value(true)
                .possible_values(&["latex", "pretty"]),
        )
        .arg(
            clap::Arg::with_name("html")
                .long("html")
                .help("Wrap problems and answers in HTML for a math typesetter. Implies -o latex."),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        );
    let matches = parser(matches)?;

    let config = ProblemConfig {
        count: clap::value_t!(matches, "count", usize)?,
        min_degree: clap::value_t!(matches, "min-degree", u32)?,
        max_degree: clap::value_t!(matches, "max-degree", u32)?,
        numer_min: clap::value_t!(matches, "numer-min", i64)?,
        numer_max: clap::value_t!(matches, "numer-max", i64)?,
        denom_min: clap::value_t!(matches, "denom-min", i64)?,
        denom_max: clap::value_t!(matches, "denom-max", i64)?,
        allow_int: !matches.is_present("no-int"),
        allow_frac: !matches.is_present("no-frac"),
    };
    let seed = if matches.is_present("seed") {
        Some(clap::value_t!(matches, "seed", u64)?)
    } else {
        None
    };

    Ok(Opts {
        config,
        seed,
        emit_format: matches.value_of("output-form").unwrap_or("latex").into(),
        html: matches.is_present("html"),
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        color,
    })
}

/// Output of a polydrill execution.
#[derive(Default)]
pub struct PolydrillResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
    /// Whether the stdout should be emit as paged
    pub page: bool,
}

/// Builds a [PolydrillResult](self::PolydrillResult).
struct PolydrillResultBuilder {
    color: bool,
    stdout: String,
    stderr: String,
    page: bool,
}

impl PolydrillResultBuilder {
    fn new(color: bool) -> Self {
        Self {
            color,
            page: false,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn err(&mut self, diagnostics: &[Diagnostic]) {
        self.stderr
            .push_str(&emit_polydrill_diagnostics(diagnostics, self.color));
    }

    fn page(&mut self, page: bool) {
        self.page = page;
    }

    fn ok(self) -> PolydrillResult {
        PolydrillResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }

    fn failed(self) -> PolydrillResult {
        PolydrillResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
            page: self.page,
        }
    }
}

/// A [ProblemSink] laying problems and answers out as two sections of a sheet.
///
/// Lines are buffered per section; [typeset](ProblemSink::typeset) joins them into the final
/// sheet.
struct SheetWriter {
    html: bool,
    problems: Vec<String>,
    answers: Vec<String>,
    sheet: String,
}

impl SheetWriter {
    fn new(html: bool) -> Self {
        Self {
            html,
            problems: Vec::new(),
            answers: Vec::new(),
            sheet: String::new(),
        }
    }

    fn section(&self, title: &str, class: &str, lines: &[String]) -> String {
        let mut section = String::with_capacity(64 * (lines.len() + 1));
        if self.html {
            section.push_str(&format!("<div id=\"{}s\">\n", class));
            for line in lines {
                section.push_str(&format!(
                    "<div class=\"{} latex\">\\({}\\)</div>\n",
                    class, line
                ));
            }
            section.push_str("</div>");
        } else {
            section.push_str(title);
            let width = lines.len().to_string().len();
            for (i, line) in lines.iter().enumerate() {
                section.push_str(&format!("\n{:>width$}. {}", i + 1, line, width = width));
            }
        }
        section
    }
}

impl ProblemSink for SheetWriter {
    fn push(&mut self, problem: String, answer: String) {
        self.problems.push(problem);
        self.answers.push(answer);
    }

    fn typeset(&mut self) {
        let separator = if self.html { "\n" } else { "\n\n" };
        self.sheet = format!(
            "{}{}{}",
            self.section("Problems", "problem", &self.problems),
            separator,
            self.section("Answers", "answer", &self.answers),
        );
    }
}

/// Runs polydrill end-to-end.
pub fn run_polydrill(opts: Opts) -> PolydrillResult {
    let mut result = PolydrillResultBuilder::new(opts.color);

    if let Some(diag_code) = opts.explain_diagnostic {
        let codes = Diagnostic::all_codes_with_explanations();
        return match codes.get::<str>(&diag_code) {
            Some(explanation) => {
                result.stdout.push_str(&explanation);
                result.page(true);
                result.ok()
            }
            None => {
                result
                    .stderr
                    .push_str(&format!("{} is not a diagnostic code", diag_code));
                result.failed()
            }
        };
    }

    let form = if opts.html {
        EmitFormat::Latex
    } else {
        EmitFormat::from(opts.emit_format)
    };
    let mut rng = match opts.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    debug!(seed = ?opts.seed, ?form, html = opts.html, "running polydrill");

    let mut writer = SheetWriter::new(opts.html);
    match generate_problems(&opts.config, form, &mut rng, &mut writer) {
        Ok(()) => {
            result.stdout.push_str(&writer.sheet);
            result.ok()
        }
        Err(error) => {
            result.err(&[Diagnostic::from(&error)]);
            result.failed()
        }
    }
}
