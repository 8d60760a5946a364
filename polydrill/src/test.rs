use super::*;

fn opts_from(args: &[&str]) -> Result<Opts, clap::Error> {
    let argv: Vec<&str> = std::iter::once("polydrill").chain(args.iter().copied()).collect();
    get_opts(|app| app.get_matches_from_safe(argv), false)
}

fn run(args: &[&str]) -> PolydrillResult {
    run_polydrill(opts_from(args).expect("valid arguments"))
}

#[test]
fn default_opts() {
    let opts = opts_from(&[]).unwrap();
    assert_eq!(
        opts.config,
        ProblemConfig {
            count: 10,
            min_degree: 1,
            max_degree: 3,
            numer_min: -5,
            numer_max: 5,
            denom_min: 2,
            denom_max: 5,
            allow_int: true,
            allow_frac: true,
        }
    );
    assert_eq!(opts.seed, None);
    assert_eq!(opts.emit_format, "latex");
    assert!(!opts.html);
    assert_eq!(opts.explain_diagnostic, None);
}

#[test]
fn parse_all_opts() {
    let opts = opts_from(&[
        "--count",
        "3",
        "--min-degree",
        "0",
        "--max-degree",
        "5",
        "--numer-min",
        "-9",
        "--numer-max=9",
        "--denom-min",
        "-4",
        "--denom-max",
        "4",
        "--no-int",
        "--seed",
        "17",
        "-o",
        "pretty",
    ])
    .unwrap();
    assert_eq!(opts.config.count, 3);
    assert_eq!((opts.config.min_degree, opts.config.max_degree), (0, 5));
    assert_eq!((opts.config.numer_min, opts.config.numer_max), (-9, 9));
    assert_eq!((opts.config.denom_min, opts.config.denom_max), (-4, 4));
    assert!(!opts.config.allow_int);
    assert!(opts.config.allow_frac);
    assert_eq!(opts.seed, Some(17));
    assert_eq!(opts.emit_format, "pretty");
}

#[test]
fn reject_bad_numbers() {
    assert!(opts_from(&["--count", "many"]).is_err());
    assert!(opts_from(&["--min-degree", "-1"]).is_err());
    assert!(opts_from(&["--seed", "-3"]).is_err());
    assert!(opts_from(&["-o", "s-expression"]).is_err());
}

#[test]
fn sheet_layout() {
    let result = run(&["--count", "12", "--seed", "1"]);
    assert_eq!(result.code, 0);
    assert!(result.stderr.is_empty());
    assert!(!result.page);

    let (problems, answers) = {
        let mut sections = result.stdout.split("\n\n");
        (sections.next().unwrap(), sections.next().unwrap())
    };
    let problems: Vec<_> = problems.lines().collect();
    let answers: Vec<_> = answers.lines().collect();
    assert_eq!(problems[0], "Problems");
    assert_eq!(answers[0], "Answers");
    assert_eq!(problems.len(), 13);
    assert_eq!(answers.len(), 13);
    assert!(problems[1].starts_with(" 1. f(x) = "));
    assert!(problems[12].starts_with("12. f(x) = "));
    for line in &problems[1..] {
        assert!(line.contains(",\\quad x = "), "{}", line);
    }
    for line in &answers[1..] {
        assert!(line.contains(". f("), "{}", line);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let a = run(&["--count", "5", "--seed", "99"]);
    let b = run(&["--count", "5", "--seed", "99"]);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn pretty_output() {
    let result = run(&["--count", "4", "--seed", "2", "-o", "pretty"]);
    assert_eq!(result.code, 0);
    assert!(!result.stdout.contains('\\'), "{}", result.stdout);
    assert!(!result.stdout.contains('{'), "{}", result.stdout);
}

#[test]
fn single_candidate_point() {
    let result = run(&[
        "--count",
        "3",
        "--seed",
        "4",
        "--numer-min",
        "1",
        "--numer-max",
        "1",
        "--denom-min",
        "2",
        "--denom-max",
        "2",
        "--no-int",
    ]);
    assert_eq!(result.code, 0);
    assert_eq!(
        result.stdout.matches(",\\quad x = \\frac{1}{2}").count(),
        3,
        "{}",
        result.stdout
    );
    assert_eq!(result.stdout.matches(" f(\\frac{1}{2}) = ").count(), 3);
}

#[test]
fn html_output() {
    let result = run(&["--count", "2", "--seed", "8", "--html", "-o", "pretty"]);
    assert_eq!(result.code, 0);
    let lines: Vec<_> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "<div id=\"problems\">");
    assert!(lines[1].starts_with("<div class=\"problem latex\">\\(f(x) = "));
    assert!(lines[1].ends_with("\\)</div>"));
    assert!(lines[1].contains(",\\quad x = "));
    assert_eq!(lines[3], "</div>");
    assert_eq!(lines[4], "<div id=\"answers\">");
    assert!(lines[5].starts_with("<div class=\"answer latex\">\\(f("));
    assert_eq!(lines[7], "</div>");
}

#[test]
fn zero_count() {
    let result = run(&["--count", "0"]);
    assert_eq!(result.code, 0);
    assert_eq!(result.stdout, "Problems\n\nAnswers");
}

#[test]
fn invalid_config() {
    let result = run(&["--min-degree", "4", "--max-degree", "2"]);
    assert_eq!(result.code, 1);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("E0004"), "{}", result.stderr);
    assert!(
        result
            .stderr
            .contains("invalid degree bounds: minimum 4 exceeds maximum 2"),
        "{}",
        result.stderr
    );
}

#[test]
fn config_limits() {
    let result = run(&["--numer-min=-9223372036854775808"]);
    assert_eq!(result.code, 1);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("E0005"), "{}", result.stderr);
    assert!(
        result.stderr.contains(
            "numerator magnitude 9223372036854775808 exceeds the limit of 9223372036854775807"
        ),
        "{}",
        result.stderr
    );

    let result = run(&["--max-degree", "100000"]);
    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("E0005"), "{}", result.stderr);

    let result = run(&["--numer-min", "-500000", "--numer-max", "500000"]);
    assert_eq!(result.code, 1);
    assert!(result.stderr.contains("candidate count"), "{}", result.stderr);

    let result = run(&["--explain", "E0005"]);
    assert_eq!(result.code, 0);
    assert!(result.stdout.contains("at most 256"));
}

#[test]
fn overflow_aborts_batch() {
    let result = run(&[
        "--min-degree",
        "30",
        "--max-degree",
        "30",
        "--numer-min",
        "1",
        "--numer-max",
        "1",
        "--denom-min",
        "9",
        "--denom-max",
        "9",
        "--no-int",
    ]);
    assert_eq!(result.code, 1);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("E0002"), "{}", result.stderr);
}

#[test]
fn explain() {
    let result = run(&["--explain", "E0004"]);
    assert_eq!(result.code, 0);
    assert!(result.page);
    assert!(result.stdout.contains("minimum larger than its maximum"));

    let result = run(&["--explain", "E9999"]);
    assert_eq!(result.code, 1);
    assert_eq!(result.stderr, "E9999 is not a diagnostic code");
}
