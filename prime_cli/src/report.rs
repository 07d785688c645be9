use std::io::{self, Write};

use itertools::Itertools;
use prettytable::{Table, row};
use prime_checker::{Method, count_trial_divisions, demo::DemoReport};

pub fn write_demo(out: &mut impl Write, report: &DemoReport) -> io::Result<()> {
    let mut table = Table::new();
    table.set_titles(row!["n", "is_prime", "is_prime_naive"]);
    for c in &report.classifications {
        table.add_row(row![c.n, c.optimized, c.naive]);
    }
    table.print(out)?;

    let timing = &report.timing;
    writeln!(out)?;
    writeln!(
        out,
        "{}: is_prime = {} ({} ns)",
        timing.n,
        timing.optimized.is_prime,
        timing.optimized.elapsed.as_nanos()
    )?;
    writeln!(
        out,
        "{}: is_prime_naive = {} ({} ns)",
        timing.n,
        timing.naive.is_prime,
        timing.naive.elapsed.as_nanos()
    )?;
    match timing.speedup() {
        Some(ratio) => writeln!(out, "is_prime was {ratio:.2}x faster than is_prime_naive"),
        None => writeln!(
            out,
            "is_prime finished below the timer resolution, speed ratio undefined"
        ),
    }
}

pub fn write_check(
    out: &mut impl Write,
    n: i64,
    methods: &[Method],
    with_count: bool,
) -> io::Result<()> {
    for &method in methods {
        let count = count_trial_divisions(method, n);
        let verdict = if count.is_prime { "prime" } else { "not prime" };
        if with_count {
            writeln!(
                out,
                "{method}: {n} is {verdict} ({} trial divisions)",
                count.divisions
            )?;
        } else {
            writeln!(out, "{method}: {n} is {verdict}")?;
        }
    }
    if methods.len() > 1 && !methods.iter().map(|m| m.check(n)).all_equal() {
        tracing::warn!(n, "checks disagree");
    }
    Ok(())
}
