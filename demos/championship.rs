// Knight tournament: every round, the knights in `l..=r` fight and all but
// `winner` are knocked out. Prints, for each knight, who knocked them out
// first (0 for the champion). Rounds are taken as given: a winner outside
// `l..=r` still tags the whole range, and a reversed range tags nobody.
//
//     echo "4 3
//     1 2 1
//     1 3 3
//     1 4 4" | cargo run --example championship
//
// Set RBTAG_LOG=trace to watch the rebalancing.
use std::{
    env,
    io::{self, BufWriter, Read, Write},
    str::{FromStr, SplitWhitespace},
};

use anyhow::{Context, Result, bail};
use log::{LevelFilter, info, trace};
use rbtag::Tree;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl Tokens<'_> {
    fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let Some(token) = self.inner.next() else {
            bail!("unexpected end of input, expected {what}");
        };
        token
            .parse()
            .with_context(|| format!("invalid {what}: {token:?}"))
    }
}

fn run(input: &str, output: impl Write) -> Result<()> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
    };
    let n: u32 = tokens.next("knight count")?;
    let m: u32 = tokens.next("round count")?;

    let mut knights = Tree::with_capacity(n as usize);
    knights.extend(1..=n);
    info!("{n} knights, {m} rounds");

    for round in 1..=m {
        let l: u32 = tokens.next("round start")?;
        let r: u32 = tokens.next("round end")?;
        let winner: u32 = tokens.next("round winner")?;
        trace!("round {round}: {winner} wins {l}..={r}");
        knights.set_payload(winner, l..=r);
    }

    let mut output = BufWriter::new(output);
    for knight in 1..=n {
        if knight > 1 {
            write!(output, " ")?;
        }
        write!(output, "{}", knights.get_payload(&knight).copied().unwrap_or(0))?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn log_level() -> Result<LevelFilter> {
    match env::var("RBTAG_LOG") {
        Ok(level) => LevelFilter::from_str(&level).with_context(|| format!("RBTAG_LOG={level}")),
        Err(env::VarError::NotPresent) => Ok(LevelFilter::Warn),
        Err(err) => Err(err).context("RBTAG_LOG"),
    }
}

fn main() -> Result<()> {
    TermLogger::init(
        log_level()?,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    run(&input, io::stdout().lock())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output(input: &str) -> String {
        let mut out = Vec::new();
        run(input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn four_knights() {
        assert_eq!("3 1 4 0\n", output("4 3\n1 2 1\n1 3 3\n1 4 4\n"));
    }

    #[test]
    fn eight_knights() {
        assert_eq!(
            "0 8 4 6 4 8 6 1\n",
            output("8 4\n3 5 4\n3 7 6\n2 8 8\n1 8 1\n")
        );
    }

    #[test]
    fn overlapping_rounds() {
        assert_eq!("5 5 5 5 7 7 0\n", output("7 2\n1 4 5\n4 6 7\n"));
    }

    #[test]
    fn truncated_input() {
        let err = run("3 2\n1 2 1\n1 3", &mut Vec::new()).unwrap_err();
        assert_eq!("unexpected end of input, expected round winner", err.to_string());
    }

    #[test]
    fn garbage_input() {
        let err = run("3 x", &mut Vec::new()).unwrap_err();
        assert_eq!("invalid round count: \"x\"", err.to_string());
    }

    #[test]
    fn winner_outside_round() {
        assert_eq!("3 3 0\n", output("3 1\n1 2 3\n"));
    }

    #[test]
    fn reversed_round_tags_nobody() {
        assert_eq!("0 0 0\n", output("3 1\n3 1 2\n"));
    }
}
