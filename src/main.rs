use anyhow::{Context, Result, bail};
use clap::Parser;
use ratio::{Approximator, Fraction};

/// Evaluate fraction arithmetic from left to right.
#[derive(Debug, Parser)]
#[command(name = "ratio")]
struct Args {
    /// Tolerance used when approximating decimal terms.
    #[arg(long, value_name = "VALUE")]
    tolerance: Option<f64>,
    /// Iteration limit used when approximating decimal terms.
    #[arg(long, value_name = "N")]
    max_iterations: Option<usize>,
    /// Terms like `3/4`, `-2` or `0.5`, separated by the operators `+`, `-`,
    /// `*` (or `x`) and `/` (or `:`).
    #[arg(
        value_name = "TERM",
        required = true,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    terms: Vec<String>,
}

impl Args {
    fn approximator(&self) -> Approximator {
        let mut approximator = Approximator::new();

        if let Some(tolerance) = self.tolerance {
            approximator = approximator.with_tolerance(tolerance);
        }

        if let Some(max_iterations) = self.max_iterations {
            approximator = approximator.with_max_iterations(max_iterations);
        }

        approximator
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" | "x" => Some(Op::Mul),
            "/" | ":" => Some(Op::Div),
            _ => None,
        }
    }

    fn apply(self, lhs: Fraction, rhs: Fraction) -> Result<Fraction, ratio::Error> {
        match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div => lhs.checked_div(rhs),
        }
    }
}

fn operand(approximator: &Approximator, term: &str) -> Result<Fraction> {
    let value = approximator
        .parse(term)
        .with_context(|| format!("Invalid term `{term}`"))?;
    tracing::debug!(term, %value, "Parsed term");
    Ok(value)
}

/// Evaluate `<term> [<op> <term>]...` from left to right.
fn evaluate<S>(approximator: &Approximator, terms: &[S]) -> Result<Fraction>
where
    S: AsRef<str>,
{
    let Some((first, rest)) = terms.split_first() else {
        bail!("Missing expression");
    };

    let mut value = operand(approximator, first.as_ref())?;
    let mut it = rest.iter().map(AsRef::as_ref);

    while let Some(op) = it.next() {
        let Some(parsed) = Op::parse(op) else {
            bail!("Expected an operator, found `{op}`");
        };

        let Some(term) = it.next() else {
            bail!("Missing term after `{op}`");
        };

        let rhs = operand(approximator, term)?;
        let result = parsed
            .apply(value, rhs)
            .with_context(|| format!("Cannot evaluate `{value} {op} {rhs}`"))?;
        tracing::debug!(?parsed, %value, %rhs, %result, "Applied operator");
        value = result;
    }

    Ok(value)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().map_err(anyhow::Error::msg)?;

    let args = Args::parse();
    let value = evaluate(&args.approximator(), &args.terms)?;
    println!("{value} = {}", value.to_f64());
    Ok(())
}
