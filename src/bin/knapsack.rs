use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use knapsack_dp::output::{write_table, Layout, Separator};
use knapsack_dp::utils::DEFAULT_MAX_CELLS;
use knapsack_dp::{build_sequence, InvalidInput, KnapsackError, TableBuilder};

const DEMO_WEIGHTS: [i64; 10] = [23, 29, 31, 38, 44, 53, 63, 82, 85, 89];
const DEMO_VALUES: [i64; 10] = [92, 49, 57, 43, 68, 60, 67, 72, 84, 87];
const DEMO_CAPACITY: i64 = 165;

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("knapsack: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    init_tracing();

    if let Err(err) = run(&options) {
        eprintln!("knapsack: {err}");
        let code = if err.is_input_error() { 2 } else { 1 };
        std::process::exit(code);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing() {}

fn run(options: &Options) -> Result<(), KnapsackError> {
    let items = build_sequence(&options.weights, &options.values)?;
    let builder = TableBuilder::new(&items)
        .capacity(options.capacity)
        .max_cells(options.max_cells);

    // The output is opened only once there is something to write to it.
    if options.rolling {
        let best = builder.solve()?;
        let mut out = open_output(options.output.as_deref())?;
        writeln!(out, "{best}")?;
        out.flush()?;
        return Ok(());
    }

    let table = builder.build()?;
    let mut out = open_output(options.output.as_deref())?;
    write_table(&table, options.layout, &mut out)
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    let out: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(out)
}

struct Options {
    weights: Vec<i64>,
    values: Vec<i64>,
    capacity: i64,
    layout: Layout,
    output: Option<PathBuf>,
    max_cells: usize,
    rolling: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut weights = DEMO_WEIGHTS.to_vec();
        let mut values = DEMO_VALUES.to_vec();
        let mut capacity = DEMO_CAPACITY;
        let mut layout = Layout::Answer;
        let mut output = None;
        let mut max_cells = DEFAULT_MAX_CELLS;
        let mut rolling = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            if arg == "--rolling" {
                rolling = true;
                continue;
            }

            let (flag, value) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), value.to_string()),
                None => {
                    let value = args
                        .next()
                        .ok_or_else(|| format!("missing value after {arg}"))?
                        .into();
                    (arg, value)
                }
            };

            match flag.as_str() {
                "--weights" => weights = parse_list(&value).map_err(|e| e.to_string())?,
                "--values" => values = parse_list(&value).map_err(|e| e.to_string())?,
                "--capacity" => {
                    capacity = value
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| format!("capacity must be an integer, got '{value}'"))?
                }
                "--format" => layout = parse_layout(&value)?,
                "--output" => output = Some(PathBuf::from(value)),
                "--max-cells" => {
                    max_cells = value
                        .parse::<usize>()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or_else(|| {
                            format!("max cells must be a positive integer, got '{value}'")
                        })?
                }
                _ => return Err(format!("unrecognized argument '{flag}'")),
            }
        }

        if rolling && layout != Layout::Answer {
            return Err("--rolling only supports --format answer".to_string());
        }

        Ok(Self {
            weights,
            values,
            capacity,
            layout,
            output,
            max_cells,
            rolling,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: knapsack [options]

Solves the 0-1 knapsack problem. Without item flags the built-in demo set
(10 items, capacity 165) is used.

Options:
  --weights <w1,w2,...>         Item weights, positive integers
  --values <v1,v2,...>          Item values, non-negative integers
  --capacity <W>                Knapsack capacity (default: 165)
  --format <answer|legacy|legacy-space|json>
                                Output format (default: answer)
  --output <path>               Write to a file instead of stdout
  --max-cells <N>               Largest table to build (default: {DEFAULT_MAX_CELLS})
  --rolling                     Compute the answer in O(capacity) space
  -h, --help                    Print this help message

Examples:
  knapsack
  knapsack --format legacy --output data.csv
  knapsack --weights 1,2,3,4,5 --values 2,4,6,8,10 --capacity 10
"
        );
    }
}

fn parse_list(value: &str) -> Result<Vec<i64>, InvalidInput> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<i64>()
                .map_err(|_| InvalidInput::Malformed(format!("'{field}' is not an integer")))
        })
        .collect()
}

fn parse_layout(value: &str) -> Result<Layout, String> {
    match value {
        "answer" => Ok(Layout::Answer),
        "legacy" | "csv" => Ok(Layout::Legacy(Separator::Comma)),
        "legacy-space" => Ok(Layout::Legacy(Separator::Space)),
        "json" => Ok(Layout::Json),
        other => Err(format!("unknown format '{other}'")),
    }
}
