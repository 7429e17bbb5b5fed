use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::thread;

use anyhow::Context as _;
use clap::Parser as ClapParser;
use tracing::debug;

use lisp1_5::eval::Context;
use lisp1_5::parse::Parser;
use lisp1_5::print;
use lisp1_5::LispError;

/// An interpreter for the Lisp of page 13 of the LISP 1.5 Programmer's
/// Manual. Reads expressions from the named files, then from stdin.
#[derive(ClapParser)]
#[command(name = "lisp", version, about)]
struct Args {
    /// Source files to load before the interactive session.
    files: Vec<PathBuf>,

    /// Always print S-expressions with explicit dotted pairs.
    #[arg(long)]
    sexpr: bool,

    /// Show the interactive prompt.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    doprompt: bool,

    /// The interactive prompt.
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Maximum call depth; 0 means no limit.
    #[arg(long, default_value_t = 100_000)]
    depth: usize,
}

// Deep Lisp recursion nests deep host recursion, so the interpreter runs
// on a thread with a stack large enough for the default depth limit.
const INTERP_STACK: usize = 1 << 30;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    thread::Builder::new()
        .name("interp".to_string())
        .stack_size(INTERP_STACK)
        .spawn(move || run(args))
        .context("failed to start interpreter thread")?
        .join()
        .map_err(|_| anyhow::anyhow!("interpreter thread panicked"))?
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut context = Context::new(args.depth);
    debug!(
        depth = args.depth,
        atoms = context.atoms.count(),
        "context ready"
    );

    for path in &args.files {
        let file = File::open(path).with_context(|| format!("cannot load {}", path.display()))?;
        debug!("loading {}", path.display());
        let mut parser = Parser::new(Box::new(BufReader::new(file)));
        input(&mut context, &mut parser, "", args.sexpr);
        debug!("loaded {}", path.display());
    }

    let mut parser = Parser::new(Box::new(io::stdin().lock()));
    let prompt = if args.doprompt { args.prompt.as_str() } else { "" };
    input(&mut context, &mut parser, prompt, args.sexpr);
    Ok(())
}

/// The read loop: parse one list expression at a time, evaluate it, and
/// print the value, until the input runs out. Errors are reported with a
/// stack trace, the offending line is discarded, and the loop resumes.
fn input(context: &mut Context, parser: &mut Parser, prompt: &str, sexpr: bool) {
    loop {
        if !prompt.is_empty() {
            print!("{}", prompt);
            io::stdout().flush().ok();
        }
        match parser.skip_space() {
            Some('\n') => continue,
            None => return,
            Some(_) => {}
        }
        match read_one(context, parser, sexpr) {
            Ok(()) => {}
            Err(LispError::Eof) => return,
            Err(err) => {
                eprintln!("{}", err);
                parser.skip_to_end_of_line();
                eprint!("{}", context.stack_trace());
                context.pop_stack();
            }
        }
    }
}

fn read_one(context: &mut Context, parser: &mut Parser, sexpr: bool) -> lisp1_5::LispResult<()> {
    let expr = parser.list(&mut context.atoms)?;
    let value = context.eval(&expr)?;
    if sexpr {
        println!("{}", print::sexpr_string(&value, &context.atoms));
    } else {
        println!("{}", print::list_string(&value, &context.atoms));
    }
    parser.skip_space(); // Grab the trailing newline.
    Ok(())
}
