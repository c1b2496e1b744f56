use clap::Parser;

use rooted_rs::cache::{LocalCache, TreeCache};
use rooted_rs::generator::{Generator, GeneratorConfig};
use rooted_rs::oeis::{count_rooted, count_unrooted};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Largest number of nodes.
    #[arg(value_name = "INT", default_value = "6")]
    max: usize,

    /// Print the canonical form of every rooted tree.
    #[clap(long)]
    forms: bool,

    /// Also print the big-integer counts up to this size, without enumerating.
    #[clap(long, value_name = "INT")]
    counts: Option<usize>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let config = GeneratorConfig::default().with_log_progress(true);
    let generator = Generator::with_config(LocalCache::new(), config);

    println!("{:>5} {:>8} {:>9}", "n", "rooted", "clusters");
    for n in 1..=args.max {
        let summary = generator.summary(n);
        println!("{:>5} {:>8} {:>9}", n, summary.tree_count, summary.cluster_count);
        if args.forms {
            println!("{}", summary);
        }
    }

    if let Err(e) = generator.verify(args.max.min(11)) {
        println!("Verification failed: {}", e);
    } else {
        println!("Counts match A000081 and A000055");
    }

    if let Some(max) = args.counts {
        for n in 0..=max {
            println!("A000081({}) = {}, A000055({}) = {}", n, count_rooted(n), n, count_unrooted(n));
        }
    }

    println!("cache hits: {}", generator.cache().hits());
    println!("cache misses: {}", generator.cache().misses());

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
