use clap::Parser;

use rooted_rs::flip::unrooted_canonical;
use rooted_rs::reroot::rerootings;
use rooted_rs::tree::RootedTree;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Tree in parenthesis form, e.g. "((())())".
    #[arg(value_name = "TREE", default_value = "(((())())())")]
    tree: String,

    /// Print the node table of every re-rooted tree.
    #[clap(long)]
    dump: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let tree: RootedTree = args.tree.parse()?;
    println!("tree = {} with {} nodes", tree, tree.node_count());
    print!("{}", tree.dump());

    for (v, rerooted) in rerootings(&tree) {
        println!("at {}: {}", v, rerooted);
        if args.dump {
            print!("{}", rerooted.dump());
        }
    }

    println!("unrooted = {}", unrooted_canonical(&tree));

    Ok(())
}
